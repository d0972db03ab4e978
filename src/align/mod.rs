pub mod aligner;
