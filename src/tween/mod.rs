pub mod config;
pub mod descriptor;
pub mod matcher;
pub mod tweener;
