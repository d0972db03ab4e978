//! svgtween merges pairs of SVG keyframe documents into one animated document.
//!
//! Keyframes arrive as in-memory element trees; the output is a merged tree
//! annotated with animation descriptors that an external emitter renders into
//! wire-format markup.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: path mini-language text -> [`PathCmd`] sequences
//! 2. **Align**: two command-letter sequences -> gap-padded index correspondences
//! 3. **Reconcile**: mismatched paths -> equal-shape, tweenable pairs
//! 4. **Merge**: two [`ElementNode`] trees -> one [`MergedNode`] tree carrying
//!    [`AnimationDescriptor`]s per changed attribute
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every container preserves document order; merging is a
//!   pure function of its inputs.
//! - **No IO**: keyframes are added via [`Tweener::add_keyframe`]; reading
//!   documents and emitting markup are external collaborators.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod align;
mod dom;
mod foundation;
mod path;
mod tween;

pub use align::aligner::{Alignment, align};
pub use dom::node::{AttrMap, ElementNode, TagCategory};
pub use foundation::error::{TweenError, TweenResult};
pub use foundation::values::{Dim, Point, ViewBox};
pub use path::model::{COMMAND_LETTERS, Path, PathCmd, arg_groups, serialize_path};
pub use path::parse::parse_path;
pub use path::points::{collapse_to_point, end_point};
pub use path::reconcile::{
    fill_placeholders, normalize_split_lists, split_for_tweening, tweenable_paths,
};
pub use tween::config::TweenConfig;
pub use tween::descriptor::{
    AnimTarget, AnimationDescriptor, AttributeDelta, FillPolicy, IDENTITY_ATTR, attr_diff,
    transform_functions,
};
pub use tween::matcher::{MergedNode, merge_trees};
pub use tween::tweener::Tweener;
