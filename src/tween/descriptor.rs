use crate::dom::node::AttrMap;
use crate::foundation::error::{TweenError, TweenResult};
use crate::path::model::serialize_path;
use crate::path::parse::parse_path;
use crate::path::reconcile::tweenable_paths;
use crate::tween::config::TweenConfig;

/// The attribute name that identifies elements across keyframes.
pub const IDENTITY_ATTR: &str = "id";

/// Attribute name carrying path data.
const PATH_ATTR: &str = "d";

/// Attribute name carrying a transform function list.
const TRANSFORM_ATTR: &str = "transform";

/// Transform function names the decomposer recognizes.
const TRANSFORM_FNS: [&str; 6] = ["translate", "rotate", "scale", "matrix", "skewX", "skewY"];

/// One attribute-level change between a matched element pair.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttributeDelta {
    /// Attribute name.
    pub name: String,
    /// Value on the from side.
    pub from: String,
    /// Value on the to side; empty when the attribute disappears.
    pub to: String,
}

/// What an animation descriptor drives.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnimTarget {
    /// A plain attribute animation.
    Attribute(String),
    /// One function of a `transform` attribute.
    Transform {
        /// Function name as spelled in the source (`translate`, `skewX`, ...).
        fn_name: String,
    },
}

/// Post-animation fill policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FillPolicy {
    /// Hold the final animated value.
    Freeze,
    /// Revert to the document value when the animation ends.
    Remove,
}

/// One synthesized animation, opaque to this core.
///
/// An external emitter renders descriptors into concrete markup; the core
/// only guarantees unique ids and trigger-keyed synchronization.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationDescriptor {
    /// Unique id for the emitted animation element.
    pub id: String,
    /// Animated target.
    pub target: AnimTarget,
    /// Starting value.
    pub from: String,
    /// Ending value.
    pub to: String,
    /// Duration.
    pub dur: String,
    /// Start trigger; `None` starts at document time zero.
    pub begin: Option<String>,
    /// Fill policy once the animation completes.
    pub fill: FillPolicy,
}

/// Allocator for unique animation ids, threaded through a merge as explicit
/// context rather than process-global state.
#[derive(Debug, Default)]
pub(crate) struct AnimIdAlloc(usize);

impl AnimIdAlloc {
    pub(crate) fn next_id(&mut self) -> String {
        let id = format!("tween_{}", self.0);
        self.0 += 1;
        id
    }
}

/// Diff two attribute maps into ordered deltas.
///
/// Only attributes present on the from side participate; a missing to-side
/// value diffs against the empty string. The identity attribute is excluded
/// by construction.
pub fn attr_diff(from_attrs: &AttrMap, to_attrs: &AttrMap) -> Vec<AttributeDelta> {
    let mut deltas = Vec::new();
    for (name, from_val) in from_attrs.iter() {
        if name == IDENTITY_ATTR {
            continue;
        }
        let to_val = to_attrs.get(name).unwrap_or("");
        if from_val != to_val {
            deltas.push(AttributeDelta {
                name: name.to_string(),
                from: from_val.to_string(),
                to: to_val.to_string(),
            });
        }
    }
    deltas
}

/// Parse a transform attribute into `(function, raw_args)` pairs.
///
/// Function names match case-insensitively and keep their source spelling;
/// argument text passes through verbatim; unrecognized text is skipped.
pub fn transform_functions(value: &str) -> Vec<(String, String)> {
    let bytes = value.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    'scan: while i < bytes.len() {
        for name in TRANSFORM_FNS {
            let end = i + name.len();
            if end < bytes.len()
                && bytes[end] == b'('
                && value
                    .get(i..end)
                    .is_some_and(|s| s.eq_ignore_ascii_case(name))
            {
                if let Some(close) = value[end + 1..].find(')') {
                    let args = &value[end + 1..end + 1 + close];
                    if !args.is_empty() {
                        out.push((value[i..end].to_string(), args.to_string()));
                        i = end + close + 2;
                        continue 'scan;
                    }
                }
            }
        }
        i += 1;
    }
    out
}

/// Turn a delta set into descriptors keyed to the main transition trigger.
pub(crate) fn animate_descriptors(
    cfg: &TweenConfig,
    ids: &mut AnimIdAlloc,
    deltas: &[AttributeDelta],
) -> TweenResult<Vec<AnimationDescriptor>> {
    let begin = Some(cfg.transition_begin());
    let mut out = Vec::new();
    for delta in deltas {
        if delta.name == IDENTITY_ATTR {
            return Err(TweenError::integrity(
                "identity attribute reached the animation generator",
            ));
        }
        if delta.name == TRANSFORM_ATTR {
            decompose_transform(cfg, ids, delta, &begin, &mut out);
        } else if delta.name == PATH_ATTR {
            out.push(reconcile_path_delta(cfg, ids, delta, &begin)?);
        } else {
            out.push(AnimationDescriptor {
                id: ids.next_id(),
                target: AnimTarget::Attribute(delta.name.clone()),
                from: delta.from.clone(),
                to: delta.to.clone(),
                dur: cfg.duration.clone(),
                begin: begin.clone(),
                fill: FillPolicy::Freeze,
            });
        }
    }
    Ok(out)
}

/// Per-function transform diff. A differing count or order of functions
/// suppresses the whole attribute.
fn decompose_transform(
    cfg: &TweenConfig,
    ids: &mut AnimIdAlloc,
    delta: &AttributeDelta,
    begin: &Option<String>,
    out: &mut Vec<AnimationDescriptor>,
) {
    let from_fns = transform_functions(&delta.from);
    let to_fns = transform_functions(&delta.to);
    if from_fns.len() != to_fns.len()
        || from_fns
            .iter()
            .zip(&to_fns)
            .any(|((from_name, _), (to_name, _))| from_name != to_name)
    {
        return;
    }
    for ((fn_name, from_args), (_, to_args)) in from_fns.into_iter().zip(to_fns) {
        if from_args != to_args {
            out.push(AnimationDescriptor {
                id: ids.next_id(),
                target: AnimTarget::Transform { fn_name },
                from: from_args,
                to: to_args,
                dur: cfg.duration.clone(),
                begin: begin.clone(),
                fill: FillPolicy::Freeze,
            });
        }
    }
}

/// Path deltas animate reconciled, shape-compatible paths rather than the
/// raw mismatched strings.
fn reconcile_path_delta(
    cfg: &TweenConfig,
    ids: &mut AnimIdAlloc,
    delta: &AttributeDelta,
    begin: &Option<String>,
) -> TweenResult<AnimationDescriptor> {
    let from_path = parse_path(&delta.from)?;
    let to_path = parse_path(&delta.to)?;
    let (from_path, to_path) = tweenable_paths(&from_path, &to_path)?;
    Ok(AnimationDescriptor {
        id: ids.next_id(),
        target: AnimTarget::Attribute(PATH_ATTR.to_string()),
        from: serialize_path(&from_path)?,
        to: serialize_path(&to_path)?,
        dur: cfg.duration.clone(),
        begin: begin.clone(),
        fill: FillPolicy::Freeze,
    })
}

fn fade_descriptor(
    ids: &mut AnimIdAlloc,
    from: &str,
    to: &str,
    begin: String,
    dur: &str,
) -> AnimationDescriptor {
    AnimationDescriptor {
        id: ids.next_id(),
        target: AnimTarget::Attribute("opacity".to_string()),
        from: from.to_string(),
        to: to.to_string(),
        dur: dur.to_string(),
        begin: Some(begin),
        fill: FillPolicy::Freeze,
    }
}

/// Fade descriptor for an element leaving the document.
///
/// Pins the element's current opacity on the copy and fades it to zero. With
/// `at_transition` the fade keys to the main transition start instead of the
/// fade-out timer.
pub(crate) fn fade_out_element(
    cfg: &TweenConfig,
    ids: &mut AnimIdAlloc,
    attrs: &mut AttrMap,
    at_transition: bool,
) -> AnimationDescriptor {
    let opacity = attrs.get("opacity").unwrap_or("1").to_string();
    attrs.set("opacity", opacity.clone());
    let begin = if at_transition {
        cfg.transition_begin()
    } else {
        cfg.fadeout_begin()
    };
    fade_descriptor(ids, &opacity, "0", begin, &cfg.fadeout_duration)
}

/// Fade descriptor for an element entering the document.
///
/// Rewrites the copy's opacity to zero and fades up to the original value.
pub(crate) fn fade_in_element(
    cfg: &TweenConfig,
    ids: &mut AnimIdAlloc,
    attrs: &mut AttrMap,
    at_transition: bool,
) -> AnimationDescriptor {
    let opacity = attrs.get("opacity").unwrap_or("1").to_string();
    attrs.set("opacity", "0");
    let begin = if at_transition {
        cfg.transition_begin()
    } else {
        cfg.fadein_begin()
    };
    fade_descriptor(ids, "0", &opacity, begin, &cfg.fadein_duration)
}

#[cfg(test)]
#[path = "../../tests/unit/tween/descriptor.rs"]
mod tests;
