use crate::dom::node::ElementNode;
use crate::foundation::error::{TweenError, TweenResult};
use crate::foundation::values::{Dim, ViewBox};
use crate::tween::config::TweenConfig;
use crate::tween::descriptor::{AnimIdAlloc, AnimTarget, AnimationDescriptor, FillPolicy};
use crate::tween::matcher::{MergeCtx, MergedNode, merge_pair_root};

/// Accumulates keyframe documents and lazily produces one merged, animated
/// document per consecutive pair.
///
/// Keyframes are immutable once added. Dimension units must agree across all
/// frames; the merged output carries the maximum width/height and the union
/// of the declared viewBoxes.
#[derive(Debug, Default)]
pub struct Tweener {
    cfg: TweenConfig,
    keyframes: Vec<ElementNode>,
    max_width: f64,
    max_height: f64,
    width_unit: Option<String>,
    height_unit: Option<String>,
    viewbox: ViewBox,
}

impl Tweener {
    /// Create a tweener with the given configuration.
    pub fn new(cfg: TweenConfig) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    /// Add the next keyframe document.
    ///
    /// Parses `width`/`height`/`viewBox` off the root and folds them into
    /// the output dimensions. A unit that disagrees with earlier keyframes
    /// is a [`TweenError::Config`], raised immediately.
    pub fn add_keyframe(&mut self, root: ElementNode) -> TweenResult<()> {
        if let Some(raw) = root.attrs.get("width") {
            let dim = Dim::parse(raw)?;
            check_unit(&mut self.width_unit, &dim.unit)?;
            self.max_width = self.max_width.max(dim.value);
        }
        if let Some(raw) = root.attrs.get("height") {
            let dim = Dim::parse(raw)?;
            check_unit(&mut self.height_unit, &dim.unit)?;
            self.max_height = self.max_height.max(dim.value);
        }
        if let Some(raw) = root.attrs.get("viewBox") {
            let vb = ViewBox::parse(raw)?;
            self.viewbox.left = self.viewbox.left.min(vb.left);
            self.viewbox.top = self.viewbox.top.min(vb.top);
            self.viewbox.width = self.viewbox.width.max(vb.width);
            self.viewbox.height = self.viewbox.height.max(vb.height);
        }
        self.keyframes.push(root);
        Ok(())
    }

    /// Number of keyframes added so far.
    pub fn keyframe_count(&self) -> usize {
        self.keyframes.len()
    }

    /// Lazily yield one merged document per consecutive keyframe pair.
    ///
    /// Animation ids stay unique across all pairs of one call; a fresh call
    /// restarts the numbering.
    pub fn tweens(&self) -> impl Iterator<Item = TweenResult<MergedNode>> + '_ {
        let mut ids = AnimIdAlloc::default();
        self.keyframes
            .windows(2)
            .map(move |pair| self.tween_pair(&pair[0], &pair[1], &mut ids))
    }

    #[tracing::instrument(skip(self, from, to, ids))]
    fn tween_pair(
        &self,
        from: &ElementNode,
        to: &ElementNode,
        ids: &mut AnimIdAlloc,
    ) -> TweenResult<MergedNode> {
        let mut ctx = MergeCtx {
            cfg: &self.cfg,
            ids,
        };
        let mut root = merge_pair_root(from, to, &mut ctx)?;
        if let Some(unit) = &self.width_unit {
            root.attrs
                .set("width", Dim::new(self.max_width, unit.clone()).to_string());
        }
        if let Some(unit) = &self.height_unit {
            root.attrs.set(
                "height",
                Dim::new(self.max_height, unit.clone()).to_string(),
            );
        }
        root.attrs.set("viewBox", self.viewbox.to_string());
        root.children.push(self.sync_scaffold());
        Ok(root)
    }

    /// Invisible scaffold carrying the shared timers every fade and
    /// transition descriptor keys to.
    ///
    /// The three timers chain: fade-out at document start, the main
    /// transition when fade-in ends, fade-in when the transition starts.
    /// `fadeout_early` delays the transition until fade-out completes;
    /// `fadein_late` delays fade-in until the transition completes.
    fn sync_scaffold(&self) -> MergedNode {
        let cfg = &self.cfg;
        let transition_begin = if cfg.fadeout_early {
            format!("{}.end", cfg.fadeout_trigger)
        } else {
            format!("0s; {}.end", cfg.fadein_trigger)
        };
        let fadein_begin = if cfg.fadein_late {
            format!("{}.end", cfg.transition_trigger)
        } else {
            format!("{}.start", cfg.transition_trigger)
        };
        let timers = [
            (cfg.fadein_trigger.clone(), fadein_begin, &cfg.fadein_duration),
            (
                cfg.transition_trigger.clone(),
                transition_begin,
                &cfg.duration,
            ),
            (
                cfg.fadeout_trigger.clone(),
                "0s".to_string(),
                &cfg.fadeout_duration,
            ),
        ];
        let anims = timers
            .into_iter()
            .map(|(id, begin, dur)| AnimationDescriptor {
                id,
                target: AnimTarget::Attribute("opacity".to_string()),
                from: "0".to_string(),
                to: "1".to_string(),
                dur: dur.clone(),
                begin: Some(begin),
                fill: FillPolicy::Remove,
            })
            .collect();

        let text = MergedNode {
            tag: "text".to_string(),
            attrs: [("y", "20"), ("opacity", "0")].into_iter().collect(),
            text: Some("Test".to_string()),
            tail: None,
            anims,
            children: Vec::new(),
        };
        MergedNode {
            tag: "g".to_string(),
            attrs: [("opacity", "0")].into_iter().collect(),
            text: None,
            tail: None,
            anims: Vec::new(),
            children: vec![text],
        }
    }
}

fn check_unit(known: &mut Option<String>, seen: &str) -> TweenResult<()> {
    match known {
        Some(unit) if unit != seen => Err(TweenError::config(format!(
            "mixed units in keyframe dimensions: '{unit}' vs '{seen}'"
        ))),
        _ => {
            *known = Some(seen.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tween/tweener.rs"]
mod tests;
