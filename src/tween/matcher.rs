use crate::dom::node::{AttrMap, ElementNode, TagCategory};
use crate::foundation::error::TweenResult;
use crate::tween::config::TweenConfig;
use crate::tween::descriptor::{
    AnimIdAlloc, AnimationDescriptor, IDENTITY_ATTR, animate_descriptors, attr_diff,
    fade_in_element, fade_out_element,
};

/// One node of the merged output tree: an element plus the animation
/// descriptors attached to it.
///
/// Merged trees are built fresh per keyframe pair and never alias input
/// nodes or each other.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MergedNode {
    /// Tag name.
    pub tag: String,
    /// Attributes of the merged element.
    pub attrs: AttrMap,
    /// Text preceding the first child.
    pub text: Option<String>,
    /// Text following this element's end tag.
    pub tail: Option<String>,
    /// Animation descriptors for the external emitter.
    pub anims: Vec<AnimationDescriptor>,
    /// Child nodes in document order.
    pub children: Vec<MergedNode>,
}

impl MergedNode {
    fn from_element_shallow(el: &ElementNode) -> Self {
        Self {
            tag: el.tag.clone(),
            attrs: el.attrs.clone(),
            text: el.text.clone(),
            tail: el.tail.clone(),
            anims: Vec::new(),
            children: Vec::new(),
        }
    }

    fn from_element_deep(el: &ElementNode) -> Self {
        let mut node = Self::from_element_shallow(el);
        node.children = el.children.iter().map(Self::from_element_deep).collect();
        node
    }
}

/// State threaded through one merge recursion.
pub(crate) struct MergeCtx<'a> {
    pub(crate) cfg: &'a TweenConfig,
    pub(crate) ids: &'a mut AnimIdAlloc,
}

/// Merge two element trees into one animated tree.
///
/// Matched children carry attribute-delta animations; children only present
/// on the from side fade out, children only present on the to side fade in.
/// With `TweenConfig::group_matching`, children of matched group containers
/// merge positionally even without identity attributes.
#[tracing::instrument(skip(from, to, cfg))]
pub fn merge_trees(
    from: &ElementNode,
    to: &ElementNode,
    cfg: &TweenConfig,
) -> TweenResult<MergedNode> {
    let mut ids = AnimIdAlloc::default();
    let mut ctx = MergeCtx {
        cfg,
        ids: &mut ids,
    };
    merge_pair_root(from, to, &mut ctx)
}

/// Root entry shared by [`merge_trees`] and the tweener.
///
/// The root pair is matched by definition; its own attributes are not
/// diffed (the document root's dimensions reconcile by folding, not by
/// animation). Group propagation is decided by the root's own tag.
pub(crate) fn merge_pair_root(
    from: &ElementNode,
    to: &ElementNode,
    ctx: &mut MergeCtx<'_>,
) -> TweenResult<MergedNode> {
    let group_children = ctx.cfg.group_matching && from.category() == TagCategory::Group;
    merge_children(from, to, group_children, ctx)
}

/// Merge one matched pair: diff attributes, merge children, and wrap a text
/// change into a cross-fade container.
fn merge_pair(
    from: &ElementNode,
    to: &ElementNode,
    group_merge: bool,
    ctx: &mut MergeCtx<'_>,
) -> TweenResult<MergedNode> {
    let deltas = attr_diff(&from.attrs, &to.attrs);
    let descriptors = animate_descriptors(ctx.cfg, ctx.ids, &deltas)?;
    let mut merged = merge_children(from, to, group_merge, ctx)?;

    if from.text != to.text {
        // Text does not interpolate: overlap a fading from-copy with a
        // rising to-copy, both keyed to the transition start.
        let mut first = merged;
        first.anims.extend(descriptors);
        let fade_out = fade_out_element(ctx.cfg, ctx.ids, &mut first.attrs, true);
        first.anims.push(fade_out);
        first.tail = None;

        let mut second = MergedNode::from_element_deep(to);
        let fade_in = fade_in_element(ctx.cfg, ctx.ids, &mut second.attrs, true);
        second.anims.push(fade_in);
        second.tail = None;

        return Ok(MergedNode {
            tag: "g".to_string(),
            attrs: AttrMap::new(),
            text: None,
            tail: from.tail.clone(),
            anims: Vec::new(),
            children: vec![first, second],
        });
    }

    merged.anims.extend(descriptors);
    Ok(merged)
}

/// Match and merge the children of one pair.
///
/// The claimed set is local to this call and discarded on return; scans are
/// first-match-wins over document order.
fn merge_children(
    from: &ElementNode,
    to: &ElementNode,
    group_merge: bool,
    ctx: &mut MergeCtx<'_>,
) -> TweenResult<MergedNode> {
    let mut result = MergedNode::from_element_shallow(from);
    let mut claimed = vec![false; to.children.len()];

    for sub_from in &from.children {
        let matched = if group_merge {
            claim_positional(sub_from, to, &mut claimed)
        } else {
            match sub_from.attrs.get(IDENTITY_ATTR) {
                Some(eid) => claim_by_identity(sub_from, eid, to, &mut claimed),
                None => None,
            }
        };
        let merged_child = match matched {
            Some(sub_to) => {
                let group_next =
                    ctx.cfg.group_matching && sub_from.category() == TagCategory::Group;
                merge_pair(sub_from, sub_to, group_next, ctx)?
            }
            None => fade_out_copy(sub_from, ctx),
        };
        result.children.push(merged_child);
    }

    for (index, sub_to) in to.children.iter().enumerate() {
        if !claimed[index] {
            result.children.push(fade_in_copy(sub_to, ctx));
        }
    }
    Ok(result)
}

/// First unclaimed to-child with the same tag and identity value.
fn claim_by_identity<'t>(
    sub_from: &ElementNode,
    eid: &str,
    to: &'t ElementNode,
    claimed: &mut [bool],
) -> Option<&'t ElementNode> {
    let (index, found) = to.children.iter().enumerate().find(|(index, cand)| {
        !claimed[*index]
            && cand.tag == sub_from.tag
            && cand.attrs.get(IDENTITY_ATTR) == Some(eid)
    })?;
    claimed[index] = true;
    Some(found)
}

/// First unclaimed to-child with the same tag, in document order.
fn claim_positional<'t>(
    sub_from: &ElementNode,
    to: &'t ElementNode,
    claimed: &mut [bool],
) -> Option<&'t ElementNode> {
    let (index, found) = to
        .children
        .iter()
        .enumerate()
        .find(|(index, cand)| !claimed[*index] && cand.tag == sub_from.tag)?;
    claimed[index] = true;
    Some(found)
}

fn fade_out_copy(el: &ElementNode, ctx: &mut MergeCtx<'_>) -> MergedNode {
    let mut copy = MergedNode::from_element_deep(el);
    let fade = fade_out_element(ctx.cfg, ctx.ids, &mut copy.attrs, false);
    copy.anims.push(fade);
    copy
}

fn fade_in_copy(el: &ElementNode, ctx: &mut MergeCtx<'_>) -> MergedNode {
    let mut copy = MergedNode::from_element_deep(el);
    let fade = fade_in_element(ctx.cfg, ctx.ids, &mut copy.attrs, false);
    copy.anims.push(fade);
    copy
}

#[cfg(test)]
#[path = "../../tests/unit/tween/matcher.rs"]
mod tests;
