use super::*;

use crate::tween::descriptor::AnimTarget;

fn el(tag: &str, attrs: &[(&str, &str)]) -> ElementNode {
    ElementNode {
        tag: tag.to_string(),
        attrs: attrs.iter().copied().collect(),
        ..ElementNode::default()
    }
}

fn with_children(mut node: ElementNode, children: Vec<ElementNode>) -> ElementNode {
    node.children = children;
    node
}

fn opacity_anims(node: &MergedNode) -> usize {
    node.anims
        .iter()
        .filter(|a| a.target == AnimTarget::Attribute("opacity".to_string()))
        .count()
}

#[test]
fn matched_pair_carries_one_attribute_delta() {
    let from = with_children(el("g", &[]), vec![el("rect", &[("id", "a"), ("width", "1")])]);
    let to = with_children(el("g", &[]), vec![el("rect", &[("id", "a"), ("width", "2")])]);
    let merged = merge_trees(&from, &to, &TweenConfig::default()).unwrap();

    assert_eq!(merged.tag, "g");
    assert_eq!(merged.children.len(), 1);
    let rect = &merged.children[0];
    assert_eq!(rect.anims.len(), 1);
    assert_eq!(rect.anims[0].target, AnimTarget::Attribute("width".to_string()));
    assert_eq!(rect.anims[0].from, "1");
    assert_eq!(rect.anims[0].to, "2");
    assert_eq!(opacity_anims(rect), 0, "matched pairs must not fade");
}

#[test]
fn unmatched_from_child_fades_out() {
    let from = with_children(el("g", &[]), vec![el("rect", &[("id", "a")])]);
    let to = el("g", &[]);
    let merged = merge_trees(&from, &to, &TweenConfig::default()).unwrap();

    assert_eq!(merged.children.len(), 1);
    let rect = &merged.children[0];
    assert_eq!(rect.anims.len(), 1);
    assert_eq!(opacity_anims(rect), 1);
    assert_eq!(rect.anims[0].to, "0");
    assert_eq!(rect.anims[0].begin.as_deref(), Some("tween_fadeout.begin"));
    assert_eq!(rect.attrs.get("id"), Some("a"), "copy keeps its attributes");
}

#[test]
fn new_to_child_fades_in() {
    let from = el("g", &[]);
    let to = with_children(el("g", &[]), vec![el("rect", &[("id", "b")])]);
    let merged = merge_trees(&from, &to, &TweenConfig::default()).unwrap();

    assert_eq!(merged.children.len(), 1);
    let rect = &merged.children[0];
    assert_eq!(rect.anims.len(), 1);
    assert_eq!(rect.anims[0].from, "0");
    assert_eq!(rect.anims[0].begin.as_deref(), Some("tween_fadein.begin"));
    assert_eq!(rect.attrs.get("opacity"), Some("0"), "fade-in copies start hidden");
}

#[test]
fn id_less_children_cross_fade_without_group_matching() {
    let from = with_children(el("g", &[]), vec![el("rect", &[("width", "1")])]);
    let to = with_children(el("g", &[]), vec![el("rect", &[("width", "2")])]);
    let merged = merge_trees(&from, &to, &TweenConfig::default()).unwrap();

    // No correlation is attempted: the from copy fades out, the to copy
    // fades in.
    assert_eq!(merged.children.len(), 2);
    assert_eq!(merged.children[0].attrs.get("width"), Some("1"));
    assert_eq!(merged.children[1].attrs.get("width"), Some("2"));
    assert_eq!(opacity_anims(&merged.children[0]), 1);
    assert_eq!(opacity_anims(&merged.children[1]), 1);
}

#[test]
fn identity_matching_is_first_match_and_claims() {
    let from = with_children(
        el("g", &[]),
        vec![
            el("rect", &[("id", "a"), ("width", "1")]),
            el("rect", &[("id", "a"), ("width", "9")]),
        ],
    );
    let to = with_children(el("g", &[]), vec![el("rect", &[("id", "a"), ("width", "2")])]);
    let merged = merge_trees(&from, &to, &TweenConfig::default()).unwrap();

    assert_eq!(merged.children.len(), 2);
    // First from-child claims the only candidate; the second fades out.
    assert_eq!(merged.children[0].anims[0].target, AnimTarget::Attribute("width".to_string()));
    assert_eq!(opacity_anims(&merged.children[1]), 1);
}

#[test]
fn tag_must_match_for_identity_claims() {
    let from = with_children(el("g", &[]), vec![el("rect", &[("id", "a")])]);
    let to = with_children(el("g", &[]), vec![el("circle", &[("id", "a")])]);
    let merged = merge_trees(&from, &to, &TweenConfig::default()).unwrap();

    // Same id on a different tag is no match: fade out plus fade in.
    assert_eq!(merged.children.len(), 2);
    assert_eq!(opacity_anims(&merged.children[0]), 1);
    assert_eq!(opacity_anims(&merged.children[1]), 1);
}

#[test]
fn group_containers_merge_children_positionally() {
    let cfg = TweenConfig {
        group_matching: true,
        ..TweenConfig::default()
    };
    let from = with_children(
        el("svg", &[]),
        vec![with_children(
            el("g", &[("id", "layer")]),
            vec![el("rect", &[("width", "1")]), el("circle", &[("r", "3")])],
        )],
    );
    let to = with_children(
        el("svg", &[]),
        vec![with_children(
            el("g", &[("id", "layer")]),
            vec![el("rect", &[("width", "2")]), el("circle", &[("r", "4")])],
        )],
    );
    let merged = merge_trees(&from, &to, &cfg).unwrap();

    let layer = &merged.children[0];
    assert_eq!(layer.children.len(), 2);
    assert_eq!(layer.children[0].anims[0].from, "1");
    assert_eq!(layer.children[0].anims[0].to, "2");
    assert_eq!(layer.children[1].anims[0].from, "3");
    assert_eq!(layer.children[1].anims[0].to, "4");
}

#[test]
fn group_merge_pairs_id_bearing_children_without_id_deltas() {
    let cfg = TweenConfig {
        group_matching: true,
        ..TweenConfig::default()
    };
    let from = with_children(
        el("svg", &[]),
        vec![with_children(
            el("g", &[("id", "layer")]),
            vec![el("rect", &[("id", "x"), ("width", "1")])],
        )],
    );
    let to = with_children(
        el("svg", &[]),
        vec![with_children(
            el("g", &[("id", "layer")]),
            vec![el("rect", &[("id", "y"), ("width", "2")])],
        )],
    );
    let merged = merge_trees(&from, &to, &cfg).unwrap();

    let rect = &merged.children[0].children[0];
    assert_eq!(rect.anims.len(), 1);
    assert_eq!(rect.anims[0].target, AnimTarget::Attribute("width".to_string()));
}

#[test]
fn group_matching_off_leaves_group_children_identity_matched() {
    let from = with_children(
        el("svg", &[]),
        vec![with_children(
            el("g", &[("id", "layer")]),
            vec![el("rect", &[("width", "1")])],
        )],
    );
    let to = with_children(
        el("svg", &[]),
        vec![with_children(
            el("g", &[("id", "layer")]),
            vec![el("rect", &[("width", "2")])],
        )],
    );
    let merged = merge_trees(&from, &to, &TweenConfig::default()).unwrap();

    // Without group matching the id-less rects cannot correlate.
    assert_eq!(merged.children[0].children.len(), 2);
}

#[test]
fn differing_text_becomes_a_cross_fade_container() {
    let mut from_text = el("text", &[("id", "t"), ("x", "1")]);
    from_text.text = Some("Hello".to_string());
    let mut to_text = el("text", &[("id", "t"), ("x", "2")]);
    to_text.text = Some("World".to_string());
    let from = with_children(el("g", &[]), vec![from_text]);
    let to = with_children(el("g", &[]), vec![to_text]);
    let merged = merge_trees(&from, &to, &TweenConfig::default()).unwrap();

    assert_eq!(merged.children.len(), 1);
    let container = &merged.children[0];
    assert_eq!(container.tag, "g");
    assert!(container.attrs.is_empty());
    assert_eq!(container.children.len(), 2);

    let first = &container.children[0];
    assert_eq!(first.text.as_deref(), Some("Hello"));
    // The from copy keeps its attribute deltas and fades out at the
    // transition start.
    assert!(
        first
            .anims
            .iter()
            .any(|a| a.target == AnimTarget::Attribute("x".to_string()))
    );
    assert!(
        first
            .anims
            .iter()
            .any(|a| a.to == "0" && a.begin.as_deref() == Some("tween_transition.begin"))
    );

    let second = &container.children[1];
    assert_eq!(second.text.as_deref(), Some("World"));
    assert!(
        second
            .anims
            .iter()
            .any(|a| a.from == "0" && a.begin.as_deref() == Some("tween_transition.begin"))
    );
}

#[test]
fn matching_text_does_not_wrap() {
    let mut from_text = el("text", &[("id", "t")]);
    from_text.text = Some("Same".to_string());
    let to_text = from_text.clone();
    let from = with_children(el("g", &[]), vec![from_text]);
    let to = with_children(el("g", &[]), vec![to_text]);
    let merged = merge_trees(&from, &to, &TweenConfig::default()).unwrap();

    assert_eq!(merged.children.len(), 1);
    assert_eq!(merged.children[0].tag, "text");
}

#[test]
fn merged_trees_do_not_alias_inputs() {
    let from = with_children(el("g", &[]), vec![el("rect", &[("id", "a"), ("width", "1")])]);
    let to = with_children(el("g", &[]), vec![el("rect", &[("id", "a"), ("width", "2")])]);
    let merged = merge_trees(&from, &to, &TweenConfig::default()).unwrap();

    // The output carries the from side's attributes, freshly copied.
    assert_eq!(merged.children[0].attrs.get("width"), Some("1"));
    assert_eq!(from.children[0].attrs.get("width"), Some("1"));
    assert_eq!(to.children[0].attrs.get("width"), Some("2"));
}

#[test]
fn nested_matches_recurse() {
    let from = with_children(
        el("g", &[]),
        vec![with_children(
            el("g", &[("id", "outer")]),
            vec![el("rect", &[("id", "inner"), ("height", "1")])],
        )],
    );
    let to = with_children(
        el("g", &[]),
        vec![with_children(
            el("g", &[("id", "outer")]),
            vec![el("rect", &[("id", "inner"), ("height", "5")])],
        )],
    );
    let merged = merge_trees(&from, &to, &TweenConfig::default()).unwrap();

    let inner = &merged.children[0].children[0];
    assert_eq!(inner.anims.len(), 1);
    assert_eq!(inner.anims[0].target, AnimTarget::Attribute("height".to_string()));
}
