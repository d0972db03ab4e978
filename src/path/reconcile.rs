use kurbo::Point;

use crate::align::aligner::align;
use crate::foundation::error::{TweenError, TweenResult};
use crate::path::model::{Path, PathCmd};
use crate::path::points::{collapse_to_point, end_point};

fn letters(path: &[PathCmd]) -> Vec<char> {
    path.iter().map(|cmd| cmd.op).collect()
}

/// Split two paths into subpath lists whose anchor entries are
/// shape-compatible.
///
/// Returns `(subpaths1, subpaths2, anchor1, anchor2)`. Matching command
/// sequences come back as single-entry lists. When the shorter sequence is a
/// literal prefix of the longer, the longer path splits at the boundary and
/// the remainder opens with a synthesized absolute moveto at the prefix's end
/// point. Anything else is an unsupported shape.
pub fn split_for_tweening(
    path1: &[PathCmd],
    path2: &[PathCmd],
) -> TweenResult<(Vec<Path>, Vec<Path>, usize, usize)> {
    let l1 = letters(path1);
    let l2 = letters(path2);
    if l1 == l2 {
        return Ok((vec![path1.to_vec()], vec![path2.to_vec()], 0, 0));
    }
    if l2.len() < l1.len() && l1.starts_with(&l2) {
        let (first, second) = split_at_prefix(path1, path2.len());
        return Ok((vec![first, second], vec![path2.to_vec()], 0, 0));
    }
    if l1.len() < l2.len() && l2.starts_with(&l1) {
        let (first, second) = split_at_prefix(path2, path1.len());
        return Ok((vec![path1.to_vec()], vec![first, second], 0, 0));
    }
    Err(TweenError::shape(
        "path command sequences diverge beyond a shared prefix",
    ))
}

fn split_at_prefix(longer: &[PathCmd], at: usize) -> (Path, Path) {
    let first: Path = longer[..at].to_vec();
    let endpos = end_point(&first);
    let mut second: Path = vec![PathCmd::new('M', vec![endpos.x, endpos.y])];
    second.extend_from_slice(&longer[at..]);
    (first, second)
}

/// Pad split lists with placeholder slots until the anchors line up and both
/// lists are the same length.
///
/// The shorter-anchored list pads at the front, then whichever list is still
/// shorter pads at the back. Placeholders are explicit `None` slots, filled
/// later by [`fill_placeholders`].
pub fn normalize_split_lists(
    paths1: Vec<Path>,
    paths2: Vec<Path>,
    anchor1: usize,
    anchor2: usize,
) -> (Vec<Option<Path>>, Vec<Option<Path>>) {
    let mut padded1: Vec<Option<Path>> = paths1.into_iter().map(Some).collect();
    let mut padded2: Vec<Option<Path>> = paths2.into_iter().map(Some).collect();
    if anchor1 < anchor2 {
        padded1.splice(0..0, std::iter::repeat_with(|| None).take(anchor2 - anchor1));
    } else {
        padded2.splice(0..0, std::iter::repeat_with(|| None).take(anchor1 - anchor2));
    }
    while padded1.len() < padded2.len() {
        padded1.push(None);
    }
    while padded2.len() < padded1.len() {
        padded2.push(None);
    }
    (padded1, padded2)
}

fn previous_end_point(list: &[Option<Path>], index: usize) -> Point {
    list[..index]
        .iter()
        .rev()
        .flatten()
        .next()
        .map(|path| end_point(path))
        .unwrap_or(Point::ZERO)
}

fn fill_side(
    list: &mut [Option<Path>],
    other: &[Option<Path>],
) -> TweenResult<()> {
    for i in 0..list.len() {
        if list[i].is_some() {
            continue;
        }
        let Some(counterpart) = other[i].as_ref() else {
            return Err(TweenError::integrity(
                "both split lists hold a placeholder at the same slot",
            ));
        };
        let target = previous_end_point(list, i);
        list[i] = Some(collapse_to_point(counterpart, target));
    }
    Ok(())
}

/// Replace every placeholder slot with the counterpart subpath collapsed to a
/// point.
///
/// The collapse target is the end point of the nearest preceding subpath in
/// the same list (placeholders fill front to back, so earlier fills count),
/// or the origin when nothing precedes. This realizes grow-from / shrink-to
/// a point for subpaths that exist during only part of the transition.
pub fn fill_placeholders(
    padded1: Vec<Option<Path>>,
    padded2: Vec<Option<Path>>,
) -> TweenResult<(Vec<Path>, Vec<Path>)> {
    if padded1.len() != padded2.len() {
        return Err(TweenError::integrity(
            "split lists must be equal length after normalization",
        ));
    }
    let mut list1 = padded1;
    let mut list2 = padded2;
    fill_side(&mut list1, &list2)?;
    fill_side(&mut list2, &list1)?;
    Ok((
        list1.into_iter().flatten().collect(),
        list2.into_iter().flatten().collect(),
    ))
}

/// Reconcile two paths into equal-length, command-for-command aligned pairs.
///
/// Command letters align via [`align`]; a real command copies through, and a
/// gap synthesizes the counterpart command collapsed to the running end point
/// of the output built so far. Both results are independently valid paths of
/// identical shape, ready for per-command attribute animation.
pub fn tweenable_paths(path1: &[PathCmd], path2: &[PathCmd]) -> TweenResult<(Path, Path)> {
    let l1 = letters(path1);
    let l2 = letters(path2);
    let (align1, align2) = align(&l1, &l2);

    let mut out1 = Path::with_capacity(align1.len());
    let mut out2 = Path::with_capacity(align2.len());
    for (&slot1, &slot2) in align1.iter().zip(&align2) {
        match slot1 {
            Some(i) => out1.push(path1[i].clone()),
            None => {
                let j = slot2.ok_or_else(|| {
                    TweenError::integrity("alignment produced a gap on both sides")
                })?;
                let target = end_point(&out1);
                out1.extend(collapse_to_point(std::slice::from_ref(&path2[j]), target));
            }
        }
        match slot2 {
            Some(j) => out2.push(path2[j].clone()),
            None => {
                let i = slot1.ok_or_else(|| {
                    TweenError::integrity("alignment produced a gap on both sides")
                })?;
                let target = end_point(&out2);
                out2.extend(collapse_to_point(std::slice::from_ref(&path1[i]), target));
            }
        }
    }
    Ok((out1, out2))
}

#[cfg(test)]
#[path = "../../tests/unit/path/reconcile.rs"]
mod tests;
