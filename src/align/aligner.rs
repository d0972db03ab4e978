/// A gap-padded index correspondence for one side of an alignment.
///
/// `Some(i)` points at element `i` of the source sequence; `None` is a gap.
/// Filtering the gaps out reproduces `0..len` in order.
pub type Alignment = Vec<Option<usize>>;

/// Align two ordered symbol sequences into equal-length correspondences.
///
/// A greedy two-pointer scan: equal symbols pair up; a symbol that never
/// recurs in the other sequence's tail is consumed against a gap; when both
/// symbols recur later, whichever is closer to its next occurrence wins and
/// the other side takes the gap. Once one sequence is exhausted the other's
/// remainder flushes against gaps.
///
/// Postconditions: both outputs have the same length, and the non-gap entries
/// of each output enumerate that side's indexes in order.
pub fn align<T: PartialEq>(a: &[T], b: &[T]) -> (Alignment, Alignment) {
    let mut out_a = Alignment::new();
    let mut out_b = Alignment::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let before = (i, j);
        if a[i] == b[j] {
            out_a.push(Some(i));
            out_b.push(Some(j));
            i += 1;
            j += 1;
        } else {
            // d1: how far ahead a[i] next occurs in b; d2: the symmetric case.
            let d1 = b[j..].iter().position(|s| *s == a[i]);
            let d2 = a[i..].iter().position(|s| *s == b[j]);
            match (d1, d2) {
                (None, _) => {
                    out_a.push(Some(i));
                    out_b.push(None);
                    i += 1;
                }
                (Some(_), None) => {
                    out_a.push(None);
                    out_b.push(Some(j));
                    j += 1;
                }
                (Some(d1), Some(d2)) => {
                    if d1 < d2 {
                        // b is behind; let it catch up to a's element.
                        out_a.push(None);
                        out_b.push(Some(j));
                        j += 1;
                    } else {
                        out_a.push(Some(i));
                        out_b.push(None);
                        i += 1;
                    }
                }
            }
        }
        debug_assert_ne!(before, (i, j), "alignment must advance every iteration");
    }

    for rest in i..a.len() {
        out_a.push(Some(rest));
        out_b.push(None);
    }
    for rest in j..b.len() {
        out_a.push(None);
        out_b.push(Some(rest));
    }
    (out_a, out_b)
}

#[cfg(test)]
#[path = "../../tests/unit/align/aligner.rs"]
mod tests;
