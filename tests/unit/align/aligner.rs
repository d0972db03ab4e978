use super::*;

fn check_totality(a: &str, b: &str) {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (out_a, out_b) = align(&a, &b);
    assert_eq!(out_a.len(), out_b.len(), "outputs must be equal length");
    let kept_a: Vec<usize> = out_a.iter().copied().flatten().collect();
    let kept_b: Vec<usize> = out_b.iter().copied().flatten().collect();
    assert_eq!(kept_a, (0..a.len()).collect::<Vec<_>>(), "side A indexes");
    assert_eq!(kept_b, (0..b.len()).collect::<Vec<_>>(), "side B indexes");
}

#[test]
fn alignment_is_total() {
    for (a, b) in [
        ("Hello", "Hello"),
        ("abcdef", "abcdefghij"),
        ("abcdef", "defghij"),
        ("abcdef", "ghij"),
        ("ababab", "abcabab"),
        ("abca", "acba"),
        ("abaca", "acba"),
        ("acba", "abaca"),
        ("", ""),
        ("abc", ""),
        ("", "abc"),
        ("ace", "abcde"),
    ] {
        check_totality(a, b);
    }
}

#[test]
fn identical_sequences_align_without_gaps() {
    let a: Vec<char> = "MLLZ".chars().collect();
    let (out_a, out_b) = align(&a, &a);
    assert_eq!(out_a, vec![Some(0), Some(1), Some(2), Some(3)]);
    assert_eq!(out_b, out_a);
}

#[test]
fn missing_symbol_pads_the_other_side() {
    let a: Vec<char> = "ML".chars().collect();
    let b: Vec<char> = "MML".chars().collect();
    let (out_a, out_b) = align(&a, &b);
    assert_eq!(out_a, vec![Some(0), None, Some(1)]);
    assert_eq!(out_b, vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn disjoint_sequences_interleave_gaps() {
    let a: Vec<char> = "ab".chars().collect();
    let b: Vec<char> = "cd".chars().collect();
    let (out_a, out_b) = align(&a, &b);
    assert_eq!(out_a.len(), 4);
    // Every slot pairs a real element with a gap.
    for (sa, sb) in out_a.iter().zip(&out_b) {
        assert!(sa.is_some() ^ sb.is_some());
    }
}

#[test]
fn exhausted_side_flushes_remainder() {
    let a: Vec<char> = "M".chars().collect();
    let b: Vec<char> = "ML".chars().collect();
    let (out_a, out_b) = align(&a, &b);
    assert_eq!(out_a, vec![Some(0), None]);
    assert_eq!(out_b, vec![Some(0), Some(1)]);
}

#[test]
fn works_on_non_char_symbols() {
    let a = [1, 2, 3];
    let b = [2, 3, 4];
    let (out_a, out_b) = align(&a, &b);
    assert_eq!(out_a, vec![Some(0), Some(1), Some(2), None]);
    assert_eq!(out_b, vec![None, Some(0), Some(1), Some(2)]);
}
