//! Levenshtein edit distance between query and title strings.

/// Computes the Levenshtein distance between `a` and `b`: the minimum
/// number of single-character insertions, deletions, or substitutions
/// transforming one into the other.
///
/// Operates on Unicode scalar values, not bytes. Callers lowercase both
/// sides beforehand; this function compares exactly what it is given.
/// Deterministic, no side effects, O(|a|·|b|) time.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Classic DP recurrence, keeping two rows instead of the full table.
    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0usize; b_len + 1];

    for (i, a_ch) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, b_ch) in b.chars().enumerate() {
            let cost = usize::from(a_ch != b_ch);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}
