//! Levenshtein edit distance and the length-tiered typo test.
//!
//! Answer tokens are short (rarely past twenty characters), so a two-row
//! table after trimming the shared prefix and suffix is plenty. Distances are
//! counted over Unicode scalar values, so `びょう` has length 3.

/// Calculate Levenshtein distance between two strings.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (a_core, b_core) = trim_common(&a_chars, &b_chars);
    table_distance(a_core, b_core, None).unwrap_or(usize::MAX)
}

/// Are these strings within `max` edits of each other?
///
/// Bails out before building the table when the length difference alone
/// exceeds `max`, and abandons the table once a whole row exceeds it.
pub fn within(a: &str, b: &str, max: usize) -> bool {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.len().abs_diff(b_chars.len()) > max {
        return false;
    }

    let (a_core, b_core) = trim_common(&a_chars, &b_chars);
    table_distance(a_core, b_core, Some(max)).is_some_and(|d| d <= max)
}

/// Number of edits tolerated for an expected answer of this text.
///
/// `None` means only an exact match counts: at one character or fewer any
/// edit makes a different word.
pub fn typo_tolerance(expected: &str) -> Option<usize> {
    match expected.chars().count() {
        0 | 1 => None,
        2 | 3 => Some(1),
        _ => Some(2),
    }
}

/// Whether `typed` reads as a slip of the keyboard on the way to `expected`.
pub fn is_likely_typo(expected: &str, typed: &str) -> bool {
    match typo_tolerance(expected) {
        None => expected == typed,
        Some(max) => within(expected, typed, max),
    }
}

/// Strip the shared prefix and suffix; they never contribute edits.
fn trim_common<'a>(a: &'a [char], b: &'a [char]) -> (&'a [char], &'a [char]) {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);

    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    (&a[..a.len() - suffix], &b[..b.len() - suffix])
}

/// Two-row Wagner-Fischer table. With a bound, returns `None` as soon as
/// every cell of a row is past it.
fn table_distance(a: &[char], b: &[char], bound: Option<usize>) -> Option<usize> {
    // Keep the shorter string along the row
    let (a, b) = if a.len() < b.len() { (b, a) } else { (a, b) };

    let m = a.len();
    let n = b.len();

    if n == 0 {
        return Some(m);
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        let mut row_min = curr[0];

        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
            row_min = row_min.min(curr[j]);
        }

        if bound.is_some_and(|max| row_min > max) {
            return None;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    Some(prev[n])
}
