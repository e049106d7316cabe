//! Selector normalization and matching.
//!
//! Pure string logic, kept apart from the filesystem so it can be tested
//! without a snapshot directory.

use crate::catalog::GraphEntry;

/// Outcome of matching a normalized selector against catalog stems.
#[derive(Debug, PartialEq, Eq)]
pub enum StemMatch<'a> {
    /// Normalized stem equals the selector.
    Exact(&'a GraphEntry),
    /// No exact hit, but exactly one stem contains the selector.
    Unique(&'a GraphEntry),
    /// Several stems contain the selector.
    Ambiguous(Vec<&'a GraphEntry>),
    None,
}

/// Normalize a selector or file stem for comparison: trim, lowercase, and
/// collapse runs of whitespace and `-` into a single `_`.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_separator = false;

    for ch in raw.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            if !in_separator {
                out.push('_');
                in_separator = true;
            }
            continue;
        }
        in_separator = false;
        out.extend(ch.to_lowercase());
    }

    out
}

/// Normalize a selector and drop a trailing `.<extension>`.
pub fn normalize_selector(raw: &str, extension: &str) -> String {
    let normalized = normalize(raw);
    let suffix = format!(".{}", extension.to_lowercase());
    match normalized.strip_suffix(&suffix) {
        Some(stem) => stem.trim_end_matches('_').to_string(),
        None => normalized,
    }
}

/// First run of ASCII digits in the selector, e.g. `"graph 12b"` → 12.
pub fn first_number(raw: &str) -> Option<u64> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Match a normalized selector against catalog entries by file stem.
pub fn match_stem<'a>(needle: &str, entries: &'a [GraphEntry]) -> StemMatch<'a> {
    if let Some(exact) = entries.iter().find(|e| normalize(&e.name) == needle) {
        return StemMatch::Exact(exact);
    }

    let mut partial: Vec<&GraphEntry> = entries
        .iter()
        .filter(|e| normalize(&e.name).contains(needle))
        .collect();

    match partial.len() {
        0 => StemMatch::None,
        1 => StemMatch::Unique(partial.remove(0)),
        _ => StemMatch::Ambiguous(partial),
    }
}
