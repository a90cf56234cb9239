// Input normalization: letters only, lower-cased, optionally folded

use dms_core::character::{is_letter, is_whitespace, simple_lower};
use dms_rules::FoldingTable;

/// Normalize a name for rule matching.
///
/// Whitespace and every non-letter character are dropped, the remaining
/// letters are lower-cased and, when a folding table is given, mapped to
/// their folded form. Never fails; empty input gives empty output.
pub fn cleanup_chars(input: &str, folding: Option<&FoldingTable>) -> Vec<char> {
    let mut out = Vec::with_capacity(input.len());
    for c in input.chars() {
        if is_whitespace(c) || !is_letter(c) {
            continue;
        }
        let lower = simple_lower(c);
        let folded = folding.and_then(|table| table.fold(lower)).unwrap_or(lower);
        out.push(folded);
    }
    out
}

/// [`cleanup_chars`] collected into a `String`.
pub fn cleanup(input: &str, folding: Option<&FoldingTable>) -> String {
    cleanup_chars(input, folding).into_iter().collect()
}
