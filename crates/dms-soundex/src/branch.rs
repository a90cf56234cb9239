// One candidate code under construction

use std::fmt;
use std::hash::{Hash, Hasher};

use dms_core::code::{MAX_LENGTH, PAD_CHAR};

/// A bounded accumulator for one candidate code.
///
/// The code never grows past [`MAX_LENGTH`] characters. Branches compare and
/// hash by their code alone, so two branches that reached the same code
/// through different replacements are considered the same candidate.
#[derive(Debug, Clone, Default)]
pub struct Branch {
    code: String,
    last_replacement: Option<String>,
}

impl Branch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy this branch so the copy can evolve independently.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Append a replacement to the code.
    ///
    /// The append is skipped when the previous replacement ends with
    /// `replacement`, unless `force_append` is set. The code is cut back to
    /// [`MAX_LENGTH`] characters after appending. The previous replacement is
    /// updated whether or not anything was appended.
    pub fn apply_replacement(&mut self, replacement: &str, force_append: bool) {
        let append = force_append
            || self
                .last_replacement
                .as_deref()
                .is_none_or(|last| !last.ends_with(replacement));

        if append && self.len() < MAX_LENGTH {
            self.code.push_str(replacement);
            self.truncate_to_max();
        }

        match &mut self.last_replacement {
            Some(last) => {
                last.clear();
                last.push_str(replacement);
            }
            None => self.last_replacement = Some(replacement.to_string()),
        }
    }

    /// Pad the code with `'0'` up to exactly [`MAX_LENGTH`] characters.
    pub fn finish(&mut self) {
        let missing = MAX_LENGTH.saturating_sub(self.len());
        self.code.extend(std::iter::repeat_n(PAD_CHAR, missing));
    }

    /// The code accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Code length in characters.
    pub fn len(&self) -> usize {
        self.code.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn last_replacement(&self) -> Option<&str> {
        self.last_replacement.as_deref()
    }

    pub fn into_code(self) -> String {
        self.code
    }

    fn truncate_to_max(&mut self) {
        if let Some((byte_index, _)) = self.code.char_indices().nth(MAX_LENGTH) {
            self.code.truncate(byte_index);
        }
    }
}

impl PartialEq for Branch {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Branch {}

impl Hash for Branch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch_with(replacements: &[&str]) -> Branch {
        let mut branch = Branch::new();
        for r in replacements {
            branch.apply_replacement(r, false);
        }
        branch
    }

    #[test]
    fn new_branch_is_empty() {
        let branch = Branch::new();
        assert!(branch.is_empty());
        assert_eq!(branch.as_str(), "");
        assert_eq!(branch.last_replacement(), None);
    }

    #[test]
    fn first_replacement_always_appends() {
        assert_eq!(branch_with(&["0"]).as_str(), "0");
    }

    #[test]
    fn repeated_replacement_collapses() {
        assert_eq!(branch_with(&["4", "4"]).as_str(), "4");
    }

    #[test]
    fn suffix_of_previous_replacement_collapses() {
        // "54" then "4": the 4 is already the tail of the previous replacement
        let branch = branch_with(&["0", "54", "4"]);
        assert_eq!(branch.as_str(), "054");
        assert_eq!(branch.last_replacement(), Some("4"));
    }

    #[test]
    fn different_replacement_appends() {
        assert_eq!(branch_with(&["4", "94"]).as_str(), "494");
        assert_eq!(branch_with(&["94", "9"]).as_str(), "949");
    }

    #[test]
    fn empty_replacement_resets_repeat_tracking() {
        assert_eq!(branch_with(&["6", "", "6"]).as_str(), "66");
    }

    #[test]
    fn force_append_overrides_suppression() {
        let mut branch = branch_with(&["6"]);
        branch.apply_replacement("6", true);
        assert_eq!(branch.as_str(), "66");
    }

    #[test]
    fn code_is_truncated_at_max_length() {
        let branch = branch_with(&["1", "2", "3", "4", "5", "67", "8"]);
        assert_eq!(branch.as_str(), "123456");
        assert_eq!(branch.last_replacement(), Some("8"));
    }

    #[test]
    fn finish_pads_with_zeros() {
        let mut branch = branch_with(&["7", "9"]);
        branch.finish();
        assert_eq!(branch.as_str(), "790000");
        branch.finish();
        assert_eq!(branch.as_str(), "790000");
    }

    #[test]
    fn finish_empty_branch() {
        let mut branch = Branch::new();
        branch.finish();
        assert_eq!(branch.as_str(), "000000");
    }

    #[test]
    fn fork_is_independent() {
        let original = branch_with(&["0", "9"]);
        let mut forked = original.fork();
        assert_eq!(forked.last_replacement(), Some("9"));
        forked.apply_replacement("7", false);
        assert_eq!(original.as_str(), "09");
        assert_eq!(forked.as_str(), "097");
    }

    #[test]
    fn equality_ignores_last_replacement() {
        let a = branch_with(&["5", "4"]);
        let b = branch_with(&["54"]);
        assert_ne!(a.last_replacement(), b.last_replacement());
        assert_eq!(a, b);
    }
}
