// A single Daitch-Mokotoff rule: literal pattern plus three replacement lists

use std::fmt;

use dms_core::character::{is_vowel, simple_lower};

/// Separator between alternatives inside one replacement field.
pub const ALTERNATIVE_SEPARATOR: char = '|';

/// One context-sensitive transformation.
///
/// The pattern is matched literally at the cursor. Which replacement list
/// applies depends on whether the cursor is at the start of the word and,
/// otherwise, whether the character right after the pattern is a vowel.
///
/// Every replacement list holds at least one entry. Entries may be empty,
/// in which case the rule consumes its pattern without emitting anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pattern: Vec<char>,
    at_start: Vec<String>,
    before_vowel: Vec<String>,
    default: Vec<String>,
}

impl Rule {
    /// Build a rule from its four raw fields.
    ///
    /// The pattern is lower-cased. Each replacement field is split on `|`
    /// into its alternatives. Returns `None` if the pattern is empty.
    pub fn new(pattern: &str, at_start: &str, before_vowel: &str, default: &str) -> Option<Self> {
        if pattern.is_empty() {
            return None;
        }
        Some(Self {
            pattern: pattern.chars().map(simple_lower).collect(),
            at_start: split_alternatives(at_start),
            before_vowel: split_alternatives(before_vowel),
            default: split_alternatives(default),
        })
    }

    /// The pattern as a string.
    pub fn pattern(&self) -> String {
        self.pattern.iter().collect()
    }

    /// Number of characters the pattern consumes.
    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// The character this rule is indexed by in the rule table.
    #[inline]
    pub fn first_char(&self) -> char {
        self.pattern[0]
    }

    /// Returns `true` if the pattern is a literal prefix of `context`.
    #[inline]
    pub fn matches(&self, context: &[char]) -> bool {
        context.starts_with(&self.pattern)
    }

    /// Pick the replacement list for a match at the start of `context`.
    ///
    /// `at_word_start` takes precedence. Otherwise the character following
    /// the pattern decides: a vowel selects the "before vowel" list, anything
    /// else (including the end of input) selects the default list.
    pub fn replacements(&self, context: &[char], at_word_start: bool) -> &[String] {
        if at_word_start {
            return &self.at_start;
        }
        match context.get(self.pattern.len()) {
            Some(&next) if is_vowel(next) => &self.before_vowel,
            _ => &self.default,
        }
    }

    pub fn at_start(&self) -> &[String] {
        &self.at_start
    }

    pub fn before_vowel(&self) -> &[String] {
        &self.before_vowel
    }

    pub fn default_replacements(&self) -> &[String] {
        &self.default
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}=({}, {}, {})",
            self.pattern(),
            self.at_start.join("|"),
            self.before_vowel.join("|"),
            self.default.join("|")
        )
    }
}

/// Split a replacement field into alternatives. Never returns an empty list.
fn split_alternatives(field: &str) -> Vec<String> {
    field
        .split(ALTERNATIVE_SEPARATOR)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert!(Rule::new("", "0", "", "").is_none());
    }

    #[test]
    fn pattern_is_lowercased() {
        let rule = Rule::new("SCH", "4", "4", "4").unwrap();
        assert_eq!(rule.pattern(), "sch");
        assert_eq!(rule.pattern_len(), 3);
        assert_eq!(rule.first_char(), 's');
    }

    #[test]
    fn alternatives_are_split() {
        let rule = Rule::new("ck", "5|45", "5|45", "5|45").unwrap();
        assert_eq!(rule.at_start(), ["5", "45"]);
    }

    #[test]
    fn empty_alternatives_are_kept() {
        let rule = Rule::new("j", "1|4", "|4", "|4").unwrap();
        assert_eq!(rule.before_vowel(), ["", "4"]);
        let rule = Rule::new("e", "0", "", "").unwrap();
        assert_eq!(rule.default_replacements(), [""]);
    }

    #[test]
    fn matches_literal_prefix() {
        let rule = Rule::new("sch", "4", "4", "4").unwrap();
        assert!(rule.matches(&chars("schmidt")));
        assert!(rule.matches(&chars("sch")));
        assert!(!rule.matches(&chars("sc")));
        assert!(!rule.matches(&chars("shc")));
    }

    #[test]
    fn replacement_selection() {
        let rule = Rule::new("au", "0", "7", "").unwrap();
        // start of word wins over the following vowel
        assert_eq!(rule.replacements(&chars("aue"), true), ["0"]);
        assert_eq!(rule.replacements(&chars("aue"), false), ["7"]);
        assert_eq!(rule.replacements(&chars("aub"), false), [""]);
        // end of input is not a vowel
        assert_eq!(rule.replacements(&chars("au"), false), [""]);
    }

    #[test]
    fn y_is_not_a_vowel_for_selection() {
        let rule = Rule::new("x", "5", "54", "54").unwrap();
        assert_eq!(rule.replacements(&chars("xy"), false), ["54"]);
    }

    #[test]
    fn display_shows_all_fields() {
        let rule = Rule::new("rz", "4|94", "4|94", "4|94").unwrap();
        assert_eq!(rule.to_string(), "rz=(4|94, 4|94, 4|94)");
    }
}
