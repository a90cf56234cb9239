// Character classification for name cleanup and rule matching

/// Vowels that select the "before vowel" replacement of a rule.
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Check whether a character selects the "before vowel" replacement.
///
/// Only the five lowercase Latin vowels count; `y` and accented vowels do
/// not. Input reaching the rule matcher is already lower-cased and folded.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Check whether a character is a letter that survives cleanup.
///
/// Any Unicode alphabetic character is kept; digits, punctuation, symbols
/// and whitespace are dropped.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions only the first
/// character is returned, keeping the mapping one-to-one.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is whitespace.
///
/// Covers ASCII control whitespace, NEL, NO-BREAK SPACE and the Unicode
/// space separators.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || cp == 0x180E
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}
