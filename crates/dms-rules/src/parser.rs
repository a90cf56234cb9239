// Line-oriented rule source parser
//
// Grammar, one statement per line:
//   // comment            -- rest of the line is ignored
//   /* ... */             -- block comment, spans whole lines
//   x=y                   -- folding statement, one character each side
//   "pat" "s" "v" "d"     -- rule statement, four whitespace-separated fields

use crate::RulesError;
use crate::rule::Rule;

const COMMENT: &str = "//";
const BLOCK_COMMENT_START: &str = "/*";
const BLOCK_COMMENT_END: &str = "*/";
const FOLDING_SEPARATOR: char = '=';
const RULE_FIELD_COUNT: usize = 4;

/// Statements collected from a rule source, in source order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedRules {
    pub rules: Vec<Rule>,
    pub foldings: Vec<(char, char)>,
}

/// Parse a complete rule source.
///
/// Fails on the first malformed line. Line numbers in errors are 1-based.
pub fn parse_rules(source: &str) -> Result<ParsedRules, RulesError> {
    let mut parsed = ParsedRules::default();
    let mut in_block_comment = false;

    for (index, raw_line) in source.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = raw_line.trim();

        if in_block_comment {
            if trimmed.ends_with(BLOCK_COMMENT_END) {
                in_block_comment = false;
            }
            continue;
        }

        if trimmed.starts_with(BLOCK_COMMENT_START) {
            // A block comment closed on its opening line does not carry over.
            let rest = &trimmed[BLOCK_COMMENT_START.len()..];
            in_block_comment = !rest.ends_with(BLOCK_COMMENT_END);
            continue;
        }

        let line = strip_line_comment(trimmed).trim();
        if line.is_empty() {
            continue;
        }

        if line.contains(FOLDING_SEPARATOR) {
            parsed
                .foldings
                .push(parse_folding(line, raw_line, line_number)?);
        } else {
            parsed.rules.push(parse_rule(line, raw_line, line_number)?);
        }
    }

    Ok(parsed)
}

fn strip_line_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse `x=y` into a `(from, to)` pair.
fn parse_folding(line: &str, raw_line: &str, line_number: usize) -> Result<(char, char), RulesError> {
    let parts: Vec<&str> = line.split(FOLDING_SEPARATOR).collect();
    if parts.len() != 2 {
        return Err(RulesError::InvalidFolding {
            line_number,
            line: raw_line.to_string(),
            parts: parts.len(),
        });
    }

    match (single_char(parts[0].trim()), single_char(parts[1].trim())) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(RulesError::FoldingNotSingleChar {
            line_number,
            line: raw_line.to_string(),
        }),
    }
}

/// Parse a four-field rule statement.
fn parse_rule(line: &str, raw_line: &str, line_number: usize) -> Result<Rule, RulesError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != RULE_FIELD_COUNT {
        return Err(RulesError::InvalidRule {
            line_number,
            line: raw_line.to_string(),
            parts: fields.len(),
        });
    }

    Rule::new(
        strip_quotes(fields[0]),
        strip_quotes(fields[1]),
        strip_quotes(fields[2]),
        strip_quotes(fields[3]),
    )
    .ok_or_else(|| RulesError::EmptyPattern {
        line_number,
        line: raw_line.to_string(),
    })
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Remove one leading and one trailing double quote, if present.
fn strip_quotes(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rule_and_folding() {
        let parsed = parse_rules("\"sch\" \"4\" \"4\" \"4\"\n\u{00DF}=s\n").unwrap();
        assert_eq!(parsed.rules.len(), 1);
        assert_eq!(parsed.rules[0].pattern(), "sch");
        assert_eq!(parsed.foldings, vec![('\u{00DF}', 's')]);
    }

    #[test]
    fn quotes_are_optional() {
        let parsed = parse_rules("ch 4|5 4|5 4|5").unwrap();
        assert_eq!(parsed.rules[0].at_start(), ["4", "5"]);
    }

    #[test]
    fn empty_quoted_replacement() {
        let parsed = parse_rules("\"e\" \"0\" \"\" \"\"").unwrap();
        assert_eq!(parsed.rules[0].before_vowel(), [""]);
        assert_eq!(parsed.rules[0].default_replacements(), [""]);
    }

    #[test]
    fn tabs_and_repeated_spaces_separate_fields() {
        let parsed = parse_rules("\"x\"\t\"5\"   \"54\"  \t \"54\"").unwrap();
        assert_eq!(parsed.rules[0].default_replacements(), ["54"]);
    }

    #[test]
    fn line_comments_are_ignored() {
        let src = "// header\n\"a\" \"0\" \"\" \"\" // vowel\n   // indented\n";
        let parsed = parse_rules(src).unwrap();
        assert_eq!(parsed.rules.len(), 1);
    }

    #[test]
    fn block_comment_spans_lines() {
        let src = "/*\n\"a\" broken\nstill comment\n*/\n\"b\" \"7\" \"7\" \"7\"\n";
        let parsed = parse_rules(src).unwrap();
        assert_eq!(parsed.rules.len(), 1);
        assert_eq!(parsed.rules[0].pattern(), "b");
    }

    #[test]
    fn block_comment_on_one_line() {
        let src = "/* one line */\n\"b\" \"7\" \"7\" \"7\"\n";
        let parsed = parse_rules(src).unwrap();
        assert_eq!(parsed.rules.len(), 1);
    }

    #[test]
    fn crlf_line_endings() {
        let src = "\"a\" \"0\" \"\" \"\"\r\n\u{00E4}=a\r\n";
        let parsed = parse_rules(src).unwrap();
        assert_eq!(parsed.rules.len(), 1);
        assert_eq!(parsed.foldings, vec![('\u{00E4}', 'a')]);
    }

    #[test]
    fn wrong_field_count() {
        let err = parse_rules("\n\"a\" \"0\" \"\"\n").unwrap_err();
        assert_eq!(
            err,
            RulesError::InvalidRule {
                line_number: 2,
                line: "\"a\" \"0\" \"\"".to_string(),
                parts: 3,
            }
        );
    }

    #[test]
    fn too_many_fields() {
        let err = parse_rules("a 0 1 2 3").unwrap_err();
        assert!(matches!(err, RulesError::InvalidRule { parts: 5, .. }));
    }

    #[test]
    fn folding_with_two_separators() {
        let err = parse_rules("a=b=c").unwrap_err();
        assert!(matches!(
            err,
            RulesError::InvalidFolding {
                line_number: 1,
                parts: 3,
                ..
            }
        ));
    }

    #[test]
    fn folding_sides_must_be_single_chars() {
        let err = parse_rules("ae=a").unwrap_err();
        assert!(matches!(err, RulesError::FoldingNotSingleChar { line_number: 1, .. }));
        let err = parse_rules("=a").unwrap_err();
        assert!(matches!(err, RulesError::FoldingNotSingleChar { .. }));
    }

    #[test]
    fn empty_pattern() {
        let err = parse_rules("\"\" \"0\" \"0\" \"0\"").unwrap_err();
        assert!(matches!(err, RulesError::EmptyPattern { line_number: 1, .. }));
    }

    #[test]
    fn empty_source() {
        let parsed = parse_rules("").unwrap();
        assert!(parsed.rules.is_empty());
        assert!(parsed.foldings.is_empty());
    }
}
