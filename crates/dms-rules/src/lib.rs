//! Rule table engine for Daitch-Mokotoff Soundex.
//!
//! This crate parses the line-oriented rule format and provides the
//! immutable lookup structures the encoder consults while walking a name.
//!
//! # Architecture
//!
//! - [`rule`] -- A single context-sensitive rule and its replacement selection
//! - [`parser`] -- Line parser (comments, folding statements, rule statements)
//! - [`table`] -- Rule table grouped by first character, longest pattern first,
//!   plus the folding table
//!
//! The rule table bundled with the crate is parsed once on first use and
//! shared by every caller through [`default_rules`].

use std::sync::{Arc, LazyLock};

pub mod parser;
pub mod rule;
pub mod table;

pub use rule::Rule;
pub use table::{FoldingTable, RuleSet, RuleTable};

/// Error type for rule source parsing and loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("line {line_number}: malformed rule statement split into {parts} parts: {line}")]
    InvalidRule {
        line_number: usize,
        line: String,
        parts: usize,
    },
    #[error("line {line_number}: malformed folding statement split into {parts} parts: {line}")]
    InvalidFolding {
        line_number: usize,
        line: String,
        parts: usize,
    },
    #[error("line {line_number}: folding statement sides are not single characters: {line}")]
    FoldingNotSingleChar { line_number: usize, line: String },
    #[error("line {line_number}: rule pattern is empty: {line}")]
    EmptyPattern { line_number: usize, line: String },
    #[error("failed to read rule source {path}: {message}")]
    Io { path: String, message: String },
}

/// The rule source compiled into the crate.
pub const BUNDLED_RULES: &str = include_str!("../data/dmrules.txt");

static DEFAULT_RULES: LazyLock<Arc<RuleSet>> = LazyLock::new(|| match RuleSet::parse(BUNDLED_RULES) {
    Ok(rules) => Arc::new(rules),
    Err(e) => panic!("bundled Daitch-Mokotoff rule table is malformed: {e}"),
});

/// Returns the process-wide rule set parsed from [`BUNDLED_RULES`].
///
/// Parsing happens once, on the first call; later calls hand out clones of
/// the same `Arc`.
pub fn default_rules() -> Arc<RuleSet> {
    Arc::clone(&DEFAULT_RULES)
}
