// Rule table (first character -> rules, longest pattern first) and folding table

use std::path::Path;

use hashbrown::HashMap;

use crate::RulesError;
use crate::parser::parse_rules;
use crate::rule::Rule;

/// Rules grouped by the first character of their pattern.
///
/// Each group is sorted by descending pattern length, so the first rule in a
/// group that matches at the cursor is the longest match. The sort is stable:
/// rules of equal length keep their source order.
#[derive(Debug, Default, Clone)]
pub struct RuleTable {
    groups: HashMap<char, Vec<Rule>>,
    rule_count: usize,
}

impl RuleTable {
    /// Group and order a flat list of rules.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        let rule_count = rules.len();
        let mut groups: HashMap<char, Vec<Rule>> = HashMap::new();
        for rule in rules {
            groups.entry(rule.first_char()).or_default().push(rule);
        }
        for group in groups.values_mut() {
            group.sort_by(|a, b| b.pattern_len().cmp(&a.pattern_len()));
        }
        Self { groups, rule_count }
    }

    /// All rules whose pattern starts with `ch`, longest first.
    /// Empty if no rule starts with `ch`.
    pub fn candidates(&self, ch: char) -> &[Rule] {
        self.groups.get(&ch).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Find the longest rule matching at the start of `context`.
    pub fn find_match(&self, context: &[char]) -> Option<&Rule> {
        let &first = context.first()?;
        self.candidates(first)
            .iter()
            .find(|rule| rule.matches(context))
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.rule_count
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }

    /// Number of distinct first characters.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

/// Maps accented or variant characters to their canonical equivalent.
#[derive(Debug, Default, Clone)]
pub struct FoldingTable {
    map: HashMap<char, char>,
}

impl FoldingTable {
    /// Build from `(from, to)` pairs. A later pair for the same character wins.
    pub fn from_pairs<I: IntoIterator<Item = (char, char)>>(pairs: I) -> Self {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    /// The folded form of `ch`, if the table has one.
    #[inline]
    pub fn fold(&self, ch: char) -> Option<char> {
        self.map.get(&ch).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// A fully loaded rule source: the rule table plus the folding table.
///
/// Immutable after construction, so one instance can be shared across
/// threads and encoders.
#[derive(Debug, Default, Clone)]
pub struct RuleSet {
    table: RuleTable,
    folding: FoldingTable,
}

impl RuleSet {
    /// Parse a rule source in the line-oriented rule format.
    pub fn parse(source: &str) -> Result<Self, RulesError> {
        let parsed = parse_rules(source)?;
        let rule_set = Self {
            table: RuleTable::from_rules(parsed.rules),
            folding: FoldingTable::from_pairs(parsed.foldings),
        };
        log::debug!(
            "loaded {} rules in {} groups, {} foldings",
            rule_set.table.len(),
            rule_set.table.group_count(),
            rule_set.folding.len()
        );
        Ok(rule_set)
    }

    /// Read and parse a rule file.
    pub fn load_file(path: &Path) -> Result<Self, RulesError> {
        let source = std::fs::read_to_string(path).map_err(|e| RulesError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&source)
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn folding(&self) -> &FoldingTable {
        &self.folding
    }

    pub fn rule_count(&self) -> usize {
        self.table.len()
    }
}
