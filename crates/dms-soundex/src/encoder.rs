// Daitch-Mokotoff encoder driver
//
// Walks the cleaned name left to right. At each position the longest rule
// matching there is applied to every live branch; a rule with several
// alternatives forks every branch once per alternative when branching is on.
// At the end every branch is padded to six characters and duplicates are
// dropped, keeping first-seen order.

use std::collections::HashSet;
use std::sync::Arc;

use dms_core::code::join_codes;
use dms_rules::{FoldingTable, RuleSet, default_rules};

use crate::SoundexError;
use crate::branch::Branch;
use crate::cleanup;

/// Encoder options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Map accented characters through the folding table during cleanup.
    pub folding: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self { folding: true }
    }
}

/// Daitch-Mokotoff Soundex encoder.
///
/// Holds a shared, immutable rule set and the encoder options. Encoding
/// takes `&self` and keeps all branch state local to the call, so one
/// encoder can serve many threads.
#[derive(Debug, Clone)]
pub struct DaitchMokotoff {
    rules: Arc<RuleSet>,
    options: EncoderOptions,
}

impl Default for DaitchMokotoff {
    fn default() -> Self {
        Self::new()
    }
}

impl DaitchMokotoff {
    /// Encoder using the bundled rules with folding enabled.
    pub fn new() -> Self {
        Self::from_rules(default_rules(), EncoderOptions::default())
    }

    /// Encoder using the bundled rules.
    pub fn with_folding(folding: bool) -> Self {
        Self::from_rules(default_rules(), EncoderOptions { folding })
    }

    /// Encoder over a caller-supplied rule set.
    pub fn from_rules(rules: Arc<RuleSet>, options: EncoderOptions) -> Self {
        Self { rules, options }
    }

    /// Encoder over a rule source in the line-oriented rule format.
    pub fn from_rules_str(source: &str, options: EncoderOptions) -> Result<Self, SoundexError> {
        let rules = RuleSet::parse(source)?;
        Ok(Self::from_rules(Arc::new(rules), options))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    /// Set whether accented characters are folded during cleanup.
    pub fn set_folding(&mut self, value: bool) {
        self.options.folding = value;
    }

    /// Library version string.
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Normalize a name the way the encoder sees it.
    pub fn cleanup(&self, text: &str) -> String {
        cleanup::cleanup(text, self.folding_table())
    }

    /// Single code following the first alternative of every rule.
    ///
    /// Always six characters; empty or letter-free input gives `"000000"`.
    pub fn encode(&self, text: &str) -> String {
        // Without branching exactly one branch survives.
        self.run(text, false).into_iter().next().unwrap_or_default()
    }

    /// All distinct codes joined with `|`, in the order they were produced.
    pub fn soundex(&self, text: &str) -> String {
        join_codes(&self.soundex_codes(text))
    }

    /// All distinct codes, in the order they were produced.
    pub fn soundex_codes(&self, text: &str) -> Vec<String> {
        self.run(text, true)
    }

    fn folding_table(&self) -> Option<&FoldingTable> {
        self.options.folding.then(|| self.rules.folding())
    }

    fn run(&self, text: &str, branching: bool) -> Vec<String> {
        let input = cleanup::cleanup_chars(text, self.folding_table());
        let table = self.rules.table();

        let mut branches = vec![Branch::new()];
        let mut last_char: Option<char> = None;
        let mut index = 0;

        while index < input.len() {
            let ch = input[index];
            let context = &input[index..];

            let Some(rule) = table.find_match(context) else {
                index += 1;
                last_char = Some(ch);
                continue;
            };

            let replacements = rule.replacements(context, last_char.is_none());
            let force = matches!((last_char, ch), (Some('m'), 'n') | (Some('n'), 'm'));

            if branching && replacements.len() > 1 {
                let mut next = Vec::with_capacity(branches.len() * replacements.len());
                for branch in &branches {
                    for replacement in replacements {
                        let mut forked = branch.fork();
                        forked.apply_replacement(replacement, force);
                        next.push(forked);
                    }
                }
                branches = next;
            } else if let Some(replacement) = replacements.first() {
                for branch in &mut branches {
                    branch.apply_replacement(replacement, force);
                }
            }

            if branching {
                dedup_branches(&mut branches);
            }

            log::trace!(
                "{text:?} @{index}: {rule} -> {} branch(es)",
                branches.len()
            );

            index += rule.pattern_len();
            last_char = Some(ch);
        }

        let mut seen = HashSet::with_capacity(branches.len());
        branches
            .into_iter()
            .map(|mut branch| {
                branch.finish();
                branch.into_code()
            })
            .filter(|code| seen.insert(code.clone()))
            .collect()
    }
}

/// Drop branches whose code already appeared earlier in the list.
fn dedup_branches(branches: &mut Vec<Branch>) {
    let mut seen = HashSet::with_capacity(branches.len());
    branches.retain(|branch| seen.insert(branch.as_str().to_string()));
}
