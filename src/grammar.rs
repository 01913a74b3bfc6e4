//! Rewrite rules and grammar expansion.
//!
//! A [`Rule`] maps a single symbol to a replacement string. A [`RuleTable`]
//! normalizes an ordered rule list into a lookup (first occurrence of a
//! duplicate key wins) and expands an axiom through repeated rewriting.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single rewrite rule: every occurrence of `key` becomes `replacement`
/// each generation.
///
/// The replacement may be any string, including the empty string (which
/// erases the symbol).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The symbol this rule rewrites.
    pub key: char,
    /// The string substituted for `key` each generation.
    pub replacement: String,
}

impl Rule {
    /// Builds a rule from a host-supplied key string.
    ///
    /// Rule keys come from editor text fields, so a multi-character key is
    /// truncated to its first character with a warning rather than rejected.
    /// Returns `None` only for an empty key.
    pub fn new(key: &str, replacement: impl Into<String>) -> Option<Self> {
        let mut chars = key.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            warn!("rule key `{key}` truncated to `{first}`");
        }
        Some(Self {
            key: first,
            replacement: replacement.into(),
        })
    }
}

/// A normalized symbol-to-replacement lookup built from an ordered rule list.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: HashMap<char, String>,
}

impl RuleTable {
    /// Normalizes `rules` into a lookup table.
    ///
    /// When the same key appears more than once, the first occurrence wins
    /// and later duplicates are ignored. The check is explicit rather than
    /// relying on the map's own conflict behavior.
    pub fn new(rules: &[Rule]) -> Self {
        let mut table = HashMap::with_capacity(rules.len());
        for rule in rules {
            if table.contains_key(&rule.key) {
                continue;
            }
            table.insert(rule.key, rule.replacement.clone());
        }
        Self { rules: table }
    }

    /// Returns the replacement for `symbol`, if a rule exists for it.
    pub fn lookup(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Rewrites `axiom` for `iterations` generations and returns the fully
    /// expanded string.
    ///
    /// Each generation scans the current string once, substituting every
    /// symbol that has a rule and copying the rest through unchanged. Zero
    /// iterations returns the axiom as-is.
    ///
    /// There is no cycle or growth detection: self-referential expansive
    /// rules grow the string exponentially, and the caller is expected to
    /// bound `iterations` to a small range.
    pub fn expand(&self, axiom: &str, iterations: u32) -> String {
        let mut current = axiom.to_owned();
        for _ in 0..iterations {
            let mut next = String::with_capacity(current.len());
            for c in current.chars() {
                match self.lookup(c) {
                    Some(replacement) => next.push_str(replacement),
                    None => next.push(c),
                }
            }
            current = next;
        }
        current
    }
}

/// Expands `axiom` with `rules` for `iterations` generations.
///
/// Convenience wrapper over [`RuleTable::new`] + [`RuleTable::expand`].
pub fn expand(axiom: &str, rules: &[Rule], iterations: u32) -> String {
    RuleTable::new(rules).expand(axiom, iterations)
}
