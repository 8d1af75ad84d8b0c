//! Skill Normalizer — canonical, comparable skill tokens.
//!
//! A token is the trimmed, lowercased skill with every whitespace character
//! removed, so "Machine Learning" and "machinelearning" compare equal.

use std::fmt;

use serde::Serialize;

/// A single normalized skill. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SkillToken(String);

impl SkillToken {
    /// Normalizes one raw skill. Returns `None` when nothing remains.
    pub fn parse(raw: &str) -> Option<Self> {
        let token: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if token.is_empty() {
            None
        } else {
            Some(SkillToken(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Insertion-ordered set of skill tokens.
///
/// Duplicates collapse on insert, so an employee listing "Go, go" holds a
/// single `go` and set operations never double-count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<SkillToken>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token unless already present. Returns whether it was added.
    pub fn insert(&mut self, token: SkillToken) -> bool {
        if self.contains(&token) {
            return false;
        }
        self.0.push(token);
        true
    }

    pub fn contains(&self, token: &SkillToken) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SkillToken> {
        self.0.iter()
    }

    /// Tokens of `self` also in `other`, in `self`'s order.
    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        self.iter().filter(|t| other.contains(t)).cloned().collect()
    }

    /// Tokens of `self` absent from `other`, in `self`'s order.
    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        self.iter().filter(|t| !other.contains(t)).cloned().collect()
    }

    /// Joins tokens with `sep`, e.g. for display or CSV cells.
    pub fn join(&self, sep: &str) -> String {
        self.iter()
            .map(SkillToken::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl FromIterator<SkillToken> for SkillSet {
    fn from_iter<I: IntoIterator<Item = SkillToken>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a SkillToken;
    type IntoIter = std::slice::Iter<'a, SkillToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Splits comma-separated skill text into a normalized set.
/// `None` and blank input yield an empty set.
pub fn normalize(raw: Option<&str>) -> SkillSet {
    match raw {
        Some(text) => text.split(',').filter_map(SkillToken::parse).collect(),
        None => SkillSet::new(),
    }
}
