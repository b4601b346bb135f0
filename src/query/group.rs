//! Grouped query values.
//!
//! A [`Group`] is a flat list of literal patterns joined by a single
//! combinator kind. Mixing AND and OR in one group is not supported here;
//! mixed expressions go through the [`Expr`](crate::query::parser::Expr)
//! tree and the executor.

use crate::text::{encode_units, CodeUnit};

/// How the patterns of a group combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Every pattern must co-occur within the proximity tolerance.
    And,
    /// Any pattern may match.
    Or,
}

/// An immutable set of literal patterns with one combinator kind.
///
/// An empty group is valid and evaluates to every position in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    kind: GroupKind,
    patterns: Vec<Vec<CodeUnit>>,
}

impl Group {
    /// An empty group of the given kind.
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            patterns: Vec::new(),
        }
    }

    /// Group requiring all patterns to co-occur.
    pub fn and_of<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::of(GroupKind::And, patterns)
    }

    /// Group matching any of the patterns.
    pub fn or_of<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::of(GroupKind::Or, patterns)
    }

    fn of<I, S>(kind: GroupKind, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            kind,
            patterns: patterns
                .into_iter()
                .map(|p| encode_units(p.as_ref()))
                .collect(),
        }
    }

    /// Extend the group with one more pattern. Extending keeps the group's
    /// kind; this is the absorption rule of the original builder DSL.
    pub fn push(&mut self, pattern: &str) {
        self.patterns.push(encode_units(pattern));
    }

    /// Extend with a raw code-unit pattern.
    pub fn push_units(&mut self, pattern: Vec<CodeUnit>) {
        self.patterns.push(pattern);
    }

    /// Chaining form of [`Group::push`].
    pub fn with(mut self, pattern: &str) -> Self {
        self.push(pattern);
        self
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn patterns(&self) -> &[Vec<CodeUnit>] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_of() {
        let group = Group::and_of(["罗密欧", "朱丽叶"]);
        assert_eq!(group.kind(), GroupKind::And);
        assert_eq!(group.len(), 2);
        assert_eq!(group.patterns()[0], encode_units("罗密欧"));
    }

    #[test]
    fn test_or_of_empty() {
        let group = Group::or_of(Vec::<&str>::new());
        assert_eq!(group.kind(), GroupKind::Or);
        assert!(group.is_empty());
    }

    #[test]
    fn test_with_extends_same_kind() {
        let group = Group::and_of(["Romeo"]).with("Juliet").with("love");
        assert_eq!(group.kind(), GroupKind::And);
        assert_eq!(group.len(), 3);
    }
}
