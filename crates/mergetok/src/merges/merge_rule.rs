//! # Merge Rules

use crate::types::{Pair, Token, concat_tokens};

/// A learned merge: replace the adjacent pair ``(left, right)`` with ``merged``.
///
/// ``merged`` is always ``left + right``.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeRule {
    left: Token,
    right: Token,
    merged: Token,
}

impl MergeRule {
    /// Create the merge rule for ``(left, right)``.
    pub fn new<L, R>(
        left: L,
        right: R,
    ) -> Self
    where
        L: Into<Token>,
        R: Into<Token>,
    {
        let left = left.into();
        let right = right.into();
        let merged = concat_tokens(&left, &right);
        Self {
            left,
            right,
            merged,
        }
    }

    /// Create a merge rule from a pair.
    pub fn from_pair(pair: Pair) -> Self {
        let (left, right) = pair;
        Self::new(left, right)
    }

    /// The left token.
    pub fn left(&self) -> &Token {
        &self.left
    }

    /// The right token.
    pub fn right(&self) -> &Token {
        &self.right
    }

    /// The merged token.
    pub fn merged(&self) -> &Token {
        &self.merged
    }

    /// The ``(left, right)`` pair this rule replaces.
    pub fn pair(&self) -> Pair {
        (self.left.clone(), self.right.clone())
    }
}
