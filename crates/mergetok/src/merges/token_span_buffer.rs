//! # Token Span Buffer

use crate::{
    merges::MergeRule,
    types::{Token, concat_tokens},
};

/// A mutable span of tokens (a "word", or a whole encode stream).
///
/// Iteratively rewritten by merges, both during vocabulary training
/// and when replaying the merge history at encode time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TokenSpanBuf {
    tokens: Vec<Token>,
}

impl<S: AsRef<[Token]>> From<S> for TokenSpanBuf {
    fn from(tokens: S) -> Self {
        Self::from_tokens(tokens)
    }
}

impl TokenSpanBuf {
    const DEC: i32 = -1;
    const INC: i32 = 1;

    /// Create a new span buffer from tokens.
    pub fn from_tokens<S>(tokens: S) -> Self
    where
        S: AsRef<[Token]>,
    {
        Self {
            tokens: tokens.as_ref().to_vec(),
        }
    }

    /// Create a new span buffer with one base token per character of `text`.
    pub fn from_chars<S: AsRef<str>>(text: S) -> Self {
        let mut buf = [0u8; 4];
        Self {
            tokens: text
                .as_ref()
                .chars()
                .map(|c| Token::from(&*c.encode_utf8(&mut buf)))
                .collect(),
        }
    }

    /// View the tokens as a slice.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Release the tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Get the length of the span.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is this span empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get an iterator over adjacent ``(left, right)`` windows of this span.
    pub fn pairs(&self) -> impl Iterator<Item = (&Token, &Token)> + '_ {
        self.tokens.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Apply a [`MergeRule`] to this span.
    ///
    /// ## Returns
    /// The number of replacements made.
    pub fn apply_rule(
        &mut self,
        rule: &MergeRule,
    ) -> usize {
        self.merge_pair(rule.left(), rule.right())
    }

    /// Merge all non-overlapping occurrences of ``(left, right) -> left + right``.
    ///
    /// Scans left to right; each match consumes both tokens.
    ///
    /// ## Returns
    /// The number of replacements made.
    pub fn merge_pair(
        &mut self,
        left: &str,
        right: &str,
    ) -> usize {
        let before = self.len();
        self.merge_pair_cb(left, right, &mut |_, _, _| {});
        before - self.len()
    }

    /// Merge all non-overlapping occurrences of ``(left, right) -> left + right``.
    ///
    /// # Arguments
    /// * `left` - the left token of the pair to merge.
    /// * `right` - the right token of the pair to merge.
    /// * `on_merge` - a callback function to invoke for each incremental pair delta.
    ///   The function is called with:
    ///   - `a`, `b` - the adjacent pair that changed.
    ///   - `delta` - the pair count delta: `+1` for an added pair, `-1` for a removed pair.
    pub fn merge_pair_cb<F>(
        &mut self,
        left: &str,
        right: &str,
        on_merge: &mut F,
    ) where
        F: FnMut(&str, &str, i32),
    {
        let n = self.tokens.len();

        if n < 2 {
            // Single-token words have no pairs to merge.
            return;
        }

        if !self.pairs().any(|(a, b)| a == left && b == right) {
            return;
        }

        let replacement = concat_tokens(left, right);
        let mut new_tokens: Vec<Token> = Vec::with_capacity(n);

        let mut i = 0;
        while i < n {
            if i + 1 < n && self.tokens[i] == left && self.tokens[i + 1] == right {
                // Remove Previous Pair?
                if let Some(x) = new_tokens.last() {
                    on_merge(x, left, Self::DEC);
                    on_merge(x, &replacement, Self::INC);
                }

                // Remove Current Pair.
                on_merge(left, right, Self::DEC);

                // Remove Next Pair?
                if i + 2 < n {
                    let y = &self.tokens[i + 2];
                    on_merge(right, y, Self::DEC);
                    on_merge(&replacement, y, Self::INC);
                }

                new_tokens.push(replacement.clone());

                // Skip 'left' and 'right'.
                i += 2;
            } else {
                new_tokens.push(self.tokens[i].clone());
                i += 1;
            }
        }

        self.tokens = new_tokens;
    }
}
