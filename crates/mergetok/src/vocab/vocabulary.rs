//! # Token Vocabulary

use crate::{
    errors::{MTResult, MergetokError},
    types::{MTHashMap, Token, TokenType},
};

/// A bijection between [`Token`]s and ids ``[0, len)``.
#[derive(Debug, Clone)]
pub struct Vocabulary<T: TokenType> {
    id_to_token: Vec<Token>,
    token_to_id: MTHashMap<Token, T>,
}

impl<T: TokenType> Default for Vocabulary<T> {
    fn default() -> Self {
        Self {
            id_to_token: Vec::new(),
            token_to_id: MTHashMap::default(),
        }
    }
}

impl<T: TokenType> PartialEq for Vocabulary<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        // `token_to_id` is derived from `id_to_token`.
        self.id_to_token == other.id_to_token
    }
}

impl<T: TokenType> Eq for Vocabulary<T> {}

impl<T: TokenType> Vocabulary<T> {
    /// Build a vocabulary by sorting the distinct `tokens`.
    ///
    /// Ids are assigned by lexicographic sort position; duplicates collapse.
    pub fn from_sorted_tokens<I>(tokens: I) -> MTResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        let mut id_to_token: Vec<Token> = tokens.into_iter().map(Into::into).collect();
        id_to_token.sort_unstable();
        id_to_token.dedup();

        Self::from_id_to_token(id_to_token)
    }

    /// Build a vocabulary from an id-ordered token list (list index = id).
    ///
    /// ## Errors
    /// * [`MergetokError::MalformedModel`] if a token appears twice.
    /// * [`MergetokError::VocabSizeOverflow`] if the ids do not fit `T`.
    pub fn from_id_to_token(id_to_token: Vec<Token>) -> MTResult<Self> {
        let size = id_to_token.len();
        if size > 0 && T::from_usize(size - 1).is_none() {
            return Err(MergetokError::VocabSizeOverflow { size });
        }

        let mut token_to_id: MTHashMap<Token, T> = MTHashMap::with_capacity(size);
        for (idx, token) in id_to_token.iter().enumerate() {
            let id = T::from_usize(idx).ok_or(MergetokError::VocabSizeOverflow { size })?;
            if let Some(prev) = token_to_id.insert(token.clone(), id) {
                return Err(MergetokError::MalformedModel(format!(
                    "duplicate vocabulary token {token:?} at ids {prev} and {id}"
                )));
            }
        }

        Ok(Self {
            id_to_token,
            token_to_id,
        })
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// The id-ordered token list.
    pub fn tokens(&self) -> &[Token] {
        &self.id_to_token
    }

    /// Look up the token for an id.
    pub fn token(
        &self,
        id: T,
    ) -> Option<&Token> {
        id.to_usize().and_then(|idx| self.id_to_token.get(idx))
    }

    /// Look up the id for a token.
    pub fn id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_to_id.get(token).copied()
    }

    /// Is `token` in the vocabulary?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Iterate ``(id, token)`` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &Token)> + '_ {
        self.id_to_token
            .iter()
            .enumerate()
            .filter_map(|(idx, token)| T::from_usize(idx).map(|id| (id, token)))
    }
}
