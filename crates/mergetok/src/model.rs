//! # Tokenizer Config and Model

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{MTResult, MergetokError},
    merges::MergeRule,
    types::TokenType,
    vocab::Vocabulary,
};

/// Default maximum vocabulary size.
pub const DEFAULT_MAX_TOKENS: usize = 1000;

/// Default minimum merge frequency.
pub const DEFAULT_MIN_FREQ: usize = 2;

/// Tokenizer configuration.
///
/// Fixed at construction; persisted as the model's ``config`` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// The maximum vocabulary size.
    pub max_tokens: usize,

    /// The minimum frequency a pair needs to be merged.
    pub min_freq: usize,

    /// Lowercase text before training and encoding.
    pub lowercase: bool,

    /// Allow merges where either side is a whitespace token.
    pub merge_whitespace: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            min_freq: DEFAULT_MIN_FREQ,
            lowercase: false,
            merge_whitespace: false,
        }
    }
}

impl TokenizerConfig {
    /// Sets the maximum vocabulary size.
    pub fn with_max_tokens(
        self,
        max_tokens: usize,
    ) -> Self {
        Self { max_tokens, ..self }
    }

    /// Sets the minimum merge frequency.
    pub fn with_min_freq(
        self,
        min_freq: usize,
    ) -> Self {
        Self { min_freq, ..self }
    }

    /// Sets the lowercase normalization flag.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self { lowercase, ..self }
    }

    /// Sets the merge-across-whitespace flag.
    pub fn with_merge_whitespace(
        self,
        merge_whitespace: bool,
    ) -> Self {
        Self {
            merge_whitespace,
            ..self
        }
    }

    /// Normalize text for training or encoding.
    ///
    /// Lowercases iff configured; nothing else.
    pub fn normalize<'a>(
        &self,
        text: &'a str,
    ) -> Cow<'a, str> {
        if self.lowercase {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// The complete persistable state of a trained tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerModel<T: TokenType> {
    config: TokenizerConfig,
    vocab: Vocabulary<T>,
    merges: Vec<MergeRule>,
}

impl<T: TokenType> TokenizerModel<T> {
    /// Assemble a model, checking that every merge result is in the vocabulary.
    ///
    /// ## Errors
    /// * [`MergetokError::MalformedModel`] if the vocabulary is empty,
    ///   or a merged token is missing from it.
    pub fn new(
        config: TokenizerConfig,
        vocab: Vocabulary<T>,
        merges: Vec<MergeRule>,
    ) -> MTResult<Self> {
        if vocab.is_empty() {
            return Err(MergetokError::MalformedModel(
                "vocabulary is empty".to_string(),
            ));
        }
        for (idx, rule) in merges.iter().enumerate() {
            if !vocab.contains(rule.merged()) {
                return Err(MergetokError::MalformedModel(format!(
                    "merges[{idx}]: merged token {:?} is not in the vocabulary",
                    rule.merged().as_str()
                )));
            }
        }

        Ok(Self {
            config,
            vocab,
            merges,
        })
    }

    /// The config the model was trained with.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Vocabulary<T> {
        &self.vocab
    }

    /// The merge history, in the order the merges were learned.
    pub fn merges(&self) -> &[MergeRule] {
        &self.merges
    }
}
