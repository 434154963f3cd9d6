//! # Error Types

use std::path::PathBuf;

/// Errors from mergetok operations.
#[derive(Debug, thiserror::Error)]
pub enum MergetokError {
    /// Training text contains no words.
    #[error("training text contains no tokens")]
    EmptyInput,

    /// Encode, decode, or save was called before `fit` or `load`.
    #[error("tokenizer is not trained; fit or load a model first")]
    UntrainedModel,

    /// A persisted model is missing fields, has invalid fields,
    /// or violates the vocabulary bijection.
    #[error("malformed model: {0}")]
    MalformedModel(String),

    /// A path could not be read or written.
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        /// The offending path.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configured max vocab size cannot hold the base alphabet.
    #[error("max vocab size ({size}) is smaller than the base alphabet ({alphabet})")]
    VocabSizeTooSmall {
        /// The configured max vocab size.
        size: usize,

        /// The number of distinct base characters.
        alphabet: usize,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Parse error in a token-id stream.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error on an unnamed stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MergetokError {
    /// Build a [`MergetokError::FileAccess`] for `path`.
    pub fn file_access<P: Into<PathBuf>>(
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

/// Result type for mergetok operations.
pub type MTResult<T> = core::result::Result<T, MergetokError>;
