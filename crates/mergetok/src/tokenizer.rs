//! # Tokenizer
//!
//! [`Tokenizer`] ties a [`TokenizerConfig`] to the trained state
//! (vocabulary and merge history) once `fit` or `load` has produced it.

use std::{path::Path, sync::Arc};

use crate::{
    decoders::{TokenDecoder, VocabDecoder},
    encoders::{MergeReplayEncoder, TokenEncoder},
    errors::{MTResult, MergetokError},
    io::{load_model_path, save_model_path},
    model::{TokenizerConfig, TokenizerModel},
    types::TokenType,
};

#[derive(Debug, Clone)]
struct TrainedState<T: TokenType> {
    model: Arc<TokenizerModel<T>>,
    encoder: MergeReplayEncoder<T>,
    decoder: VocabDecoder<T>,
}

impl<T: TokenType> TrainedState<T> {
    fn new(model: TokenizerModel<T>) -> Self {
        let model = Arc::new(model);
        Self {
            encoder: MergeReplayEncoder::new(model.clone()),
            decoder: VocabDecoder::new(model.clone()),
            model,
        }
    }
}

/// A character-pair BPE tokenizer.
///
/// Starts untrained; [`Tokenizer::fit`] or [`Tokenizer::load`] make it usable.
///
/// ```
/// use mergetok::{Tokenizer, TokenizerConfig};
///
/// let mut tokenizer = Tokenizer::<u32>::new(TokenizerConfig::default());
/// tokenizer.fit("abab").unwrap();
///
/// let ids = tokenizer.encode("abab").unwrap();
/// assert_eq!(ids, vec![1, 1]);
/// assert_eq!(tokenizer.decode(&ids).unwrap(), "abab");
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<T: TokenType> {
    config: TokenizerConfig,
    trained: Option<TrainedState<T>>,
}

impl<T: TokenType> Default for Tokenizer<T> {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

impl<T: TokenType> From<TokenizerModel<T>> for Tokenizer<T> {
    fn from(model: TokenizerModel<T>) -> Self {
        Self::from_model(model)
    }
}

impl<T: TokenType> Tokenizer<T> {
    /// Create an untrained tokenizer.
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            config,
            trained: None,
        }
    }

    /// Create a trained tokenizer from a model; the config is the model's.
    pub fn from_model(model: TokenizerModel<T>) -> Self {
        Self {
            config: *model.config(),
            trained: Some(TrainedState::new(model)),
        }
    }

    /// The config.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Has a vocabulary been learned or loaded?
    pub fn is_trained(&self) -> bool {
        self.trained.is_some()
    }

    /// The trained model, if any.
    pub fn model(&self) -> Option<&Arc<TokenizerModel<T>>> {
        self.trained.as_ref().map(|state| &state.model)
    }

    fn state(&self) -> MTResult<&TrainedState<T>> {
        self.trained.as_ref().ok_or(MergetokError::UntrainedModel)
    }

    /// Learn a vocabulary and merge history from `text`.
    ///
    /// On success the previous trained state, if any, is replaced.
    /// On failure it is left untouched.
    ///
    /// ## Errors
    /// See [`crate::training::VocabularyBuilder::train`].
    #[cfg(feature = "training")]
    pub fn fit(
        &mut self,
        text: &str,
    ) -> MTResult<crate::training::StopReason> {
        let mut builder = crate::training::VocabularyBuilder::new(self.config);
        builder.update_from_text(text);
        let results = builder.train::<T>()?;

        self.trained = Some(TrainedState::new(results.model));
        Ok(results.stop_reason)
    }

    /// Encode text into token ids.
    ///
    /// ## Errors
    /// * [`MergetokError::UntrainedModel`] before `fit` or `load`.
    pub fn encode(
        &self,
        text: &str,
    ) -> MTResult<Vec<T>> {
        self.state()?.encoder.try_encode(text)
    }

    /// Decode token ids into text.
    ///
    /// Unknown ids decode to [`crate::decoders::REPLACEMENT_TOKEN`].
    ///
    /// ## Errors
    /// * [`MergetokError::UntrainedModel`] before `fit` or `load`.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> MTResult<String> {
        self.state()?.decoder.try_decode_to_string(ids)
    }

    /// Save the trained model to a model file.
    ///
    /// ## Errors
    /// * [`MergetokError::UntrainedModel`] before `fit` or `load`.
    /// * [`MergetokError::FileAccess`] if the file cannot be written.
    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> MTResult<()> {
        save_model_path(self.state()?.model.as_ref(), path)
    }

    /// Load a tokenizer from a model file.
    ///
    /// ## Errors
    /// * [`MergetokError::FileAccess`] if the file cannot be read.
    /// * [`MergetokError::MalformedModel`] if the contents are invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> MTResult<Self> {
        load_model_path(path).map(Self::from_model)
    }
}

impl<T: TokenType> TokenEncoder<T> for Tokenizer<T> {
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> MTResult<()> {
        self.state()?.encoder.try_encode_append(text, tokens)
    }
}

impl<T: TokenType> TokenDecoder<T> for Tokenizer<T> {
    fn try_decode_append(
        &self,
        tokens: &[T],
        text: &mut String,
    ) -> MTResult<()> {
        self.state()?.decoder.try_decode_append(tokens, text)
    }
}
