//! # Merge Replay Encoder

use std::sync::Arc;

use crate::{
    encoders::TokenEncoder,
    errors::MTResult,
    merges::TokenSpanBuf,
    model::TokenizerModel,
    types::TokenType,
};

/// Encodes by replaying the merge history over the character stream.
///
/// * Normalize as in training.
/// * Split the whole text into characters (no word split).
/// * Apply every [`crate::merges::MergeRule`] in learned order.
/// * Map tokens to ids; a token missing from the vocabulary falls back
///   to its characters, and characters missing from the vocabulary are
///   skipped.
#[derive(Debug, Clone)]
pub struct MergeReplayEncoder<T: TokenType> {
    model: Arc<TokenizerModel<T>>,
}

impl<T: TokenType> MergeReplayEncoder<T> {
    /// Create an encoder over a trained model.
    pub fn new(model: Arc<TokenizerModel<T>>) -> Self {
        Self { model }
    }

    /// The model.
    pub fn model(&self) -> &Arc<TokenizerModel<T>> {
        &self.model
    }

    /// Replay the merge history over `text`, without mapping to ids.
    pub fn merge_text(
        &self,
        text: &str,
    ) -> TokenSpanBuf {
        let text = self.model.config().normalize(text);
        let mut span = TokenSpanBuf::from_chars(&text);
        for rule in self.model.merges() {
            if span.len() < 2 {
                break;
            }
            span.apply_rule(rule);
        }
        span
    }
}

impl<T: TokenType> TokenEncoder<T> for MergeReplayEncoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> MTResult<()> {
        let vocab = self.model.vocab();
        let span = self.merge_text(text);

        tokens.reserve(span.len());
        let mut buf = [0u8; 4];
        for token in span.tokens() {
            if let Some(id) = vocab.id(token) {
                tokens.push(id);
                continue;
            }
            // Unknown token: fall back to its characters; skip unknown characters.
            tokens.extend(
                token
                    .chars()
                    .filter_map(|c| vocab.id(c.encode_utf8(&mut buf))),
            );
        }
        Ok(())
    }
}
