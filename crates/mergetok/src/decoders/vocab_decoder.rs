//! # Vocabulary Decoder

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    errors::MTResult,
    model::TokenizerModel,
    types::TokenType,
};

/// Emitted for ids outside the vocabulary.
pub const REPLACEMENT_TOKEN: char = char::REPLACEMENT_CHARACTER;

/// Decodes ids by concatenating their vocabulary strings.
///
/// Ids outside ``[0, vocab.len())`` decode to [`REPLACEMENT_TOKEN`];
/// decoding never fails on a well-formed model.
#[derive(Debug, Clone)]
pub struct VocabDecoder<T: TokenType> {
    model: Arc<TokenizerModel<T>>,
}

impl<T: TokenType> VocabDecoder<T> {
    /// Create a decoder over a model's vocabulary.
    pub fn new(model: Arc<TokenizerModel<T>>) -> Self {
        Self { model }
    }

    /// The model.
    pub fn model(&self) -> &Arc<TokenizerModel<T>> {
        &self.model
    }
}

impl<T: TokenType> TokenDecoder<T> for VocabDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, text)))]
    fn try_decode_append(
        &self,
        tokens: &[T],
        text: &mut String,
    ) -> MTResult<()> {
        let vocab = self.model.vocab();
        for &id in tokens {
            match vocab.token(id) {
                Some(token) => text.push_str(token),
                None => {
                    log::trace!("decoding out-of-range id {id}");
                    text.push(REPLACEMENT_TOKEN);
                }
            }
        }
        Ok(())
    }
}
