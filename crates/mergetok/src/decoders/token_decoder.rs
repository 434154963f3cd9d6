//! # Token Decoder Trait

use crate::{errors::MTResult, types::TokenType};

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens, appending to a target string.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `text` - The target string to append to.
    fn try_decode_append(
        &self,
        tokens: &[T],
        text: &mut String,
    ) -> MTResult<()>;

    /// Decodes tokens into a string.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// The decoded string.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> MTResult<String> {
        let mut text = String::with_capacity(tokens.len() * 2);
        self.try_decode_append(tokens, &mut text)?;
        Ok(text)
    }

    /// Decodes a batch of token sequences.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    ///
    /// ## Returns
    /// One string per sequence.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> MTResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
