//! # Token Encoder Trait

use crate::{errors::MTResult, types::TokenType};

/// A trait for token encoders.
///
/// This is the interface consumers use to turn text into id sequences.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Encode text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `tokens` - The target token buffer to append to.
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> MTResult<()>;

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A vector of tokens.
    fn try_encode(
        &self,
        text: &str,
    ) -> MTResult<Vec<T>> {
        let mut tokens = Vec::with_capacity(text.len() / 2);
        self.try_encode_append(text, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode a batch of texts into tokens.
    ///
    /// ## Arguments
    /// * `batch` - The texts to encode.
    ///
    /// ## Returns
    /// One token vector per input text.
    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> MTResult<Vec<Vec<T>>> {
        batch.iter().map(|text| self.try_encode(text)).collect()
    }
}
