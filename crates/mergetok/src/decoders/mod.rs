//! # Token Decoders
//!
//! * [`VocabDecoder`] - concatenates the surface strings of a [`crate::Vocabulary`].
//! * `ParallelRayonDecoder` - a batch parallelism wrapper around any [`TokenDecoder`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mergetok::{TokenDecoder, TokenType, TokenizerModel, decoders::VocabDecoder};
//!
//! fn example<T: TokenType>(
//!     model: Arc<TokenizerModel<T>>,
//!     batch: &[&[T]],
//! ) -> Vec<String> {
//!     let decoder = VocabDecoder::new(model);
//!
//!     #[cfg(feature = "rayon")]
//!     let decoder = mergetok::rayon::ParallelRayonDecoder::new(decoder);
//!
//!     decoder.try_decode_batch_to_strings(batch).unwrap()
//! }
//! ```

mod token_decoder;
mod vocab_decoder;

#[doc(inline)]
pub use token_decoder::TokenDecoder;
#[doc(inline)]
pub use vocab_decoder::{REPLACEMENT_TOKEN, VocabDecoder};
