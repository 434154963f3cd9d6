//! # Token Encoders
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mergetok::{TokenEncoder, TokenType, TokenizerModel, encoders::MergeReplayEncoder};
//!
//! fn example<T: TokenType>(
//!     model: Arc<TokenizerModel<T>>,
//!     batch: &[&str],
//! ) -> Vec<Vec<T>> {
//!     let encoder = MergeReplayEncoder::new(model);
//!
//!     #[cfg(feature = "rayon")]
//!     let encoder = mergetok::rayon::ParallelRayonEncoder::new(encoder);
//!
//!     encoder.try_encode_batch(batch).unwrap()
//! }
//! ```

mod merge_replay_encoder;
mod token_encoder;

#[doc(inline)]
pub use merge_replay_encoder::MergeReplayEncoder;
#[doc(inline)]
pub use token_encoder::TokenEncoder;
