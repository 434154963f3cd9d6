//! # `mergetok` Character-Pair BPE Tokenizer
//!
//! A byte-pair-encoding style tokenizer over characters: it learns a
//! vocabulary and an ordered merge history from a text corpus, then encodes
//! text to integer ids and decodes ids back to text.
//!
//! See:
//! * [`training`] to learn a [`TokenizerModel`] from text.
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`io`] to save and load models and token-id files.
//! * [`Tokenizer`] for the combined fit / encode / decode / save / load surface.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//! * ``training``
//!
//! #### feature: ``training``
//!
//! The training feature enables [`training`] and ``Tokenizer::fit``.
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::MTHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables batch parallelism wrappers using the ``rayon`` crate.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Round Trip
//!
//! ```rust
//! # #[cfg(feature = "training")]
//! # fn main() -> mergetok::MTResult<()> {
//! use mergetok::{Tokenizer, TokenizerConfig};
//!
//! let mut tokenizer = Tokenizer::<u32>::new(TokenizerConfig::default().with_max_tokens(100));
//! tokenizer.fit("the cat sat on the mat")?;
//!
//! let ids = tokenizer.encode("the mat")?;
//! assert_eq!(tokenizer.decode(&ids)?, "the mat");
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "training"))]
//! # fn main() {}
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

#[cfg(feature = "training")]
pub mod training;

pub mod compat;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod io;
pub mod merges;
pub mod model;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{MTResult, MergetokError};
#[doc(inline)]
pub use merges::MergeRule;
#[doc(inline)]
pub use model::{TokenizerConfig, TokenizerModel};
#[doc(inline)]
pub use tokenizer::Tokenizer;
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::Vocabulary;
