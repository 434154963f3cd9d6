//! # Vocabulary Training
//!
//! Learns a vocabulary and an ordered merge history from a text corpus.
//!
//! Training:
//! * splits the corpus into words; each word keeps its trailing whitespace,
//!   and pairs never span two words (see [`utility::split_words`]);
//! * counts adjacent pairs ([`utility::PairCounter`]);
//! * repeatedly picks the most frequent pair, ties going to the
//!   lexicographically smallest ``(left, right)`` ([`utility::MergeSelector`]);
//! * rewrites every word containing it ([`crate::merges::TokenSpanBuf`]);
//! * stops when no pairs are left, the best pair is below ``min_freq``,
//!   or the next merge would make the vocabulary size reach ``max_tokens``.
//!
//! Pair counts are maintained incrementally from the deltas of each merge,
//! rather than recounted every round.
//!
//! The whole corpus is held in memory; there is no streaming mode.
//!
//! ```rust,no_run
//! use mergetok::{Tokenizer, TokenizerConfig, io::save_model_path, training::VocabularyBuilder};
//!
//! fn example(documents: &[String]) -> mergetok::MTResult<()> {
//!     let config = TokenizerConfig::default()
//!         .with_max_tokens(5000)
//!         .with_min_freq(3)
//!         .with_lowercase(true);
//!
//!     let mut builder = VocabularyBuilder::new(config);
//!     builder.update_from_samples(documents);
//!
//!     let results = builder.train::<u32>()?;
//!     save_model_path(&results.model, "story.enc")?;
//!
//!     let tokenizer = Tokenizer::from_model(results.model);
//!     let ids = tokenizer.encode("once upon a time")?;
//!     println!("{ids:?}");
//!     Ok(())
//! }
//! ```

pub mod utility;

mod vocab_builder;

#[doc(inline)]
pub use vocab_builder::{StopReason, TrainResults, VocabularyBuilder};
