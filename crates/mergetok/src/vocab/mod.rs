//! # Vocabulary
//!
//! A [`Vocabulary`] maps tokens to contiguous ids ``[0, len)``.
//!
//! Trained vocabularies are built once, after learning completes, by sorting
//! every discovered token; ids are sort positions. Loaded vocabularies keep the
//! persisted id order.

mod vocabulary;

#[doc(inline)]
pub use vocabulary::Vocabulary;
