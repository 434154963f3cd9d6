//! # Merges
//!
//! [`MergeRule`] is one learned merge; the ordered list of rules is the merge history.
//!
//! [`TokenSpanBuf`] applies merges: greedy, leftmost-first, non-overlapping
//! replacement of an adjacent pair by its merged token. The same rule is used
//! during training and when replaying the merge history during encoding.

mod merge_rule;
mod token_span_buffer;

#[doc(inline)]
pub use merge_rule::MergeRule;
#[doc(inline)]
pub use token_span_buffer::TokenSpanBuf;
