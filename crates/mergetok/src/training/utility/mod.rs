//! # Trainer Implementation Utilities

mod merge_selector;
#[doc(inline)]
pub use merge_selector::{MergeJob, MergeSelector, select_best_pair};

mod pair_counter;
#[doc(inline)]
pub use pair_counter::{PairCountMap, PairCounter, PairIndexMap};

mod text_span_counter;
#[doc(inline)]
pub use text_span_counter::{TextSpanCounter, split_words};
