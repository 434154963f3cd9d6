//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use compact_str::CompactString;
use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a token id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the largest id in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A token: an immutable string of one or more base characters.
///
/// Two tokens are equal iff their character content is equal.
pub type Token = CompactString;

/// An ordered pair of tokens.
pub type Pair = (Token, Token);

/// Concatenate two tokens into their merged token.
pub fn concat_tokens(
    left: &str,
    right: &str,
) -> Token {
    let mut merged = Token::with_capacity(left.len() + right.len());
    merged.push_str(left);
    merged.push_str(right);
    merged
}

/// Is this token made up entirely of whitespace?
///
/// The empty string is not whitespace.
pub fn is_whitespace_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_whitespace)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type MTHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type MTHashSet<V> = ahash::AHashSet<V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type MTHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type MTHashSet<V> = std::collections::HashSet<V>;
    }
}
