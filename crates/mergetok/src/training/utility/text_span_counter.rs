//! # Word Counter

use crate::{
    merges::TokenSpanBuf,
    model::TokenizerConfig,
    types::{MTHashMap, MTHashSet, Token},
};

/// Split text into training words.
///
/// Each word is a run of non-whitespace characters followed by the run of
/// whitespace after it; a leading whitespace run is a word of its own.
/// Concatenating the words yields `text` again.
///
/// ```
/// use mergetok::training::utility::split_words;
///
/// let words: Vec<&str> = split_words("  ab cd\n").collect();
/// assert_eq!(words, vec!["  ", "ab ", "cd\n"]);
/// ```
pub fn split_words(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    core::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let mut seen_space = false;
        let mut end = rest.len();
        for (idx, c) in rest.char_indices() {
            if c.is_whitespace() {
                seen_space = true;
            } else if seen_space {
                end = idx;
                break;
            }
        }

        let (word, tail) = rest.split_at(end);
        rest = tail;
        Some(word)
    })
}

/// Word counter structure.
///
/// Identical words are stored once with a count; pair frequencies are
/// weighted by that count during training.
#[derive(Debug, Clone)]
pub struct TextSpanCounter {
    /// Normalization config.
    pub config: TokenizerConfig,

    /// The word counts.
    pub word_counts: MTHashMap<Token, usize>,
}

impl TextSpanCounter {
    /// Create a new word counter.
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            config,
            word_counts: MTHashMap::with_capacity(1024),
        }
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let text = self.config.normalize(text.as_ref());
        for word in split_words(&text) {
            *self.word_counts.entry(Token::from(word)).or_default() += 1;
        }
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Does the corpus contain at least one non-whitespace character?
    pub fn has_words(&self) -> bool {
        self.word_counts
            .keys()
            .any(|w| w.chars().any(|c| !c.is_whitespace()))
    }

    /// The distinct base characters of the corpus, as tokens.
    pub fn alphabet(&self) -> MTHashSet<Token> {
        let mut buf = [0u8; 4];
        self.word_counts
            .keys()
            .flat_map(|w| w.chars())
            .map(|c| Token::from(&*c.encode_utf8(&mut buf)))
            .collect()
    }

    /// Convert the counts to a sorted ``(TokenSpanBuf, count)`` table.
    ///
    /// Each word starts as one token per character.
    pub fn to_text_span_counts(&self) -> (Vec<TokenSpanBuf>, Vec<usize>) {
        let mut entries: Vec<(&Token, usize)> =
            self.word_counts.iter().map(|(k, v)| (k, *v)).collect();
        entries.sort_unstable();

        entries
            .into_iter()
            .map(|(word, count)| (TokenSpanBuf::from_chars(word), count))
            .unzip()
    }
}
