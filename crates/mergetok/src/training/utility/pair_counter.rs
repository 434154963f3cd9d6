//! # Pair Counter

use crate::{
    merges::TokenSpanBuf,
    types::{MTHashMap, MTHashSet, Pair, Token, is_whitespace_token},
};

/// A map from [`Pair`] to its occurrence count.
pub type PairCountMap = MTHashMap<Pair, usize>;

/// A map from [`Pair`] to indices over ``words``.
pub type PairIndexMap = MTHashMap<Pair, MTHashSet<usize>>;

/// Adjacent pair frequencies over a word table.
///
/// Built once by a full pass over the words, then kept current with the
/// deltas reported while merges are applied.
#[derive(Debug, Clone)]
pub struct PairCounter {
    /// Count pairs where either side is whitespace.
    pub merge_whitespace: bool,

    /// A map from [`Pair`] to its occurrence count.
    ///
    /// ``sum(words[i].window_count(pair) * word_counts[i]) for all i``
    pub pair_counts: PairCountMap,

    /// A map from [`Pair`] to the words that may contain it.
    ///
    /// Entries can be stale (the word no longer holds the pair);
    /// merging a stale word is a no-op.
    pub pair_index: PairIndexMap,
}

impl PairCounter {
    /// Build a [`PairCounter`] from a word table.
    ///
    /// # Arguments
    /// * `words` - a sequence of words; assumed to be unique.
    /// * `counts` - `counts[i]` is the count of `words[i]`.
    /// * `merge_whitespace` - count pairs with a whitespace side.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(words, counts)))]
    pub fn from_word_count_table(
        words: &[TokenSpanBuf],
        counts: &[usize],
        merge_whitespace: bool,
    ) -> Self {
        let mut counter = PairCounter {
            merge_whitespace,
            pair_counts: PairCountMap::with_capacity(words.len()),
            pair_index: PairIndexMap::with_capacity(words.len()),
        };

        for (index, (word, &count)) in words.iter().zip(counts).enumerate() {
            if count == 0 || word.len() < 2 {
                continue;
            }
            for (a, b) in word.pairs() {
                if !counter.is_countable(a, b) {
                    continue;
                }
                let pair: Pair = (a.clone(), b.clone());
                *counter.pair_counts.entry(pair.clone()).or_default() += count;
                counter.pair_index.entry(pair).or_default().insert(index);
            }
        }

        counter
    }

    /// Is ``(a, b)`` eligible for counting under the whitespace policy?
    pub fn is_countable(
        &self,
        a: &str,
        b: &str,
    ) -> bool {
        self.merge_whitespace || !(is_whitespace_token(a) || is_whitespace_token(b))
    }

    /// The current count of `pair`.
    pub fn count(
        &self,
        pair: &Pair,
    ) -> usize {
        self.pair_counts.get(pair).copied().unwrap_or(0)
    }

    /// Take the word indices that may contain `pair`.
    pub fn take_word_indices(
        &mut self,
        pair: &Pair,
    ) -> MTHashSet<usize> {
        self.pair_index.remove(pair).unwrap_or_default()
    }

    /// Apply one pair delta reported by [`TokenSpanBuf::merge_pair_cb`].
    ///
    /// # Arguments
    /// * `a`, `b` - the pair.
    /// * `delta` - `+1` or `-1`.
    /// * `word_idx` - the word the delta happened in.
    /// * `word_count` - the multiplicity of that word.
    ///
    /// # Returns
    /// The pair if its count grew, else `None`.
    pub fn apply_delta(
        &mut self,
        a: &str,
        b: &str,
        delta: i32,
        word_idx: usize,
        word_count: usize,
    ) -> Option<Pair> {
        if !self.is_countable(a, b) {
            return None;
        }

        let pair: Pair = (Token::from(a), Token::from(b));
        if delta < 0 {
            if let Some(count) = self.pair_counts.get_mut(&pair) {
                *count = count.saturating_sub(word_count);
                if *count == 0 {
                    self.pair_counts.remove(&pair);
                }
            }
            None
        } else {
            *self.pair_counts.entry(pair.clone()).or_default() += word_count;
            self.pair_index
                .entry(pair.clone())
                .or_default()
                .insert(word_idx);
            Some(pair)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(
        a: &str,
        b: &str,
    ) -> Pair {
        (a.into(), b.into())
    }

    fn sorted_counts(counter: &PairCounter) -> Vec<(Pair, usize)> {
        let mut counts: Vec<(Pair, usize)> = counter
            .pair_counts
            .iter()
            .map(|(p, c)| (p.clone(), *c))
            .collect();
        counts.sort();
        counts
    }

    #[test]
    fn test_pair_counts() {
        let words = vec![
            TokenSpanBuf::from_chars("hello "),
            TokenSpanBuf::from_chars("world"),
            TokenSpanBuf::from_chars("help"),
            TokenSpanBuf::from_chars("☃"),
        ];
        let counts = vec![1, 2, 3, 4];

        let counter = PairCounter::from_word_count_table(&words, &counts, false);

        assert_eq!(
            sorted_counts(&counter),
            vec![
                (pair("e", "l"), 4), // 1 h[el]lo, 3 h[el]p
                (pair("h", "e"), 4), // 1 [he]llo, 3 [he]lp
                (pair("l", "d"), 2), // 2 wor[ld]
                (pair("l", "l"), 1), // 1 he[ll]o
                (pair("l", "o"), 1), // 1 hel[lo]
                (pair("l", "p"), 3), // 3 hel[lp]
                (pair("o", "r"), 2), // 2 w[or]ld
                (pair("r", "l"), 2), // 2 wo[rl]d
                (pair("w", "o"), 2), // 2 [wo]rld
            ]
        );

        assert_eq!(
            counter.pair_index.get(&pair("e", "l")),
            Some(&MTHashSet::from_iter([0, 2]))
        );
        assert_eq!(
            counter.pair_index.get(&pair("l", "d")),
            Some(&MTHashSet::from_iter([1]))
        );
        assert_eq!(counter.count(&pair("o", " ")), 0);
    }

    #[test]
    fn test_whitespace_policy() {
        let words = vec![TokenSpanBuf::from_chars("ab  ")];
        let counts = vec![1];

        let counter = PairCounter::from_word_count_table(&words, &counts, false);
        assert_eq!(sorted_counts(&counter), vec![(pair("a", "b"), 1)]);

        let counter = PairCounter::from_word_count_table(&words, &counts, true);
        assert_eq!(
            sorted_counts(&counter),
            vec![
                (pair(" ", " "), 1),
                (pair("a", "b"), 1),
                (pair("b", " "), 1),
            ]
        );
    }

    #[test]
    fn test_apply_delta() {
        let words = vec![TokenSpanBuf::from_chars("abc")];
        let mut counter = PairCounter::from_word_count_table(&words, &[3], false);

        assert_eq!(counter.apply_delta("a", "b", -1, 0, 3), None);
        assert_eq!(counter.count(&pair("a", "b")), 0);

        assert_eq!(
            counter.apply_delta("ab", "c", 1, 0, 3),
            Some(pair("ab", "c"))
        );
        assert_eq!(counter.count(&pair("ab", "c")), 3);
        assert_eq!(
            counter.take_word_indices(&pair("ab", "c")),
            MTHashSet::from_iter([0])
        );
        assert!(counter.take_word_indices(&pair("ab", "c")).is_empty());

        // Whitespace pairs are ignored under the default policy.
        assert_eq!(counter.apply_delta("c", " ", 1, 0, 3), None);
        assert_eq!(counter.count(&pair("c", " ")), 0);
    }
}
