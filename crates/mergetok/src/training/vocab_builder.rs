//! # Vocabulary Builder

use crate::{
    errors::{MTResult, MergetokError},
    merges::MergeRule,
    model::{TokenizerConfig, TokenizerModel},
    training::utility::{MergeSelector, PairCounter, TextSpanCounter},
    types::{MTHashSet, Pair, Token, TokenType},
    vocab::Vocabulary,
};

/// Why the merge loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// No countable pairs remain.
    Exhausted,

    /// The best pair's frequency is below ``min_freq``.
    BelowThreshold,

    /// The next merge would make the vocabulary size reach ``max_tokens``.
    AtCapacity,
}

/// Vocabulary training results.
#[derive(Debug, Clone)]
pub struct TrainResults<T: TokenType> {
    /// The trained model.
    pub model: TokenizerModel<T>,

    /// ``merge_counts[i]`` is the frequency of ``model.merges()[i]`` when it was selected.
    pub merge_counts: Vec<usize>,

    /// Why training stopped.
    pub stop_reason: StopReason,
}

/// Learns a [`TokenizerModel`] from text.
///
/// ```
/// use mergetok::{TokenizerConfig, training::{StopReason, VocabularyBuilder}};
///
/// let config = TokenizerConfig::default().with_max_tokens(10);
///
/// let mut builder = VocabularyBuilder::new(config);
/// builder.update_from_text("abab");
///
/// let results = builder.train::<u32>().unwrap();
/// assert_eq!(results.model.vocab().tokens(), &["a", "ab", "b"]);
/// assert_eq!(results.merge_counts, vec![2]);
/// assert_eq!(results.stop_reason, StopReason::BelowThreshold);
/// ```
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    /// Training config.
    pub config: TokenizerConfig,

    /// The corpus word counts.
    pub span_counter: TextSpanCounter,
}

impl VocabularyBuilder {
    /// Create a builder with an empty corpus.
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            config,
            span_counter: TextSpanCounter::new(config),
        }
    }

    /// Add text to the corpus.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        self.span_counter.update_from_text(text);
    }

    /// Add a sequence of documents to the corpus.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.span_counter.update_from_samples(samples);
    }

    /// Run the merge loop and finalize the vocabulary.
    ///
    /// ## Errors
    /// * [`MergetokError::EmptyInput`] if the corpus has no words.
    /// * [`MergetokError::VocabSizeTooSmall`] if the base alphabet exceeds ``max_tokens``.
    /// * [`MergetokError::VocabSizeOverflow`] if the vocabulary does not fit `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train<T: TokenType>(self) -> MTResult<TrainResults<T>> {
        let config = self.config;

        if !self.span_counter.has_words() {
            return Err(MergetokError::EmptyInput);
        }

        let mut working_vocab: MTHashSet<Token> = self.span_counter.alphabet();
        if working_vocab.len() > config.max_tokens {
            return Err(MergetokError::VocabSizeTooSmall {
                size: config.max_tokens,
                alphabet: working_vocab.len(),
            });
        }

        let (mut words, word_counts) = self.span_counter.to_text_span_counts();

        let budget = config.max_tokens.saturating_sub(working_vocab.len() + 1);
        log::info!(
            "Starting BPE training: {} unique words, {} base characters, up to {} merges",
            words.len(),
            working_vocab.len(),
            budget
        );

        let mut counter =
            PairCounter::from_word_count_table(&words, &word_counts, config.merge_whitespace);
        let mut selector = MergeSelector::from_counter(&counter);

        let mut merges: Vec<MergeRule> = Vec::new();
        let mut merge_counts: Vec<usize> = Vec::new();
        let mut last_log_percent = 0;

        let stop_reason = loop {
            let Some(job) = selector.pop_best(&counter) else {
                break StopReason::Exhausted;
            };

            if job.count < config.min_freq {
                break StopReason::BelowThreshold;
            }

            let rule = MergeRule::from_pair(job.pair.clone());
            if !working_vocab.contains(rule.merged())
                && working_vocab.len() + 1 >= config.max_tokens
            {
                break StopReason::AtCapacity;
            }

            let mut grown: MTHashSet<Pair> = MTHashSet::default();
            for word_idx in counter.take_word_indices(&job.pair) {
                let word_count = word_counts[word_idx];
                words[word_idx].merge_pair_cb(rule.left(), rule.right(), &mut |a, b, delta| {
                    if let Some(pair) = counter.apply_delta(a, b, delta, word_idx, word_count) {
                        grown.insert(pair);
                    }
                });
            }

            // Every pair whose count grew gets a fresh job at its new count.
            for pair in grown {
                selector.push(pair, &counter);
            }

            log::debug!(
                "merge {}: {:?} + {:?} -> {:?} (frequency: {})",
                merges.len(),
                rule.left().as_str(),
                rule.right().as_str(),
                rule.merged().as_str(),
                job.count
            );

            working_vocab.insert(rule.merged().clone());
            merges.push(rule);
            merge_counts.push(job.count);

            // Log progress every 1%
            if budget > 0 {
                let current_percent = (merges.len() * 100) / budget;
                if current_percent > last_log_percent {
                    log::info!(
                        "Progress: {}% ({}/{} merges) - frequency: {}",
                        current_percent,
                        merges.len(),
                        budget,
                        job.count
                    );
                    last_log_percent = current_percent;
                }
            }
        };

        log::info!(
            "Finished training: {} merges, {} tokens, stopped: {:?}",
            merges.len(),
            working_vocab.len(),
            stop_reason
        );

        let vocab: Vocabulary<T> = Vocabulary::from_sorted_tokens(working_vocab)?;
        let model = TokenizerModel::new(config, vocab, merges)?;

        Ok(TrainResults {
            model,
            merge_counts,
            stop_reason,
        })
    }
}
