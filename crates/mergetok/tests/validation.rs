#![allow(missing_docs)]
#![cfg(feature = "training")]

use std::sync::Arc;

use mergetok::{
    MergeRule,
    MergetokError,
    TokenDecoder,
    TokenEncoder,
    Tokenizer,
    TokenizerConfig,
    TokenizerModel,
    Vocabulary,
    io::{read_model, write_model},
    training::{StopReason, VocabularyBuilder},
};

const CORPUS: &str = "The quick brown fox jumps over the lazy dog.
It's a beautiful day, and I'll be taking my 3 dogs for a walk.
Don't forget: the temperature is 72 degrees!
  multiple   spaces  
\t\ttabs\tand\tspaces 
caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}
the dog and the fox and the other dog walked over the quick brown hill.
";

const SAMPLES: &[&str] = &[
    "hello world",
    "the lazy dog",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "caf\u{00e9} \u{4f60}\u{597d}",
    " ",
    "a",
    "",
];

fn fit(config: TokenizerConfig) -> Tokenizer<u32> {
    let mut tokenizer = Tokenizer::new(config);
    tokenizer.fit(CORPUS).unwrap();
    tokenizer
}

/// Keep only the characters the tokenizer has seen.
fn over_alphabet(
    tokenizer: &Tokenizer<u32>,
    text: &str,
) -> String {
    let vocab = tokenizer.model().unwrap().vocab();
    text.chars()
        .filter(|c| vocab.contains(c.encode_utf8(&mut [0; 4])))
        .collect()
}

#[test]
fn abab_scenario() {
    let mut tokenizer = Tokenizer::<u32>::new(
        TokenizerConfig::default()
            .with_max_tokens(10)
            .with_min_freq(2),
    );
    tokenizer.fit("abab").unwrap();

    let model = tokenizer.model().unwrap();
    assert_eq!(model.merges(), &[MergeRule::new("a", "b")]);
    let ids: Vec<(u32, &str)> = model.vocab().iter().map(|(id, t)| (id, t.as_str())).collect();
    assert_eq!(ids, vec![(0, "a"), (1, "ab"), (2, "b")]);

    assert_eq!(tokenizer.encode("abab").unwrap(), vec![1, 1]);
    assert_eq!(tokenizer.decode(&[1, 1]).unwrap(), "abab");
}

#[test]
fn capacity_stops_before_reaching_max_tokens() {
    let mut tokenizer = Tokenizer::<u32>::new(TokenizerConfig::default().with_max_tokens(5));
    tokenizer.fit("abc abc abc").unwrap();

    let model = tokenizer.model().unwrap();
    assert!(model.merges().is_empty());
    assert_eq!(model.vocab().tokens(), &[" ", "a", "b", "c"]);

    let mut tokenizer = Tokenizer::<u32>::new(TokenizerConfig::default().with_max_tokens(6));
    tokenizer.fit("abc abc abc").unwrap();

    let model = tokenizer.model().unwrap();
    assert_eq!(model.merges(), &[MergeRule::new("a", "b")]);
    assert_eq!(model.vocab().tokens(), &[" ", "a", "ab", "b", "c"]);
}

#[test]
fn threshold_never_met() {
    let mut builder = VocabularyBuilder::new(TokenizerConfig::default());
    builder.update_from_text("abcdef");
    let results = builder.train::<u32>().unwrap();

    assert!(results.model.merges().is_empty());
    assert_eq!(results.model.vocab().tokens(), &["a", "b", "c", "d", "e", "f"]);
    assert_eq!(results.stop_reason, StopReason::BelowThreshold);
}

#[test]
fn deterministic_training() {
    let config = TokenizerConfig::default().with_max_tokens(120);
    let a = fit(config);
    let b = fit(config);

    assert_eq!(a.model(), b.model());
}

#[test]
fn vocab_bound_and_frequency_floor() {
    for max_tokens in [60, 70, 90, 200] {
        for min_freq in [1, 2, 5] {
            let config = TokenizerConfig::default()
                .with_max_tokens(max_tokens)
                .with_min_freq(min_freq);

            let mut builder = VocabularyBuilder::new(config);
            builder.update_from_text(CORPUS);
            let results = builder.train::<u32>().unwrap();

            assert!(results.model.vocab().len() <= max_tokens);
            assert!(results.merge_counts.iter().all(|&c| c >= min_freq));
            assert_eq!(results.merge_counts.len(), results.model.merges().len());

            assert!(results.model.vocab().len() < max_tokens);
            if results.stop_reason == StopReason::AtCapacity {
                assert_eq!(results.model.vocab().len() + 1, max_tokens);
            }
        }
    }
}

#[test]
fn round_trip_samples() {
    for config in [
        TokenizerConfig::default(),
        TokenizerConfig::default().with_merge_whitespace(true),
        TokenizerConfig::default().with_max_tokens(70),
    ] {
        let tokenizer = fit(config);

        for sample in SAMPLES {
            let text = over_alphabet(&tokenizer, sample);
            let ids = tokenizer.encode(&text).unwrap();
            assert_eq!(
                tokenizer.decode(&ids).unwrap(),
                text,
                "Roundtrip mismatch for {config:?}: {sample:?}"
            );
        }

        let ids = tokenizer.encode(CORPUS).unwrap();
        assert!(ids.len() < CORPUS.chars().count());
        assert_eq!(tokenizer.decode(&ids).unwrap(), CORPUS);
    }
}

#[test]
fn round_trip_lowercase() {
    let tokenizer = fit(TokenizerConfig::default().with_lowercase(true));

    let ids = tokenizer.encode("THE LAZY DOG").unwrap();
    assert_eq!(tokenizer.decode(&ids).unwrap(), "the lazy dog");
}

#[test]
fn unknown_characters_are_dropped() {
    let tokenizer = fit(TokenizerConfig::default());

    let ids = tokenizer.encode("dog\u{1f600}dog").unwrap();
    assert_eq!(tokenizer.decode(&ids).unwrap(), "dogdog");
}

#[test]
fn merge_order_sensitivity() {
    let vocab = || Vocabulary::<u32>::from_sorted_tokens(["a", "b", "c", "ab", "bc"]).unwrap();
    let forward = Tokenizer::from_model(
        TokenizerModel::new(
            TokenizerConfig::default(),
            vocab(),
            vec![MergeRule::new("a", "b"), MergeRule::new("b", "c")],
        )
        .unwrap(),
    );
    let reversed = Tokenizer::from_model(
        TokenizerModel::new(
            TokenizerConfig::default(),
            vocab(),
            vec![MergeRule::new("b", "c"), MergeRule::new("a", "b")],
        )
        .unwrap(),
    );

    let fwd = forward.encode("abc").unwrap();
    let rev = reversed.encode("abc").unwrap();
    assert_ne!(fwd, rev);
    assert_eq!(forward.decode(&fwd).unwrap(), "abc");
    assert_eq!(reversed.decode(&rev).unwrap(), "abc");
}

#[test]
fn persistence_is_idempotent() {
    let tokenizer = fit(TokenizerConfig::default().with_max_tokens(150));
    let model = tokenizer.model().unwrap();

    let mut first = Vec::new();
    write_model(model.as_ref(), &mut first).unwrap();
    let loaded: TokenizerModel<u32> = read_model(first.as_slice()).unwrap();
    assert_eq!(&loaded, model.as_ref());

    let mut second = Vec::new();
    write_model(&loaded, &mut second).unwrap();
    assert_eq!(first, second);

    let reloaded = Tokenizer::from_model(loaded);
    for sample in SAMPLES {
        assert_eq!(
            reloaded.encode(sample).unwrap(),
            tokenizer.encode(sample).unwrap()
        );
    }
    assert_eq!(
        reloaded.decode(&[0, 5, 9, 100_000]).unwrap(),
        tokenizer.decode(&[0, 5, 9, 100_000]).unwrap()
    );
}

#[test]
fn consumer_traits() {
    fn encode_all<E: TokenEncoder<u32>>(
        encoder: &E,
        batch: &[&str],
    ) -> Vec<Vec<u32>> {
        encoder.try_encode_batch(batch).unwrap()
    }

    fn decode_all<D: TokenDecoder<u32>>(
        decoder: &D,
        batch: &[Vec<u32>],
    ) -> Vec<String> {
        let refs: Vec<&[u32]> = batch.iter().map(|v| v.as_slice()).collect();
        decoder.try_decode_batch_to_strings(&refs).unwrap()
    }

    let tokenizer = Arc::new(fit(TokenizerConfig::default()));
    let batch = ["the dog", "the fox"];

    let encoded = encode_all(tokenizer.as_ref(), &batch);
    assert_eq!(decode_all(tokenizer.as_ref(), &encoded), batch);

    #[cfg(feature = "rayon")]
    {
        use mergetok::{
            decoders::VocabDecoder,
            encoders::MergeReplayEncoder,
            rayon::{ParallelRayonDecoder, ParallelRayonEncoder},
        };

        let model = tokenizer.model().unwrap().clone();
        let encoder = ParallelRayonEncoder::new(MergeReplayEncoder::new(model.clone()));
        let decoder = ParallelRayonDecoder::new(VocabDecoder::new(model));

        assert_eq!(encode_all(&encoder, &batch), encoded);
        assert_eq!(decode_all(&decoder, &encoded), batch);
    }
}

#[test]
fn training_errors() {
    let mut tokenizer = Tokenizer::<u32>::default();
    assert!(matches!(tokenizer.fit(""), Err(MergetokError::EmptyInput)));
    assert!(matches!(
        tokenizer.fit(" \t\n "),
        Err(MergetokError::EmptyInput)
    ));
    assert!(!tokenizer.is_trained());

    let mut tokenizer = Tokenizer::<u32>::new(TokenizerConfig::default().with_max_tokens(3));
    assert!(matches!(
        tokenizer.fit("abcd"),
        Err(MergetokError::VocabSizeTooSmall { size: 3, alphabet: 4 })
    ));

    let mut tokenizer = Tokenizer::<u8>::new(TokenizerConfig::default().with_max_tokens(400));
    let wide: String = (0..300u32)
        .filter_map(|i| char::from_u32(0x4e00 + i))
        .collect();
    assert!(matches!(
        tokenizer.fit(&wide),
        Err(MergetokError::VocabSizeOverflow { size: 300 })
    ));
}
