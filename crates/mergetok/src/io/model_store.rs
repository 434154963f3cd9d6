//! # Model Store

use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{MTResult, MergetokError},
    io::write_atomic,
    merges::MergeRule,
    model::{TokenizerConfig, TokenizerModel},
    types::{Token, TokenType, concat_tokens},
    vocab::Vocabulary,
};

/// The on-disk model record.
///
/// ```json
/// {
///   "config": {"max_tokens": 1000, "min_freq": 2, "lowercase": false, "merge_whitespace": false},
///   "id_to_token": ["a", "ab", "b"],
///   "merges": [["a", "b", "ab"]]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// The training config.
    pub config: TokenizerConfig,

    /// The vocabulary; list index = id.
    pub id_to_token: Vec<Token>,

    /// The merge history as ``[left, right, merged]`` triples.
    pub merges: Vec<[Token; 3]>,
}

impl<T: TokenType> From<&TokenizerModel<T>> for ModelRecord {
    fn from(model: &TokenizerModel<T>) -> Self {
        Self {
            config: *model.config(),
            id_to_token: model.vocab().tokens().to_vec(),
            merges: model
                .merges()
                .iter()
                .map(|rule| {
                    [
                        rule.left().clone(),
                        rule.right().clone(),
                        rule.merged().clone(),
                    ]
                })
                .collect(),
        }
    }
}

impl ModelRecord {
    /// Validate the record and build a [`TokenizerModel`].
    ///
    /// ## Errors
    /// * [`MergetokError::MalformedModel`] for an empty or duplicated token,
    ///   an empty vocabulary, a merge whose ``merged != left + right``,
    ///   or a merged token missing from the vocabulary.
    /// * [`MergetokError::VocabSizeOverflow`] if the vocabulary does not fit `T`.
    pub fn into_model<T: TokenType>(self) -> MTResult<TokenizerModel<T>> {
        if let Some(id) = self.id_to_token.iter().position(|t| t.is_empty()) {
            return Err(MergetokError::MalformedModel(format!(
                "id_to_token[{id}] is empty"
            )));
        }
        let vocab = Vocabulary::<T>::from_id_to_token(self.id_to_token)?;

        let mut merges = Vec::with_capacity(self.merges.len());
        for (idx, [left, right, merged]) in self.merges.into_iter().enumerate() {
            if left.is_empty() || right.is_empty() {
                return Err(MergetokError::MalformedModel(format!(
                    "merges[{idx}] has an empty side"
                )));
            }
            if concat_tokens(&left, &right) != merged {
                return Err(MergetokError::MalformedModel(format!(
                    "merges[{idx}]: {:?} + {:?} != {:?}",
                    left.as_str(),
                    right.as_str(),
                    merged.as_str()
                )));
            }
            merges.push(MergeRule::new(left, right));
        }

        TokenizerModel::new(self.config, vocab, merges)
    }
}

fn with_path_context(
    path: &Path,
    err: MergetokError,
) -> MergetokError {
    match err {
        MergetokError::Io(source) => MergetokError::file_access(path, source),
        err => err,
    }
}

/// Write a model as pretty-printed JSON.
///
/// ## Arguments
/// * `model` - the model to write.
/// * `writer` - the target stream.
pub fn write_model<T, W>(
    model: &TokenizerModel<T>,
    writer: &mut W,
) -> MTResult<()>
where
    T: TokenType,
    W: Write,
{
    let record = ModelRecord::from(model);
    serde_json::to_writer_pretty(&mut *writer, &record).map_err(std::io::Error::from)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Read a model from a JSON stream.
///
/// ## Arguments
/// * `reader` - the source stream.
///
/// ## Errors
/// See [`ModelRecord::into_model`]; JSON that does not match the record
/// shape is also [`MergetokError::MalformedModel`].
pub fn read_model<T, R>(reader: R) -> MTResult<TokenizerModel<T>>
where
    T: TokenType,
    R: Read,
{
    let record: ModelRecord = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            MergetokError::Io(e.into())
        } else {
            MergetokError::MalformedModel(e.to_string())
        }
    })?;
    record.into_model()
}

/// Save a model to a file, atomically.
///
/// ## Arguments
/// * `model` - the model to save.
/// * `path` - the model file path.
pub fn save_model_path<T, P>(
    model: &TokenizerModel<T>,
    path: P,
) -> MTResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    write_atomic(path, |writer| {
        write_model(model, writer).map_err(|e| with_path_context(path, e))
    })?;
    log::debug!("saved model to {}", path.display());
    Ok(())
}

/// Load a model from a file.
///
/// ## Arguments
/// * `path` - the model file path.
pub fn load_model_path<T, P>(path: P) -> MTResult<TokenizerModel<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MergetokError::file_access(path, e))?;
    let model = read_model(BufReader::new(file)).map_err(|e| with_path_context(path, e))?;
    log::debug!(
        "loaded model from {}: {} tokens, {} merges",
        path.display(),
        model.vocab().len(),
        model.merges().len()
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> TokenizerModel<u32> {
        TokenizerModel::new(
            TokenizerConfig::default().with_lowercase(true),
            Vocabulary::from_sorted_tokens([" ", "a", "b", "é", "ab", "abé"]).unwrap(),
            vec![MergeRule::new("a", "b"), MergeRule::new("ab", "é")],
        )
        .unwrap()
    }

    fn read_str(json: &str) -> MTResult<TokenizerModel<u32>> {
        read_model(json.as_bytes())
    }

    #[test]
    fn test_save_load_model() {
        let model = sample_model();

        tempdir::TempDir::new("model_test")
            .and_then(|dir| {
                let path = dir.path().join("model.enc");

                save_model_path(&model, &path).expect("Failed to save model");
                let loaded: TokenizerModel<u32> =
                    load_model_path(&path).expect("Failed to load model");
                assert_eq!(&loaded, &model);

                // Saving the loaded model reproduces the file.
                let first = std::fs::read_to_string(&path)?;
                save_model_path(&loaded, &path).expect("Failed to save model");
                assert_eq!(std::fs::read_to_string(&path)?, first);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_file_layout() {
        let mut buf = Vec::new();
        write_model(&sample_model(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // Pretty-printed, non-ASCII kept as-is, fields in order.
        assert!(text.contains("\n  \"config\""));
        assert!(text.contains("\"abé\""));
        let config_at = text.find("\"config\"").unwrap();
        let vocab_at = text.find("\"id_to_token\"").unwrap();
        let merges_at = text.find("\"merges\"").unwrap();
        assert!(config_at < vocab_at && vocab_at < merges_at);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value["config"],
            serde_json::json!({
                "max_tokens": 1000,
                "min_freq": 2,
                "lowercase": true,
                "merge_whitespace": false,
            })
        );
        assert_eq!(
            value["id_to_token"],
            serde_json::json!([" ", "a", "ab", "abé", "b", "é"])
        );
        assert_eq!(
            value["merges"],
            serde_json::json!([["a", "b", "ab"], ["ab", "é", "abé"]])
        );
    }

    const CONFIG: &str =
        r#""config": {"max_tokens": 10, "min_freq": 2, "lowercase": false, "merge_whitespace": false}"#;

    #[test]
    fn test_read_valid() {
        let json = format!(r#"{{{CONFIG}, "id_to_token": ["b", "a", "ab"], "merges": [["a", "b", "ab"]]}}"#);
        let model = read_str(&json).unwrap();

        // Persisted id order is kept.
        assert_eq!(model.vocab().id("b"), Some(0));
        assert_eq!(model.vocab().id("ab"), Some(2));
        assert_eq!(model.config().max_tokens, 10);
        assert_eq!(model.merges(), &[MergeRule::new("a", "b")]);
    }

    #[test]
    fn test_read_malformed() {
        let cases = [
            "not json".to_string(),
            r#"{"id_to_token": ["a"], "merges": []}"#.to_string(),
            format!(r#"{{{CONFIG}, "merges": []}}"#),
            format!(r#"{{{CONFIG}, "id_to_token": ["a"]}}"#),
            format!(r#"{{{CONFIG}, "id_to_token": "a", "merges": []}}"#),
            format!(r#"{{{CONFIG}, "id_to_token": [], "merges": []}}"#),
            format!(r#"{{{CONFIG}, "id_to_token": ["a", "a"], "merges": []}}"#),
            format!(r#"{{{CONFIG}, "id_to_token": ["a", ""], "merges": []}}"#),
            format!(r#"{{{CONFIG}, "id_to_token": ["a", "b", "ab"], "merges": [["a", "b"]]}}"#),
            format!(r#"{{{CONFIG}, "id_to_token": ["a", "b", "ab"], "merges": [["a", "b", "ba"]]}}"#),
            format!(r#"{{{CONFIG}, "id_to_token": ["a", "b"], "merges": [["a", "b", "ab"]]}}"#),
            format!(r#"{{{CONFIG}, "id_to_token": ["a", "b"], "merges": [["", "a", "a"]]}}"#),
        ];

        for json in cases {
            assert!(
                matches!(read_str(&json), Err(MergetokError::MalformedModel(_))),
                "expected MalformedModel for {json}"
            );
        }
    }

    #[test]
    fn test_vocab_overflow() {
        let tokens: Vec<String> = (0..300).map(|i| format!("t{i}")).collect();
        let json = format!(
            r#"{{{CONFIG}, "id_to_token": {}, "merges": []}}"#,
            serde_json::to_string(&tokens).unwrap()
        );

        assert!(matches!(
            read_model::<u8, _>(json.as_bytes()),
            Err(MergetokError::VocabSizeOverflow { size: 300 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir::TempDir::new("model_missing").unwrap();
        let path = dir.path().join("absent.enc");

        match load_model_path::<u32, _>(&path) {
            Err(MergetokError::FileAccess { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
