use std::path::PathBuf;

use mergetok::{
    Tokenizer,
    TokenizerConfig,
    io::save_token_ids_path,
    model::{DEFAULT_MAX_TOKENS, DEFAULT_MIN_FREQ},
};

use crate::input_output::read_text_path;

/// Args for the learn command.
#[derive(clap::Args, Debug)]
pub struct LearnArgs {
    /// Training text file.
    #[arg(long)]
    text: PathBuf,

    /// Model file to write.
    #[arg(long)]
    model: PathBuf,

    /// Also encode the training text into this token-id file.
    #[arg(long)]
    tokens: Option<PathBuf>,

    /// Max vocab size.
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: usize,

    /// Minimum pair frequency for a merge.
    #[arg(long, default_value_t = DEFAULT_MIN_FREQ)]
    min_freq: usize,

    /// Lowercase text before learning and encoding.
    #[arg(long)]
    lowercase: bool,

    /// Allow merges with whitespace tokens.
    #[arg(long)]
    merge_whitespace: bool,
}

impl LearnArgs {
    fn config(&self) -> TokenizerConfig {
        TokenizerConfig::default()
            .with_max_tokens(self.max_tokens)
            .with_min_freq(self.min_freq)
            .with_lowercase(self.lowercase)
            .with_merge_whitespace(self.merge_whitespace)
    }

    /// Run the learn command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let text = read_text_path(&self.text)?;
        log::info!(
            "Learning from {} ({} characters)",
            self.text.display(),
            text.chars().count()
        );

        let mut tokenizer = Tokenizer::<u32>::new(self.config());
        let stop_reason = tokenizer.fit(&text)?;

        let ids = match &self.tokens {
            Some(_) => Some(tokenizer.encode(&text)?),
            None => None,
        };

        // Tokens first; a failed model write then takes them back out.
        if let (Some(path), Some(ids)) = (&self.tokens, &ids) {
            save_token_ids_path(ids, path)?;
        }
        if let Err(err) = tokenizer.save(&self.model) {
            if let Some(path) = &self.tokens {
                if let Err(rm_err) = std::fs::remove_file(path) {
                    log::warn!("failed to remove {}: {rm_err}", path.display());
                }
            }
            return Err(err.into());
        }

        if let Some(model) = tokenizer.model() {
            log::info!(
                "Vocabulary Size: {}, merges: {} (stopped: {:?})",
                model.vocab().len(),
                model.merges().len(),
                stop_reason
            );
        }
        log::info!("model: {}", self.model.display());
        if let (Some(path), Some(ids)) = (&self.tokens, &ids) {
            log::info!("tokens: {} ({} ids)", path.display(), ids.len());
        }

        Ok(())
    }
}
