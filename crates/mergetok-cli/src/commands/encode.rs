use std::path::PathBuf;

use mergetok::{Tokenizer, io::save_token_ids_path};

use crate::input_output::read_text_path;

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Text file to encode.
    #[arg(long)]
    text: PathBuf,

    /// Model file to encode with.
    #[arg(long)]
    model: PathBuf,

    /// Token-id file to write.
    #[arg(long)]
    tokens: PathBuf,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = Tokenizer::<u32>::load(&self.model)?;
        let text = read_text_path(&self.text)?;

        let ids = tokenizer.encode(&text)?;
        save_token_ids_path(&ids, &self.tokens)?;

        log::info!(
            "Encoded {} characters into {} tokens: {}",
            text.chars().count(),
            ids.len(),
            self.tokens.display()
        );
        Ok(())
    }
}
