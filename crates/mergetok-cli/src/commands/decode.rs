use std::path::PathBuf;

use mergetok::{Tokenizer, io::load_token_ids_path};

use crate::input_output::write_text_path;

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// Token-id file to decode.
    #[arg(long)]
    tokens: PathBuf,

    /// Model file to decode with.
    #[arg(long)]
    model: PathBuf,

    /// Text file to write.
    #[arg(long)]
    text: PathBuf,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = Tokenizer::<u32>::load(&self.model)?;
        let ids = load_token_ids_path::<u32, _>(&self.tokens)?;

        let text = tokenizer.decode(&ids)?;
        write_text_path(&self.text, &text)?;

        log::info!(
            "Decoded {} tokens into {} characters: {}",
            ids.len(),
            text.chars().count(),
            self.text.display()
        );
        Ok(())
    }
}
