mod decode;
mod encode;
mod learn;

/// Subcommands for mergetok.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Learn a vocabulary from a text file and write a model file.
    Learn(learn::LearnArgs),

    /// Encode a text file into a token-id file.
    Encode(encode::EncodeArgs),

    /// Decode a token-id file into a text file.
    Decode(decode::DecodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Learn(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
        }
    }
}
