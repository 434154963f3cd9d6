mod commands;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;
use logging::LogArgs;

/// Learn, encode, and decode with a character-pair BPE tokenizer.
#[derive(clap::Parser, Debug)]
#[command(name = "mergetok", version, about)]
pub struct Args {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(3)?;

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_global_flags() {
        let args = Args::try_parse_from([
            "mergetok", "-q", "encode", "--text", "a.txt", "--model", "a.enc", "--tokens",
            "a.tok", "-vv",
        ])
        .unwrap();

        assert!(args.logging.quiet);
        assert!(matches!(args.command, Commands::Encode(_)));
    }

    #[test]
    fn test_missing_required() {
        assert!(Args::try_parse_from(["mergetok", "decode", "--tokens", "a.tok"]).is_err());
        assert!(Args::try_parse_from(["mergetok"]).is_err());
    }
}
