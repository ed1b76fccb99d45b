use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tokcount")]
#[command(about = "Count GPT tokens and estimate LLM costs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "TOKCOUNT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tokenize text once and print counts and cost
    Count {
        /// Text to tokenize (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read text from a file
        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Model used for pricing
        #[arg(long, short)]
        model: Option<String>,

        /// Print the colorized token breakdown
        #[arg(long)]
        tokens: bool,

        /// Print the full breakdown as JSON
        #[arg(long, conflicts_with = "tokens")]
        json: bool,
    },

    /// List models and their price per 1K tokens
    Models,

    /// Interactive terminal UI
    Ui {
        /// Initial model
        #[arg(long, short)]
        model: Option<String>,
    },

    /// Serve the web UI
    Web {
        #[arg(long)]
        port: Option<u16>,

        #[arg(long)]
        host: Option<String>,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_count() {
        let cli = Cli::parse_from(["tokcount", "count", "hello", "--model", "gpt-4", "--tokens"]);
        match cli.command {
            Commands::Count {
                text,
                model,
                tokens,
                json,
                file,
            } => {
                assert_eq!(text.as_deref(), Some("hello"));
                assert_eq!(model.as_deref(), Some("gpt-4"));
                assert!(tokens);
                assert!(!json);
                assert!(file.is_none());
            }
            _ => panic!("expected count"),
        }
    }

    #[test]
    fn test_json_conflicts_with_tokens() {
        assert!(Cli::try_parse_from(["tokcount", "count", "x", "--json", "--tokens"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["tokcount", "models", "--config", "/tmp/c.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }
}
