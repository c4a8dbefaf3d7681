pub mod completions;
pub mod generate;
pub mod inspect;

use std::path::Path;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::{BlockiesError, Result};
use crate::generate::IconOptions;

/// blockies - Deterministic blocky identicons
#[derive(Parser, Debug)]
#[command(name = "blockies")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate identicon PNGs from seeds
    Generate(generate::GenerateArgs),

    /// Print the resolved configuration and pattern for a seed
    Inspect(inspect::InspectArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Icon options shared by commands.
#[derive(Args, Debug, Default)]
pub struct IconArgs {
    /// Cells per side
    #[arg(long)]
    pub size: Option<i64>,

    /// Output pixels per cell
    #[arg(long)]
    pub scale: Option<i64>,

    /// Primary colour (generated from the seed when omitted)
    #[arg(long)]
    pub color: Option<String>,

    /// Background colour (generated from the seed when omitted)
    #[arg(long)]
    pub bgcolor: Option<String>,

    /// Spot colour (generated from the seed when omitted)
    #[arg(long)]
    pub spotcolor: Option<String>,
}

impl IconArgs {
    /// Options from the command line, falling back to `config`.
    pub fn options(&self, seed: Option<String>, config: &Config) -> IconOptions {
        IconOptions {
            seed,
            size: self.size,
            scale: self.scale,
            color: self.color.clone(),
            bgcolor: self.bgcolor.clone(),
            spotcolor: self.spotcolor.clone(),
        }
        .or(&config.icon_options())
    }
}

/// Load an explicit config file, or blockies.yaml from the working directory.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let cwd = std::env::current_dir().map_err(|e| BlockiesError::Io {
                path: ".".into(),
                message: format!("Failed to read working directory: {}", e),
            })?;
            Config::discover(&cwd)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::try_parse_from([
            "blockies", "generate", "alice", "bob", "--size", "5", "--color", "red", "-o", "out",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.seeds, vec!["alice", "bob"]);
                assert_eq!(args.icon.size, Some(5));
                assert_eq!(args.icon.color.as_deref(), Some("red"));
                assert_eq!(args.output.as_deref(), Some(Path::new("out")));
            }
            other => panic!("Expected generate, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_negative_size_for_validation() {
        let cli = Cli::try_parse_from(["blockies", "inspect", "abc", "--size=-2"]).unwrap();
        match cli.command {
            Commands::Inspect(args) => assert_eq!(args.icon.size, Some(-2)),
            other => panic!("Expected inspect, got {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::parse("size: 10\nscale: 2\ncolor: blue\n").unwrap();
        let args = IconArgs {
            size: Some(6),
            ..Default::default()
        };

        let options = args.options(Some("seed".to_string()), &config);
        assert_eq!(options.seed.as_deref(), Some("seed"));
        assert_eq!(options.size, Some(6));
        assert_eq!(options.scale, Some(2));
        assert_eq!(options.color.as_deref(), Some("blue"));
    }
}
