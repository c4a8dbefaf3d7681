//! Inspect command implementation.
//!
//! Prints the resolved configuration and pattern for a seed on stdout.

use std::path::PathBuf;

use clap::Args;

use crate::error::{BlockiesError, Result};
use crate::generate::generate;

use super::{load_config, IconArgs};

/// Print the resolved configuration and pattern for a seed
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Seed to inspect (random when omitted)
    pub seed: Option<String>,

    #[command(flatten)]
    pub icon: IconArgs,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Config file [default: ./blockies.yaml when present]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let icon = generate(&args.icon.options(args.seed.clone(), &config))?;

    let text = if args.json {
        serde_json::to_string_pretty(&icon).map_err(|e| BlockiesError::Render {
            message: format!("Failed to serialize icon: {}", e),
            help: None,
        })?
    } else {
        icon.to_string()
    };

    println!("{}", text);
    Ok(())
}
