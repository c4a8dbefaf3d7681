//! Generate command implementation.
//!
//! Renders one PNG per seed into the output directory.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use image::RgbaImage;

use crate::error::{BlockiesError, Result};
use crate::generate::generate;
use crate::output::{display_path, plural, Printer};
use crate::render::{paint, write_png};

use super::{load_config, IconArgs};

/// Generate identicon PNGs from seeds
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Seeds to generate icons for (one random seed when omitted)
    pub seeds: Vec<String>,

    #[command(flatten)]
    pub icon: IconArgs,

    /// Output directory [default: icons, or `output` from blockies.yaml]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file [default: ./blockies.yaml when present]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let output = args.output.clone().unwrap_or_else(|| config.output.clone());

    let seeds: Vec<Option<String>> = if args.seeds.is_empty() {
        vec![None]
    } else {
        args.seeds.iter().cloned().map(Some).collect()
    };

    // Render everything before writing anything
    let mut rendered = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let icon = generate(&args.icon.options(seed, &config))?;
        let mut image = RgbaImage::new(0, 0);
        paint(&icon, &mut image)?;
        rendered.push((icon, image));
    }

    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| BlockiesError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let seeds = rendered.iter().map(|(icon, _)| icon.config.seed.as_str());
    let file_names = unique_file_names(seeds);

    for ((icon, image), file_name) in rendered.iter().zip(file_names) {
        let path = output.join(&file_name);
        if file_name != format!("{}.png", file_stem(&icon.config.seed)) {
            printer.warning("Renamed", &format!("{} -> {}", icon.config.seed, file_name));
        }

        let canvas = icon.config.canvas_size()?;
        write_png(image, &path)?;

        printer.status(
            "Generated",
            &format!("{} ({}x{}) -> {}", icon.config.seed, canvas, canvas, display_path(&path)),
        );
    }

    printer.status(
        "Finished",
        &format!("{} in {}", plural(rendered.len(), "icon", "icons"), display_path(&output)),
    );

    Ok(())
}

/// One `.png` name per seed, suffixing `-2`, `-3`, ... where stems collide.
fn unique_file_names<'a>(seeds: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken = HashSet::new();
    seeds
        .into_iter()
        .map(|seed| {
            let stem = file_stem(seed);
            let mut name = format!("{}.png", stem);
            let mut n = 2;
            while !taken.insert(name.clone()) {
                name = format!("{}-{}.png", stem, n);
                n += 1;
            }
            name
        })
        .collect()
}

/// File-system safe stem for a seed.
fn file_stem(seed: &str) -> String {
    let stem: String = seed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    // No hidden files, no `.` or `..`
    if stem.starts_with('.') {
        format!("_{}", stem)
    } else {
        stem
    }
}
