//! Command line arguments
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use progrock::{RenderOptions, RenderOptionsBuilder};

use crate::level::PrintLevel;

/// Display a progress bar that counts up to a total
#[derive(Debug, Clone, PartialEq, Parser)]
#[clap(name = "progrock", version)]
pub struct Cli {
    /// Total steps of the bar
    #[clap(short, long, default_value_t = 50)]
    pub total: i64,
    /// Steps to advance on each tick. Non-positive values print the bar once
    #[clap(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub step: i64,
    /// Milliseconds to wait between ticks
    #[clap(short, long, default_value_t = 100)]
    pub interval_ms: u64,
    /// Do not mark the bar as done at the end, leaving the line open
    #[clap(long)]
    pub no_done: bool,

    /// TOML file with render options (length, format, complete, incomplete)
    #[clap(short, long)]
    pub config: Option<PathBuf>,
    /// Length of the bar. Overrides the config file
    #[clap(short, long, allow_negative_numbers = true)]
    pub length: Option<i64>,
    /// Format template, with tokens :bar :progress :total :percent :elapsed :remaining.
    /// Overrides the config file
    #[clap(short, long)]
    pub format: Option<String>,
    /// Character for completed chunks. Overrides the config file
    #[clap(long)]
    pub complete: Option<char>,
    /// Character for incomplete chunks. Overrides the config file
    #[clap(long)]
    pub incomplete: Option<char>,

    /// Verbose. More -v makes it more verbose (opposite of --quiet)
    #[clap(short = 'v', long, action(clap::ArgAction::Count))]
    pub verbose: u8,
    /// Quiet. More -q makes it more quiet (opposite of --verbose)
    #[clap(short = 'q', long, action(clap::ArgAction::Count))]
    pub quiet: u8,
}

impl Cli {
    /// The print level from `-v` and `-q`
    pub fn print_level(&self) -> PrintLevel {
        PrintLevel::from_counts(self.verbose, self.quiet)
    }

    /// Render options from the flags only
    pub fn options_from_flags(&self) -> RenderOptionsBuilder {
        let mut builder = RenderOptions::builder();
        if let Some(length) = self.length {
            builder = builder.length(length);
        }
        if let Some(format) = &self.format {
            builder = builder.format(format.clone());
        }
        if let Some(complete) = self.complete {
            builder = builder.complete(complete);
        }
        if let Some(incomplete) = self.incomplete {
            builder = builder.incomplete(incomplete);
        }
        builder
    }

    /// Resolve the render options: flags override the config file,
    /// and anything left unset is the default
    pub fn render_options(&self) -> anyhow::Result<RenderOptions> {
        let file = match &self.config {
            Some(path) => load_config(path)?,
            None => RenderOptions::builder(),
        };
        Ok(file.merge(self.options_from_flags()).build())
    }
}

/// Load render options from a TOML file
pub fn load_config(path: &Path) -> anyhow::Result<RenderOptionsBuilder> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    parse_config(&content).with_context(|| format!("failed to parse config file '{}'", path.display()))
}

/// Parse render options from TOML
pub fn parse_config(content: &str) -> anyhow::Result<RenderOptionsBuilder> {
    let builder = toml::from_str(content)?;
    Ok(builder)
}
