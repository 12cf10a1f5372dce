//! Effective settings for one run
//!
//! Flags given on the command line win over configuration values, which win
//! over built-in defaults.

use std::path::PathBuf;

use crate::args::Cli;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// Fully resolved settings handed to [`crate::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub paths: Vec<PathBuf>,
    pub output: PathBuf,
    pub recursive: bool,
    pub exclude_root: bool,
    pub force: bool,
    pub prompt: bool,
    pub dry_run: bool,
    pub format: OutputFormat,
    pub use_color: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from(".")],
            output: PathBuf::from("."),
            recursive: false,
            exclude_root: false,
            force: false,
            prompt: true,
            dry_run: false,
            format: OutputFormat::Text,
            use_color: false,
        }
    }
}

impl RunSettings {
    /// Merge command line flags over the loaded configuration
    pub fn resolve(cli: &Cli, config: &AppConfig, use_color: bool) -> CliResult<Self> {
        let exclude_root = if cli.exclude_root {
            true
        } else if cli.include_root {
            false
        } else {
            config.discovery.exclude_root
        };

        let recursive = if cli.no_recursive {
            false
        } else {
            cli.recursive || config.discovery.recursive
        };

        let format = match cli.format {
            Some(arg) => OutputFormat::from(arg),
            None => OutputFormat::from_string(&config.output.default_format)?,
        };

        if cli.output.exists() && !cli.output.is_dir() {
            return Err(CliError::misuse(&format!(
                "Output path is not a directory: {}",
                cli.output.display()
            )));
        }

        Ok(Self {
            paths: cli.paths.clone(),
            output: cli.output.clone(),
            recursive,
            exclude_root,
            force: cli.force,
            prompt: !cli.no_prompt,
            dry_run: cli.dry_run,
            format,
            use_color,
        })
    }
}
