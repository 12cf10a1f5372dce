//! favmerge command line interface
//!
//! Thin glue around [`favmerge_core`]: argument parsing, layered
//! configuration, logging and presentation of the discovered groups.

pub mod args;
pub mod config;
pub mod error;
pub mod output;
pub mod settings;
pub mod terminal;

use std::io::Write;

use favmerge_core::collect;

use crate::error::{CliError, CliResult};
use crate::output::create_formatter;
use crate::settings::RunSettings;

/// Discover and group sidecar files, then report them to `out`
///
/// Merging and writing the grouped files is handled by a later stage; this
/// only reports what that stage would receive.
pub fn run<W: Write>(settings: &RunSettings, out: &mut W) -> CliResult<()> {
    log::debug!("Paths: {:?}", settings.paths);
    log::debug!("Recursive: {}", settings.recursive);
    log::debug!("Exclude root: {}", settings.exclude_root);
    log::debug!("Output folder: {}", settings.output.display());
    log::debug!(
        "Force: {}, prompt: {}, dry run: {}",
        settings.force,
        settings.prompt,
        settings.dry_run
    );

    let groups = collect(&settings.paths, settings.recursive, settings.exclude_root)?;

    let formatter = create_formatter(settings.format, settings.use_color);
    let rendered = formatter
        .format(&groups, settings)
        .map_err(|e| CliError::general(&format!("Failed to format results: {e}")))?;

    out.write_all(rendered.as_bytes())
        .map_err(|e| CliError::from_io_error(e, "<stdout>"))?;
    Ok(())
}
