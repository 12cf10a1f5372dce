//! Command line arguments

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "favmerge")]
#[command(author, version, about = "Find Ableton favorites XMP files and group them for merging", long_about = None)]
pub struct Cli {
    /// Paths to search for XMP files. Can be folders or files.
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Output folder to write to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Search recursively in the given paths
    #[arg(short, long, conflicts_with = "no_recursive")]
    pub recursive: bool,

    /// Only look at files directly inside the given folders, even if the config enables recursion
    #[arg(long)]
    pub no_recursive: bool,

    /// Overwrite the output files if they already exist
    #[arg(short, long)]
    pub force: bool,

    /// Prompt to continue after warning without --force (default)
    #[arg(long, conflicts_with = "no_prompt")]
    pub prompt: bool,

    /// Fail after warning without --force
    #[arg(long)]
    pub no_prompt: bool,

    /// Keep XMP files directly inside the given folders (default)
    #[arg(long, conflicts_with = "exclude_root")]
    pub include_root: bool,

    /// Skip XMP files directly inside the given folders, keeping only nested ones
    #[arg(long)]
    pub exclude_root: bool,

    /// Show what would be merged without writing anything
    #[arg(short = 'n', long = "dry-run", visible_alias = "noop")]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["favmerge"]).unwrap();

        assert_eq!(cli.paths, vec![PathBuf::from(".")]);
        assert_eq!(cli.output, PathBuf::from("."));
        assert!(!cli.recursive && !cli.no_recursive);
        assert!(!cli.force);
        assert!(!cli.prompt && !cli.no_prompt);
        assert!(!cli.include_root && !cli.exclude_root);
        assert!(!cli.dry_run);
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "favmerge",
            "one",
            "two/file.xmp",
            "-o",
            "out",
            "-r",
            "-f",
            "--no-prompt",
            "--exclude-root",
            "-n",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(
            cli.paths,
            vec![PathBuf::from("one"), PathBuf::from("two/file.xmp")]
        );
        assert_eq!(cli.output, PathBuf::from("out"));
        assert!(cli.recursive && cli.force && cli.no_prompt && cli.exclude_root && cli.dry_run);
        assert_eq!(cli.format, Some(FormatArg::Json));
    }

    #[test]
    fn test_noop_alias() {
        let cli = Cli::try_parse_from(["favmerge", "--noop"]).unwrap();
        assert!(cli.dry_run);
    }

    #[test]
    fn test_prompt_flags_are_exclusive() {
        let result = Cli::try_parse_from(["favmerge", "--prompt", "--no-prompt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_root_flags_are_exclusive() {
        let result = Cli::try_parse_from(["favmerge", "--include-root", "--exclude-root"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_recursion_flags_are_exclusive() {
        let result = Cli::try_parse_from(["favmerge", "-r", "--no-recursive"]);
        assert!(result.is_err());
    }
}
