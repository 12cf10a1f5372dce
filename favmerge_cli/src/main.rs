use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io::Write;

use favmerge_cli::args::Cli;
use favmerge_cli::config::ConfigManager;
use favmerge_cli::settings::RunSettings;
use favmerge_cli::terminal;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("favmerge_core", log::LevelFilter::Debug)
            .filter_module("favmerge_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    let config_manager = ConfigManager::new();
    log::debug!(
        "Loading configuration from {}",
        config_manager.get_config_path().display()
    );

    if cli.print_config {
        let mut stdout = std::io::stdout().lock();
        for (key, value) in config_manager.list()? {
            writeln!(stdout, "{key} = {value}")?;
        }
        return Ok(());
    }

    let config = config_manager
        .load()
        .context("Failed to load configuration")?;

    let use_color = terminal::should_use_color(config.output.color_enabled);
    colored::control::set_override(
        use_color || terminal::should_use_color_on_stderr(config.output.color_enabled),
    );

    let outcome = RunSettings::resolve(&cli, &config, use_color)
        .and_then(|settings| favmerge_cli::run(&settings, &mut std::io::stdout().lock()));

    if let Err(error) = outcome {
        log::debug!("Run failed: {error}");
        eprint!("{}", error.format_for_user(cli.debug));
        std::process::exit(error.exit_code() as i32);
    }

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
