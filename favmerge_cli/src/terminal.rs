//! Terminal detection and capability utilities

use is_terminal::IsTerminal;
use std::env;
use std::io::{stderr, stdout};

/// Check if stdout is connected to an interactive terminal
pub fn is_interactive() -> bool {
    if !stdout().is_terminal() {
        return false;
    }

    // CI runners may allocate a TTY but nobody is watching
    !is_ci_environment()
}

/// Check if the terminal supports ANSI escape codes for colors
pub fn supports_ansi() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    let term = env::var("TERM").unwrap_or_default();
    if term == "dumb" {
        return false;
    }

    // Windows Terminal, ConEmu and Windows 10+ consoles all handle ANSI
    #[cfg(windows)]
    {
        true
    }

    #[cfg(not(windows))]
    {
        !term.is_empty()
    }
}

/// Check if stderr is connected to a terminal (errors are coloured there)
pub fn stderr_is_terminal() -> bool {
    stderr().is_terminal()
}

/// Detect if running in a CI environment
fn is_ci_environment() -> bool {
    let ci_vars = [
        "CI",
        "CONTINUOUS_INTEGRATION",
        "JENKINS_URL",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "BUILDKITE",
        "TF_BUILD", // Azure DevOps
    ];

    ci_vars.iter().any(|var| env::var(var).is_ok())
}

/// Decide whether to colour output given the configured preference
pub fn should_use_color(color_enabled: bool) -> bool {
    color_enabled && is_interactive() && supports_ansi()
}

/// Same decision for diagnostics written to stderr
pub fn should_use_color_on_stderr(color_enabled: bool) -> bool {
    color_enabled && stderr_is_terminal() && supports_ansi()
}
