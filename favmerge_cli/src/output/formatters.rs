use super::OutputFormatter;
use crate::settings::RunSettings;
use anyhow::Result;
use colored::*;
use favmerge_core::FileGroups;
use serde_json::json;

/// Text formatter for human-readable output
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn colorize(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, groups: &FileGroups, settings: &RunSettings) -> Result<String> {
        let mut output = String::new();

        for group in groups {
            let name = self.colorize(&group.display_name(), |s| s.bold());
            if group.needs_merge() {
                let note = self.colorize(&format!("{} sources, merge", group.len()), |s| s.yellow());
                output.push_str(&format!("{name} ({note})\n"));
            } else {
                output.push_str(&format!("{name}\n"));
            }

            for path in &group.paths {
                output.push_str(&format!("  {}\n", path.display()));
            }
        }

        let merged = groups.iter().filter(|g| g.needs_merge()).count();
        output.push_str(&format!(
            "\nFound {} file(s) in {} group(s); {} group(s) need merging.\n",
            groups.file_count(),
            groups.len(),
            merged
        ));

        let mode = if settings.dry_run {
            self.colorize("dry run, nothing will be written", |s| s.cyan())
        } else if settings.force {
            "existing files will be overwritten".to_string()
        } else {
            "existing files are kept".to_string()
        };
        output.push_str(&format!(
            "Output folder: {} ({mode})\n",
            settings.output.display()
        ));

        Ok(output)
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, groups: &FileGroups, settings: &RunSettings) -> Result<String> {
        let value = json!({
            "groups": groups,
            "output": settings.output,
            "dry_run": settings.dry_run,
            "force": settings.force,
        });

        let mut rendered = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        rendered.push('\n');
        Ok(rendered)
    }
}
