//! Output formatting for CLI commands.
//!
//! The converted document goes to stdout untouched; everything here is
//! operator-facing text written to stderr.

use colored::Colorize;
use std::fmt::Write;
use tabled::{Table, Tabled};

use crate::plan::{ChangeType, PlanSummary};

/// Output formatter for CLI.
#[derive(Debug, Default)]
pub struct OutputFormatter;

/// Resource row for table display.
#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Module")]
    module: String,
    #[tabled(rename = "Resource")]
    resource: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Attributes")]
    attributes: usize,
}

impl OutputFormatter {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Formats a plan summary for display.
    #[must_use]
    pub fn format_summary(&self, summary: &PlanSummary) -> String {
        if summary.is_empty() {
            return format!(
                "{} No changes. Infrastructure is up to date.\n",
                "✓".green()
            );
        }

        let mut output = String::from("\nPlan summary\n\n");

        let rows: Vec<ResourceRow> = summary
            .resources
            .iter()
            .filter(|r| r.change != ChangeType::None)
            .enumerate()
            .map(|(i, r)| ResourceRow {
                index: i + 1,
                module: r.module.clone(),
                resource: Self::truncate(&r.resource, 48),
                action: Self::format_change_type(r.change),
                attributes: r.attributes,
            })
            .collect();

        output.push_str(&Table::new(rows).to_string());
        output.push('\n');

        let _ = write!(
            output,
            "\nPlan: {} to add, {} to change, {} to destroy, {} to replace\n",
            summary.creates.to_string().green(),
            summary.updates.to_string().yellow(),
            summary.destroys.to_string().red(),
            summary.replaces.to_string().magenta()
        );

        output
    }

    /// Formats a change type with color.
    fn format_change_type(change: ChangeType) -> String {
        match change {
            ChangeType::Create => "+create".green().to_string(),
            ChangeType::Update => "~update".yellow().to_string(),
            ChangeType::Destroy => "-destroy".red().to_string(),
            ChangeType::DestroyCreate => "-/+replace".magenta().to_string(),
            ChangeType::None => "noop".dimmed().to_string(),
        }
    }

    /// Truncates a string to a maximum number of characters.
    fn truncate(s: &str, max_len: usize) -> String {
        if s.chars().count() <= max_len {
            s.to_string()
        } else {
            let kept: String = s.chars().take(max_len - 3).collect();
            format!("{kept}...")
        }
    }
}
