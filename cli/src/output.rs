//! Console output formatters for round results and batch reports

use colored::Colorize;
use concord_domain::{BulkReport, RoundResult};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single round result.
    ///
    /// With `show_all`, every generator's suggestion is printed before the
    /// judged selection.
    pub fn format_round(result: &RoundResult, show_all: bool) -> String {
        let mut output = String::new();

        if !result.success {
            output.push_str(&format!(
                "{} {}\n",
                "Round failed:".red().bold(),
                result.error.as_deref().unwrap_or("Unknown error")
            ));
            return output;
        }

        if show_all {
            output.push_str(&Self::section_header("Suggestions"));
            for suggestion in &result.suggestions {
                output.push_str(&format!(
                    "\n{}\n{}\n{} {}\n",
                    format!("-- {} (confidence {:.2}) --", suggestion.agent_name, suggestion.confidence)
                        .yellow()
                        .bold(),
                    suggestion.suggestion,
                    "Reasoning:".dimmed(),
                    suggestion.reasoning
                ));
            }
        }

        output.push_str(&Self::section_header("Selected"));
        output.push_str(&format!(
            "\n{}\n\n{}\n",
            format!("Winner: {}", result.selected_agent).yellow().bold(),
            result.selected_suggestion
        ));

        if !result.reasoning.is_empty() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                "Judge reasoning:".cyan().bold(),
                result.reasoning
            ));
        }

        output
    }

    /// Format an aggregated batch report.
    pub fn format_report(report: &BulkReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::banner("BREAKING CHANGES ANALYSIS"));
        output.push('\n');

        if report.breaking_changes.is_empty() {
            output.push_str(&format!("{}\n", "No breaking changes detected".green()));
        } else {
            output.push_str(&format!(
                "{}\n\n",
                format!(
                    "Found {} potential breaking change(s):",
                    report.breaking_changes.len()
                )
                .red()
            ));
            for bc in &report.breaking_changes {
                output.push_str(&format!(
                    "  [{}] ({} -> {}) {}\n",
                    bc.package, bc.old_version, bc.new_version, bc.change
                ));
            }
        }
        output.push('\n');

        if report.code_changes.is_empty() {
            output.push_str(&format!("{}\n", "No code changes required".green()));
        } else {
            output.push_str(&format!(
                "{}\n\n",
                format!("Suggested code changes ({}):", report.code_changes.len()).yellow()
            ));
            for change in &report.code_changes {
                let packages = match (&change.packages, &change.package) {
                    (Some(many), _) => many.join(", "),
                    (None, Some(one)) => one.clone(),
                    (None, None) => "unknown".to_string(),
                };
                let location = match &change.line_range {
                    Some(range) => format!("{}:{}", change.file, range),
                    None => change.file.clone(),
                };
                output.push_str(&format!("  [{}] {}\n", packages, location.blue()));
                output.push_str(&format!("      Change: {}\n", change.description));
                if let Some(reason) = &change.reason {
                    output.push_str(&format!("      Reason: {}\n", reason));
                }
                output.push('\n');
            }
        }

        if !report.failed_packages.is_empty() {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "Analysis failed for {} of {} package(s):",
                    report.failed_packages.len(),
                    report.packages_analyzed
                )
                .yellow()
            ));
            for package in &report.failed_packages {
                output.push_str(&format!("  - {}\n", package));
            }
            output.push('\n');
        }

        if report.all_failed() {
            output.push_str(&format!("{}\n", "Analysis failed for every package".red().bold()));
        } else {
            output.push_str(&format!(
                "{}\n",
                format!("Analyzed {} package(s)", report.packages_analyzed)
                    .green()
                    .bold()
            ));
        }

        output
    }

    /// Format a round result as JSON
    pub fn format_round_json(result: &RoundResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a batch report as JSON
    pub fn format_report_json(report: &BulkReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn banner(title: &str) -> String {
        let line = "=".repeat(70);
        format!("{}\n{}\n{}\n", line.cyan(), title.cyan().bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
