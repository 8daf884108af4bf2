//! Output formatters for classification reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ClassificationReport;
use colored::{Color, Colorize};

/// Trait for formatting classification reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ClassificationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored per-file lines
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ClassificationReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "Classified {} file(s), {} previewable\n",
            report.entries.len(),
            report.previewable_count()
        ));
        out.push_str(&format!(
            "Generated: {}\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        for entry in &report.entries {
            let extension = if entry.descriptor.extension.is_empty() {
                "(none)".to_string()
            } else {
                format!(".{}", entry.descriptor.extension)
            };

            let category = match entry.category_label() {
                "Unknown" => self.colorize("Unknown", Color::Red),
                label => self.colorize(label, Color::Blue),
            };

            let pane = if entry.previewable {
                self.colorize("preview pane", Color::Green)
            } else {
                self.colorize("no preview", Color::Yellow)
            };

            out.push_str(&format!(
                "  {} [{}] {} - {}\n",
                entry.file, extension, category, pane
            ));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ClassificationReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(true),
        }
    }

    pub fn format(&self, report: &ClassificationReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ClassificationReport {
        ClassificationReport::new(vec![
            "summary.pdf".to_string(),
            "sheet.xlsx".to_string(),
            "noext".to_string(),
        ])
    }

    #[test]
    fn console_report_lists_every_entry() {
        let formatter = ConsoleFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("Classified 3 file(s), 1 previewable"));
        assert!(output.contains("summary.pdf [.pdf] PDF - preview pane"));
        assert!(output.contains("sheet.xlsx [.xlsx] Spreadsheet - no preview"));
        assert!(output.contains("noext [(none)] Unknown - no preview"));
    }

    #[test]
    fn json_report_round_trips_flags() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let entries = value["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["descriptor"]["is_pdf"], true);
        assert_eq!(entries[0]["previewable"], true);
        assert_eq!(entries[1]["descriptor"]["is_excel"], true);
        assert_eq!(entries[1]["previewable"], false);
        assert_eq!(entries[2]["descriptor"]["extension"], "");
    }
}
