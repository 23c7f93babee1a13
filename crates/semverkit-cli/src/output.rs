//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with report types for
//! validation and comparison results.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use semverkit_core::{Component, Element, ParseError, Version};
use serde::Serialize;
use std::cmp::Ordering;
use std::io::{self, Write};
use tracing::trace;

/// Fields of a successfully parsed version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionFields {
    pub canonical: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub pre_release: Option<String>,
    pub build_metadata: Option<String>,
}

/// Why an input was rejected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetails {
    pub kind: ParseError,
    pub component: Component,
    pub message: String,
    pub spec_item: u8,
    pub reference: String,
}

/// Outcome of validating one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

/// Outcome of comparing two versions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub left: String,
    pub right: String,
    pub ordering: &'static str,
    pub symbol: &'static str,
}

/// Outcome of `bump`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BumpReport {
    pub from: String,
    pub to: String,
    pub part: Element,
}

/// Outcome of `format`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatReport {
    pub input: String,
    pub formatted: String,
}

impl From<&Version> for VersionFields {
    fn from(version: &Version) -> Self {
        Self {
            canonical: version.to_string(),
            major: version.major().to_string(),
            minor: version.minor().to_string(),
            patch: version.patch().to_string(),
            pre_release: version.pre_release().map(|p| p.to_string()),
            build_metadata: version.build_metadata().map(|b| b.to_string()),
        }
    }
}

impl From<ParseError> for ErrorDetails {
    fn from(error: ParseError) -> Self {
        Self {
            kind: error,
            component: error.component(),
            message: error.to_string(),
            spec_item: error.spec_item(),
            reference: error.reference_url(),
        }
    }
}

impl ValidationReport {
    /// Build a report from the input and its parse result
    pub fn new(input: &str, result: std::result::Result<Version, ParseError>) -> Self {
        match result {
            Ok(version) => Self {
                input: input.to_string(),
                valid: true,
                version: Some(VersionFields::from(&version)),
                error: None,
            },
            Err(error) => Self {
                input: input.to_string(),
                valid: false,
                version: None,
                error: Some(ErrorDetails::from(error)),
            },
        }
    }
}

impl ComparisonReport {
    pub fn new(left: &Version, right: &Version, ordering: Ordering) -> Self {
        let (ordering, symbol) = match ordering {
            Ordering::Less => ("less", "<"),
            Ordering::Equal => ("equal", "="),
            Ordering::Greater => ("greater", ">"),
        };
        Self {
            left: left.to_string(),
            right: right.to_string(),
            ordering,
            symbol,
        }
    }
}

/// Trait for formatting output with specialized support for report types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format validation reports, one line per input in human form
    fn format_validation_reports(&self, reports: &[ValidationReport]) -> Result<String>;

    /// Format a comparison as `A < B` in human form
    fn format_comparison(&self, report: &ComparisonReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // For human format, use pretty JSON as fallback
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_validation_reports(&self, reports: &[ValidationReport]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_reports_human(reports)),
            _ => self.format(&reports),
        }
    }

    fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format!("{} {} {}", report.left, report.symbol, report.right)),
            _ => self.format(report),
        }
    }
}

/// Format validation reports for human consumption
fn format_validation_reports_human(reports: &[ValidationReport]) -> String {
    reports
        .iter()
        .map(format_validation_report_human)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_validation_report_human(report: &ValidationReport) -> String {
    match (&report.version, &report.error) {
        (Some(fields), _) => {
            let mut parts = vec![
                format!("major {}", fields.major),
                format!("minor {}", fields.minor),
                format!("patch {}", fields.patch),
            ];
            if let Some(pre) = &fields.pre_release {
                parts.push(format!("pre-release {}", pre));
            }
            if let Some(build) = &fields.build_metadata {
                parts.push(format!("build {}", build));
            }
            format!("{} {} ({})", "✓".green(), report.input, parts.join(", "))
        }
        (None, Some(error)) => format!(
            "{} {}: {} [{}]",
            "✗".red(),
            report.input,
            error.message,
            error.reference.dimmed()
        ),
        (None, None) => format!("? {}", report.input),
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self::with_writer(format, use_color, quiet, verbose, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        verbose: u8,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            verbose,
            writer,
        }
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write debug information if verbose mode is enabled
    pub fn debug(&mut self, message: &str) -> Result<()> {
        if self.verbose == 0 || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "DEBUG:".dimmed(), message.dimmed()))
        } else {
            self.writeln(&format!("DEBUG: {}", message))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");

        if self.format == OutputFormat::Human {
            self.writeln(&formatted)
        } else {
            // serde_yaml already ends with a newline
            self.write(&formatted)?;
            if formatted.ends_with('\n') {
                Ok(())
            } else {
                self.writeln("")
            }
        }
    }

    /// Write a single result: `human` text in human format, `value` otherwise
    pub fn result<T: Serialize>(&mut self, human: &str, value: &T) -> Result<()> {
        if self.format == OutputFormat::Human {
            self.writeln(human)
        } else {
            self.data(value)
        }
    }

    /// Write a list of versions: one per line, or a sequence in machine formats
    pub fn versions(&mut self, versions: &[Version]) -> Result<()> {
        if self.format == OutputFormat::Human {
            for version in versions {
                self.writeln(&version.to_string())?;
            }
            Ok(())
        } else {
            let texts: Vec<String> = versions.iter().map(ToString::to_string).collect();
            self.data(&texts)
        }
    }

    /// Write validation reports with specialized formatting
    pub fn validation_reports(&mut self, reports: &[ValidationReport]) -> Result<()> {
        let formatted = self.format.format_validation_reports(reports)?;
        self.writeln(formatted.trim_end_matches('\n'))
    }

    /// Write a comparison with specialized formatting
    pub fn comparison(&mut self, report: &ComparisonReport) -> Result<()> {
        let formatted = self.format.format_comparison(report)?;
        self.writeln(formatted.trim_end_matches('\n'))
    }
}
