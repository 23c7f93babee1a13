//! Format command handler

use super::utils::parse_version;
use crate::cli::FormatArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{FormatReport, OutputWriter};

/// Handle the format command
pub fn handle_format(args: FormatArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let version = parse_version(&args.input, config)?;

    let short = !args.full && (args.short || config.version.short_form);
    let formatted = if short {
        format!("{}{}", args.prefix, version.short_version_string())
    } else {
        version.version_string_with_prefix(&args.prefix)
    };

    let report = FormatReport {
        input: args.input,
        formatted,
    };
    output.result(&report.formatted, &report)
}
