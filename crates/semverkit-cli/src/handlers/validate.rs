//! Validate command handler

use super::utils::version_text;
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{OutputWriter, ValidationReport};

/// Handle the validate command
pub fn handle_validate(
    args: ValidateArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let reports: Vec<ValidationReport> = args
        .versions
        .iter()
        .map(|input| ValidationReport::new(input, semverkit_core::parse(version_text(input, config))))
        .collect();

    output.validation_reports(&reports)?;

    if !config.version.allow_v_prefix {
        let prefixed = reports.iter().any(|report| {
            !report.valid
                && report.input.starts_with(['v', 'V'])
                && semverkit_core::parse(&report.input[1..]).is_ok()
        });
        if prefixed {
            output.warning("Set version.allow_v_prefix in the config file to accept a leading 'v'")?;
        }
    }

    let total = reports.len();
    let invalid = reports.iter().filter(|report| !report.valid).count();
    tracing::debug!(total, invalid, "Validated versions");

    if invalid > 0 {
        return Err(Error::InvalidVersions { invalid, total });
    }

    output.success(&format!("✓ {} valid", plural(total)))
}

fn plural(count: usize) -> String {
    if count == 1 {
        "1 version".to_string()
    } else {
        format!("{} versions", count)
    }
}
