//! Compare command handler

use super::utils::parse_version;
use crate::cli::CompareArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{ComparisonReport, OutputWriter};

/// Handle the compare command
pub fn handle_compare(
    args: CompareArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let left = parse_version(&args.left, config)?;
    let right = parse_version(&args.right, config)?;

    let ordering = semverkit_core::compare(&left, &right);
    tracing::debug!(left = %left, right = %right, ?ordering, "Compared versions");

    output.comparison(&ComparisonReport::new(&left, &right, ordering))
}
