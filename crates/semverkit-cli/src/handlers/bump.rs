//! Bump command handler

use super::utils::parse_version;
use crate::cli::BumpArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{BumpReport, OutputWriter};
use semverkit_core::Element;

/// Handle the bump command
pub fn handle_bump(args: BumpArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let version = parse_version(&args.input, config)?;
    let part = Element::from(args.part);
    let next = version.increment(part);

    output.debug(&format!("Incrementing {:?} of {}", part, version))?;

    let report = BumpReport {
        from: version.to_string(),
        to: next.to_string(),
        part,
    };
    output.result(&report.to, &report)
}
