//! Sort command handler

use super::utils::{parse_version, read_lines};
use crate::cli::SortArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use semverkit_core::Version;
use std::io;

/// Handle the sort command
pub fn handle_sort(args: SortArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let inputs = if args.versions.is_empty() {
        read_lines(io::stdin().lock())?
    } else {
        args.versions
    };

    sort_inputs(&inputs, args.reverse, config, output)
}

fn sort_inputs(
    inputs: &[String],
    reverse: bool,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    if inputs.is_empty() {
        return Err(Error::invalid_args(
            "no versions given on the command line or on stdin",
        ));
    }

    let _timer = Timer::with_details("sort", &format!("{} versions", inputs.len()));

    let mut versions = inputs
        .iter()
        .map(|input| parse_version(input, config))
        .collect::<Result<Vec<Version>>>()?;

    // Both sorts are stable: equal precedence keeps input order
    if reverse {
        versions.sort_by(|a, b| b.cmp(a));
    } else {
        versions.sort();
    }

    output.debug(&format!("Sorted {} versions", versions.len()))?;
    output.versions(&versions)
}
