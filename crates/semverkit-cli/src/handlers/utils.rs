//! Shared utilities for command handlers

use crate::config::Config;
use crate::error::{Error, Result};
use semverkit_core::Version;
use std::io::BufRead;

/// The text handed to the parser: a leading `v` or `V` is dropped only when
/// `version.allow_v_prefix` is set
pub fn version_text<'a>(input: &'a str, config: &Config) -> &'a str {
    if config.version.allow_v_prefix {
        input.strip_prefix(['v', 'V']).unwrap_or(input)
    } else {
        input
    }
}

/// Parse a command-line version argument
pub fn parse_version(input: &str, config: &Config) -> Result<Version> {
    semverkit_core::parse(version_text(input, config)).map_err(|source| Error::parse(input, source))
}

/// Non-blank lines of `reader`, trimmed
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use semverkit_core::ParseError;
    use std::io::Cursor;

    fn v_prefix_config() -> Config {
        let mut config = Config::default();
        config.version.allow_v_prefix = true;
        config
    }

    #[test]
    fn test_v_prefix_rejected_by_default() {
        let err = parse_version("v1.2.3", &Config::default()).unwrap_err();
        match err {
            Error::Parse { input, source } => {
                assert_eq!(input, "v1.2.3");
                assert_eq!(source, ParseError::MajorMustBeNonNegativeInteger);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_v_prefix_stripped_when_allowed() {
        let config = v_prefix_config();
        assert_eq!(parse_version("v1.2.3", &config).unwrap().to_string(), "1.2.3");
        assert_eq!(parse_version("V1.2.3", &config).unwrap().to_string(), "1.2.3");
        assert_eq!(parse_version("1.2.3", &config).unwrap().to_string(), "1.2.3");
        // only one prefix character is removed
        assert!(parse_version("vv1.2.3", &config).is_err());
    }

    #[test]
    fn test_read_lines_skips_blanks() {
        let input = Cursor::new("1.0.0\n\n  2.0.0-rc.1  \r\n\t\n0.1.0");
        assert_eq!(read_lines(input).unwrap(), vec!["1.0.0", "2.0.0-rc.1", "0.1.0"]);
    }
}
