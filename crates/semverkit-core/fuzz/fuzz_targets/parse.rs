//! Fuzzing target for version parsing
//!
//! The parser must return for any input, and anything it accepts must
//! display back to the same text and parse again to an equal value.

#![no_main]

use libfuzzer_sys::fuzz_target;
use semverkit_core::parse;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    if let Ok(version) = parse(&input) {
        let text = version.to_string();
        assert_eq!(text, input);

        let again = parse(&text).expect("displayed version must parse");
        assert_eq!(again, version);
        assert_eq!(again.build_metadata(), version.build_metadata());
    }
});
