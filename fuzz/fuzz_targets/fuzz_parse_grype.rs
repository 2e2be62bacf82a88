#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the Grype report parser.
///
/// Feeds arbitrary UTF-8 strings to `parse_grype_str`; anything that parses
/// must also be loadable into a store.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(normalized) = vex_triage::parsers::parse_grype_str(s) {
            let _ = vex_triage::model::MatchStore::from(normalized);
        }
    }
});
