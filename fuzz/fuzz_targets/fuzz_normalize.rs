#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the normalizer entry point.
///
/// Feeds arbitrary UTF-8 strings to `normalize_str`, which must accept any
/// text (valid JSON or not) without panicking.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = secreport::normalize_str(s);
    }
});
