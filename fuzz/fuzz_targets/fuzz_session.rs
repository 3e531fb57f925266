#![no_main]
use libfuzzer_sys::fuzz_target;
use secreport::{ReportSession, SeverityFilter};

/// Fuzz the full derivation path.
///
/// Any JSON value is loaded into a session and rendered under every filter;
/// the filtered list length must always equal the tab count.
fuzz_target!(|data: &[u8]| {
    let Ok(raw) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let mut session = ReportSession::new();
    if !session.load(&raw) {
        assert!(session.view().is_none());
        return;
    }
    for filter in SeverityFilter::ALL {
        session.select_filter(filter);
        let view = session.view().expect("loaded session renders");
        assert_eq!(view.issues.len(), view.filters[filter.index()].count);
    }
});
