//! Report screen state.

use super::{set_theme, Theme};
use crate::viewmodel::{IssueCard, ReportSession, ReportView, SeverityFilter};

/// Interactive state for one loaded report.
///
/// The [`ReportSession`] owns the filter and the memoized derivations; the
/// app only tracks what is purely presentational (selection, status line).
pub struct App {
    session: ReportSession,
    view: Option<ReportView>,
    /// Index of the highlighted issue in the filtered list
    pub selected: usize,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub tick: u64,
}

impl App {
    /// Wrap a loaded session and apply the named theme.
    pub fn new(session: ReportSession, theme: &str) -> Self {
        set_theme(Theme::from_name(theme));
        let mut app = Self {
            session,
            view: None,
            selected: 0,
            should_quit: false,
            status_message: None,
            tick: 0,
        };
        app.refresh();
        app
    }

    /// Hand the session back, keeping the filter chosen on screen.
    pub fn into_session(self) -> ReportSession {
        self.session
    }

    #[must_use]
    pub const fn view(&self) -> Option<&ReportView> {
        self.view.as_ref()
    }

    #[must_use]
    pub const fn active_filter(&self) -> SeverityFilter {
        self.session.filter()
    }

    /// The highlighted issue, if the filtered list is non-empty.
    #[must_use]
    pub fn selected_issue(&self) -> Option<&IssueCard> {
        self.view.as_ref()?.issues.get(self.selected)
    }

    pub fn select_filter(&mut self, filter: SeverityFilter) {
        if filter != self.session.filter() {
            self.session.select_filter(filter);
            self.selected = 0;
            self.refresh();
        }
    }

    pub fn next_filter(&mut self) {
        self.session.next_filter();
        self.selected = 0;
        self.refresh();
    }

    pub fn prev_filter(&mut self) {
        self.session.prev_filter();
        self.selected = 0;
        self.refresh();
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.issue_count() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.issue_count().saturating_sub(1);
    }

    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    fn issue_count(&self) -> usize {
        self.view.as_ref().map_or(0, |view| view.issues.len())
    }

    fn refresh(&mut self) {
        self.view = self.session.view();
        self.selected = self.selected.min(self.issue_count().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session() -> ReportSession {
        let mut session = ReportSession::new();
        session.load(&json!({
            "analysis": {
                "issues": [
                    {"id": "a", "severity": "HIGH", "title": "Telnet enabled"},
                    {"id": "b", "severity": "LOW"}
                ]
            }
        }));
        session
    }

    #[test]
    fn test_filter_change_resets_selection() {
        let mut app = App::new(session(), "dark");
        app.select_last();
        assert_eq!(app.selected, 1);
        app.select_filter(SeverityFilter::High);
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_issue().map(|c| c.title.as_str()), Some("Telnet enabled"));
    }

    #[test]
    fn test_empty_filter_has_no_selection() {
        let mut app = App::new(session(), "dark");
        app.select_filter(SeverityFilter::Critical);
        app.select_next();
        assert_eq!(app.selected, 0);
        assert!(app.selected_issue().is_none());
        assert!(app.view().is_some_and(|v| v.empty_message.is_some()));
    }

    #[test]
    fn test_session_keeps_filter() {
        let mut app = App::new(session(), "dark");
        app.next_filter();
        let session = app.into_session();
        assert_eq!(session.filter(), SeverityFilter::Critical);
    }

    #[test]
    fn test_unloaded_session_renders_nothing() {
        let app = App::new(ReportSession::new(), "light");
        assert!(app.view().is_none());
        assert!(app.selected_issue().is_none());
    }
}
