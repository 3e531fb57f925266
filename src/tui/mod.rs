//! Interactive terminal report using ratatui.
//!
//! One screen: summary, severity tiles, the filter tab strip and the
//! filtered issue list with a detail pane. All derived data comes from the
//! [`ReportSession`](crate::viewmodel::ReportSession) wrapped by [`App`];
//! this module only draws it and maps keys onto session operations.

mod app;
mod events;
pub mod theme;
mod ui;
pub(crate) mod widgets;

pub use theme::{
    colors, current_theme_name, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme,
};

pub use app::App;
pub use events::{Event, EventHandler};
pub use ui::{render, run_report_tui};
