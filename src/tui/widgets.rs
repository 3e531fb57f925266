//! Small reusable rendering helpers.

use super::theme::colors;
use crate::model::{ColorClass, Severity};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

/// Render a severity badge.
///
/// `label` is shown as given, so unrecognized severities keep their raw
/// text but get the dimmed gray style.
pub fn severity_badge(label: &str, severity: Option<Severity>) -> Span<'static> {
    let scheme = colors();
    let class = Severity::color_of(severity);
    let style = Style::default()
        .fg(scheme.badge_fg(class))
        .bg(scheme.class(class));
    let style = if severity.is_some() {
        style.bold()
    } else {
        style.dim()
    };
    Span::styled(format!(" {label} "), style)
}

/// Render a count badge
pub fn count_badge(count: u64, class: ColorClass) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {count} "),
        Style::default()
            .fg(scheme.badge_fg(class))
            .bg(scheme.class(class))
            .bold(),
    )
}

/// Cut `text` to at most `max_width` terminal columns, appending `…` when
/// anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

// ============================================================================
// Minimum Size Check
// ============================================================================

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// Check if terminal meets minimum size requirements.
pub const fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect, required_width: u16, required_height: u16) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().warning)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("ssh v1", 10), "ssh v1");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Telnet enabled on VTY", 10), "Telnet en…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // each CJK char is two columns wide
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn test_unknown_severity_badge_keeps_label() {
        let badge = severity_badge("severe", None);
        assert_eq!(badge.content, " severe ");
        let known = severity_badge("HIGH", Some(Severity::High));
        assert_eq!(known.content, " HIGH ");
    }

    #[test]
    fn test_terminal_size_check() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert_eq!(check_terminal_size(40, 24), Err((MIN_WIDTH, MIN_HEIGHT)));
    }
}
