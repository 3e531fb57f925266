//! Report screen rendering.

use super::app::App;
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::{colors, render_footer_hints, FooterHints, Styles};
use super::widgets::{
    check_terminal_size, count_badge, render_size_warning, severity_badge, truncate_to_width,
    MIN_HEIGHT, MIN_WIDTH,
};
use crate::viewmodel::{IssueCard, ReportView, MISSING_FIELD};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};
use std::io::{self, stdout};

/// Run the report TUI until the user quits.
pub fn run_report_tui(app: &mut App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::default();
    let result = event_loop(&mut terminal, app, &events);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.tick += 1,
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(7), // Summary row
            Constraint::Length(3), // Filter tabs
            Constraint::Min(6),    // Issues
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let Some(view) = app.view() else {
        let paragraph = Paragraph::new("No analysis report loaded.")
            .style(Styles::text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    };

    render_header(frame, chunks[0], view);
    render_summary_row(frame, chunks[1], view);
    render_filter_tabs(frame, chunks[2], view);
    render_issues(frame, chunks[3], view, app);
    render_status_bar(frame, chunks[4], app);
    render_footer(frame, chunks[5]);
}

fn render_header(frame: &mut Frame, area: Rect, view: &ReportView) {
    let summary = &view.summary;
    let lines = vec![
        Line::from(vec![
            Span::styled("Security Analysis ", Styles::header_title()),
            Span::styled(summary.filename.clone(), Styles::value()),
        ]),
        Line::from(vec![
            Span::styled("Analyzed: ", Styles::label()),
            Span::styled(summary.analysis_time.clone(), Styles::text()),
            Span::styled("  Total issues: ", Styles::label()),
            Span::styled(summary.total_issues.to_string(), Styles::value()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_summary_row(frame: &mut Frame, area: Rect, view: &ReportView) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ])
        .split(area);

    render_score(frame, columns[0], view);
    render_tiles(frame, columns[1], view);
    render_side_panel(frame, columns[2], view);
}

fn render_score(frame: &mut Frame, area: Rect, view: &ReportView) {
    let summary = &view.summary;
    let block = Block::default()
        .title(" Security Score ")
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let heading = vec![
        Line::from(Span::styled(
            summary.score_text(),
            Styles::class(summary.text_color).bold(),
        )),
        Line::from(Span::styled(summary.rating, Styles::class(summary.text_color))),
    ];
    frame.render_widget(Paragraph::new(heading), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Styles::class(summary.bar_color))
        .ratio((summary.score / 100.0).clamp(0.0, 1.0))
        .label(summary.percent_text());
    frame.render_widget(gauge, rows[1]);
}

fn render_tiles(frame: &mut Frame, area: Rect, view: &ReportView) {
    let lines: Vec<Line> = view
        .tiles
        .entries()
        .iter()
        .map(|&(severity, count)| {
            Line::from(vec![
                count_badge(count, severity.color()),
                Span::styled(format!(" {}", severity.title()), Styles::text()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Findings ")
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(paragraph, area);
}

fn render_side_panel(frame: &mut Frame, area: Rect, view: &ReportView) {
    let mut lines = Vec::new();

    if let Some(password) = &view.password {
        let strength = if password.strength_text.is_empty() {
            MISSING_FIELD.to_string()
        } else {
            password.strength_text.clone()
        };
        lines.push(Line::from(vec![
            Span::styled("Password: ", Styles::label()),
            Span::styled(strength, Styles::class(password.strength.color()).bold()),
            Span::styled(format!(" {}", password.score_text()), Styles::text_muted()),
        ]));
        for issue in &password.issues {
            lines.push(Line::from(Span::styled(format!("  • {issue}"), Styles::text())));
        }
    }

    if let Some(config) = &view.config {
        lines.push(Line::from(vec![
            Span::styled("Interfaces ", Styles::label()),
            Span::styled(config.total_interfaces.to_string(), Styles::value()),
            Span::styled("  VTY ", Styles::label()),
            Span::styled(config.total_vty_lines.to_string(), Styles::value()),
            Span::styled("  ACLs ", Styles::label()),
            Span::styled(config.total_acls.to_string(), Styles::value()),
        ]));
    }

    if !view.recommendations.is_empty() {
        lines.push(Line::from(Span::styled("Recommendations", Styles::section_title())));
        for rec in &view.recommendations {
            lines.push(Line::from(Span::styled(format!("  • {}", rec.text), Styles::text())));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Overview ")
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        );
    frame.render_widget(paragraph, area);
}

fn render_filter_tabs(frame: &mut Frame, area: Rect, view: &ReportView) {
    let titles: Vec<Line> = view
        .filters
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label)))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .select(view.active_filter.index())
        .style(Styles::text_muted())
        .highlight_style(Style::default().fg(colors().accent).bold().underlined());
    frame.render_widget(tabs, area);
}

fn render_issues(frame: &mut Frame, area: Rect, view: &ReportView, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let block = Block::default()
        .title(format!(" Issues ({}) ", view.issues.len()))
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());

    if let Some(message) = view.empty_message {
        let paragraph = Paragraph::new(message)
            .style(Styles::text_muted())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, columns[0]);
    } else {
        // badge and padding take roughly a dozen columns
        let title_width = usize::from(columns[0].width).saturating_sub(14);
        let items: Vec<ListItem> = view
            .issues
            .iter()
            .map(|card| {
                ListItem::new(Line::from(vec![
                    severity_badge(&card.severity_label, card.severity),
                    Span::raw(" "),
                    Span::styled(truncate_to_width(&card.title, title_width), Styles::text()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Styles::selected())
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(app.selected));
        frame.render_stateful_widget(list, columns[0], &mut state);
    }

    render_issue_detail(frame, columns[1], app.selected_issue());
}

fn render_issue_detail(frame: &mut Frame, area: Rect, card: Option<&IssueCard>) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Styles::border());

    let Some(card) = card else {
        frame.render_widget(block, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            severity_badge(&card.severity_label, card.severity),
            Span::styled(format!(" {}", card.category), Styles::label()),
        ]),
        Line::from(""),
        Line::from(Span::styled(card.title.clone(), Styles::value())),
        Line::from(Span::styled(card.description.clone(), Styles::text())),
    ];

    let mut field = |label: &str, value: &Option<String>| {
        if let Some(value) = value {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), Styles::label()),
                Span::styled(value.clone(), Styles::text()),
            ]));
        }
    };
    field("Location", &card.location);
    field("Recommendation", &card.recommendation);
    field("Reference", &card.reference);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = app.status_message.clone().unwrap_or_else(|| {
        format!(
            "Filter: {} │ Theme: {}",
            app.active_filter(),
            super::current_theme_name()
        )
    });
    let paragraph = Paragraph::new(Span::styled(format!(" {text}"), Styles::text()))
        .style(Styles::status_bar());
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let spans = render_footer_hints(&FooterHints::report());
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
