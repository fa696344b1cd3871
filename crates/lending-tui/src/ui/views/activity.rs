use lending_core::models::ActivityKind;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::{theme, App};

fn kind_icon(kind: ActivityKind) -> (&'static str, Style) {
    match kind {
        ActivityKind::EmailReceived => ("✉", Style::default().fg(theme::ACCENT_PRIMARY)),
        ActivityKind::StatusChange { to, .. } => ("↻", Style::default().fg(theme::status_color(to))),
        ActivityKind::DocumentsAnalyzed => ("▤", Style::default().fg(theme::ACCENT_WARNING)),
        ActivityKind::ResponseGenerated => ("✎", Style::default().fg(theme::ACCENT_SPECIAL)),
        ActivityKind::EmailSent => ("✓", Style::default().fg(theme::ACCENT_SUCCESS)),
    }
}

/// Live activity feed, newest first
pub fn render_activity(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(theme::border_inactive())
        .title(Span::styled(" Live Activity ", theme::section_title()))
        .style(Style::default().bg(theme::BG_SIDEBAR));

    let activity = app.dashboard.activity();
    let lines: Vec<Line> = if activity.is_empty() {
        vec![Line::from(Span::styled("No activity yet", theme::text_muted()))]
    } else {
        activity
            .entries()
            .flat_map(|entry| {
                let (icon, style) = kind_icon(entry.kind);
                [
                    Line::from(vec![
                        Span::styled(format!("{icon} "), style),
                        Span::styled(entry.message.clone(), theme::text_primary()),
                    ]),
                    Line::from(Span::styled(
                        format!("  {} · {}", entry.loan_account, entry.timestamp),
                        theme::text_dim(),
                    )),
                ]
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}
