use lending_core::agent::loan_summary;
use lending_core::models::{DraftState, InboxItem};
use lending_core::workflow::ProcessingStatus;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout;
use crate::ui::{theme, App};

/// Selected request: email, documents and loan terms, agent progress, draft reply
pub fn render_details(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::with_content_padding(area);
    let Some(item) = app.dashboard.selected_item() else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Select a request to get started", theme::text_muted())),
            Line::from(Span::styled("j/k to move · Enter to select", theme::text_dim())),
        ]);
        f.render_widget(hint, area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Min(0),
    ])
    .split(area);

    render_email(f, item, chunks[0]);
    render_documents(f, app, chunks[1]);
    render_processing(f, app, chunks[2]);
    render_draft(f, app.dashboard.draft(), chunks[3]);
}

fn section(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::TOP)
        .border_style(theme::border_inactive())
        .title(Span::styled(format!(" {title} "), theme::section_title()))
}

fn render_email(f: &mut Frame, item: &InboxItem, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(item.subject.clone(), theme::text_bold())),
        Line::from(vec![
            Span::styled("From: ", theme::text_muted()),
            Span::styled(item.from.clone(), theme::text_primary()),
            Span::styled(format!("  {}", item.timestamp), theme::text_dim()),
        ]),
        Line::from(vec![
            Span::styled("Account: ", theme::text_muted()),
            Span::styled(item.loan_account.clone(), theme::text_primary()),
            Span::styled("  Type: ", theme::text_muted()),
            Span::styled(item.request_type.label(), theme::text_primary()),
            Span::styled("  Priority: ", theme::text_muted()),
            Span::styled(
                item.priority.label(),
                Style::default().fg(theme::priority_color(item.priority)),
            ),
            Span::styled("  Status: ", theme::text_muted()),
            Span::styled(item.status.label(), Style::default().fg(theme::status_color(item.status))),
        ]),
        Line::from(""),
        Line::from(Span::styled(item.preview.clone(), theme::text_primary())),
    ];
    f.render_widget(
        Paragraph::new(lines).block(section("Email")).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_documents(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(area);

    let documents = app.dashboard.selected_documents();
    let doc_lines: Vec<Line> = documents
        .iter()
        .map(|doc| {
            Line::from(vec![
                Span::styled("▤ ", theme::text_dim()),
                Span::styled(doc.name.clone(), theme::text_primary()),
                Span::styled(format!("  {}", doc.kind.label()), theme::text_dim()),
                Span::styled(
                    format!("  {}", doc.status.label()),
                    Style::default().fg(theme::analysis_color(doc.status)),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(doc_lines).block(section("Documents")), columns[0]);

    let summary_lines: Vec<Line> = loan_summary()
        .rows()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), theme::text_muted()),
                Span::styled(value, theme::text_primary()),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(summary_lines)
            .block(section("Loan Summary"))
            .wrap(Wrap { trim: true }),
        columns[1],
    );
}

fn render_processing(f: &mut Frame, app: &App, area: Rect) {
    let processing = app.dashboard.processing();
    let spinner = app.animation().spinner_char();

    let headline = match processing.status() {
        ProcessingStatus::Idle => Line::from(vec![
            Span::styled("Ready. Press ", theme::text_muted()),
            Span::styled("p", theme::key_hint()),
            Span::styled(" to let the agent process this request.", theme::text_muted()),
        ]),
        ProcessingStatus::Processing => Line::from(vec![
            Span::styled(format!("{spinner} "), Style::default().fg(theme::ACCENT_PRIMARY)),
            Span::styled(
                format!("Processing {}/{}", processing.stage(), processing.stage_count()),
                Style::default().fg(theme::ACCENT_PRIMARY),
            ),
        ]),
        ProcessingStatus::Completed => Line::from(Span::styled(
            "✓ Analysis complete. Response drafted.",
            Style::default().fg(theme::ACCENT_SUCCESS),
        )),
    };

    let mut lines = vec![headline];
    for (name, state) in processing.stages() {
        let (marker, style) = theme::stage_marker(state);
        lines.push(Line::from(vec![
            Span::styled(format!("  {marker} "), style),
            Span::styled(name, style),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(section("AI Agent")), area);
}

fn render_draft(f: &mut Frame, draft: &DraftState, area: Rect) {
    if !draft.has_draft() {
        f.render_widget(
            Paragraph::new(Span::styled("No draft yet", theme::text_dim())).block(section("Draft Response")),
            area,
        );
        return;
    }

    let (title, body, style) = if draft.is_editing() {
        ("Draft Response (editing)", draft.edit_buffer(), theme::input_active())
    } else {
        ("Draft Response", draft.text(), theme::text_primary())
    };

    let mut lines: Vec<Line> = body
        .split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect();
    if draft.is_editing() {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(
                "█",
                Style::default().fg(theme::ACCENT_PRIMARY).add_modifier(Modifier::SLOW_BLINK),
            ));
        }
    }

    let block = section(title).border_style(if draft.is_editing() {
        theme::border_focused()
    } else {
        theme::border_inactive()
    });

    // Keep the end of the buffer visible while typing
    let height = area.height.saturating_sub(1) as usize;
    let scroll = if draft.is_editing() {
        lines.len().saturating_sub(height) as u16
    } else {
        0
    };

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}
