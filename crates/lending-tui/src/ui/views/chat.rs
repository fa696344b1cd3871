use lending_core::agent::QUICK_QUESTIONS;
use lending_core::models::ChatMessage;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::format::{tail_width, wrap_text};
use crate::ui::layout::{bottom_right, CHAT_MINIMIZED_HEIGHT, CHAT_PANEL_HEIGHT_PERCENT, CHAT_PANEL_WIDTH};
use crate::ui::{theme, App};

/// Floating chat panel anchored bottom-right; collapses to a title bar when minimized
pub fn render_chat_panel(f: &mut Frame, app: &App, area: Rect) {
    let panel = app.dashboard.chat_panel();
    let account = app
        .dashboard
        .selected_item()
        .map(|item| item.loan_account.as_str())
        .unwrap_or("");
    let title = format!(" Loan Assistant · {account} ");

    if panel.minimized {
        let bar = bottom_right(area, CHAT_PANEL_WIDTH, CHAT_MINIMIZED_HEIGHT);
        f.render_widget(Clear, bar);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_inactive())
            .title(Span::styled(title, theme::section_title()))
            .style(Style::default().bg(theme::BG_PANEL));
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("c", theme::key_hint()),
            Span::styled(" to restore", theme::text_muted()),
        ]))
        .block(block);
        f.render_widget(hint, bar);
        return;
    }

    let height = (u32::from(area.height) * u32::from(CHAT_PANEL_HEIGHT_PERCENT) / 100) as u16;
    let popup = bottom_right(area, CHAT_PANEL_WIDTH, height);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_focused())
        .title(Span::styled(title, theme::section_title()))
        .title_bottom(Line::from(Span::styled(" Alt+M minimize · Esc close ", theme::text_dim())))
        .style(Style::default().bg(theme::BG_PANEL));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let quick_height = if app.dashboard.quick_questions_visible() {
        QUICK_QUESTIONS.len() as u16 + 1
    } else {
        0
    };
    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(quick_height),
        Constraint::Length(1),
    ])
    .split(inner);

    render_messages(f, app, chunks[0]);
    if quick_height > 0 {
        render_quick_questions(f, chunks[1]);
    }
    render_input(f, app, chunks[2]);
}

fn message_lines(message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
    let (author, author_style) = if message.is_from_agent() {
        ("Agent", Style::default().fg(theme::ACCENT_SPECIAL).add_modifier(Modifier::BOLD))
    } else {
        ("You", Style::default().fg(theme::ACCENT_PRIMARY).add_modifier(Modifier::BOLD))
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(author, author_style),
        Span::styled(format!("  {}", message.timestamp), theme::text_dim()),
    ])];
    for paragraph in message.body.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(Line::from(""));
            continue;
        }
        lines.extend(
            wrap_text(paragraph, width)
                .into_iter()
                .map(|text| Line::from(Span::styled(text, theme::text_primary()))),
        );
    }
    if !message.related_documents.is_empty() {
        let related = message.related_documents.join(", ");
        lines.extend(
            wrap_text(&format!("Related: {related}"), width)
                .into_iter()
                .map(|text| Line::from(Span::styled(text, theme::text_dim()))),
        );
    }
    lines.push(Line::from(""));
    lines
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let mut lines: Vec<Line> = app
        .dashboard
        .chat_messages()
        .iter()
        .flat_map(|message| message_lines(message, width))
        .collect();

    if app.dashboard.is_typing() {
        lines.push(Line::from(Span::styled(
            format!("Agent is typing{}", app.animation().typing_dots()),
            Style::default().fg(theme::ACCENT_SPECIAL),
        )));
    }

    // Stick to the bottom of the conversation
    let scroll = lines.len().saturating_sub(area.height as usize) as u16;
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

fn render_quick_questions(f: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled("Quick questions", theme::text_muted()))];
    for (index, question) in QUICK_QUESTIONS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", index + 1), theme::key_hint()),
            Span::styled(*question, theme::text_primary()),
        ]));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let line = if app.chat_input.is_empty() {
        Line::from(vec![
            Span::styled("> ", theme::key_hint()),
            Span::styled("Ask about this loan...", theme::input_placeholder()),
        ])
    } else {
        // Show the tail when the input outgrows the line
        let max = (area.width as usize).saturating_sub(3);
        let visible = tail_width(&app.chat_input, max);
        Line::from(vec![
            Span::styled("> ", theme::key_hint()),
            Span::styled(visible, theme::input_active()),
            Span::styled("█", Style::default().fg(theme::ACCENT_PRIMARY)),
        ])
    };
    f.render_widget(Paragraph::new(line).style(Style::default().bg(theme::BG_INPUT)), area);
}
