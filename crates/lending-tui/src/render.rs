use lending_core::landing::initials;
use lending_core::Page;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::components::render_statusbar;
use crate::ui::{layout, theme, views, App, InputMode};

const PRODUCT_NAME: &str = "Commercial Lending AI Agent";

pub(crate) fn render(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(layout::FOOTER_HEIGHT),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(f.area());

    render_header(f, app, chunks[0]);

    match app.dashboard.page() {
        Page::Landing => views::render_landing(f, app, chunks[1]),
        Page::Inbox => views::render_inbox(f, app, chunks[1]),
    }

    render_footer(f, app, chunks[2]);

    let elapsed_ms = u64::try_from(app.dashboard.elapsed().as_millis()).unwrap_or(u64::MAX);
    render_statusbar(
        f,
        chunks[3],
        app.dashboard.notice(),
        elapsed_ms,
        app.dashboard.processing().is_processing(),
    );
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let chrome_color = if app.pending_quit { theme::ACCENT_ERROR } else { theme::ACCENT_PRIMARY };
    let breadcrumb = match app.dashboard.page() {
        Page::Landing => "Home",
        Page::Inbox => "Home › Email Request Processing",
    };

    let operator = &app.dashboard.config().operator_name;
    let badge = format!("[{}] {} ", initials(operator), operator);
    let padding = " ".repeat(layout::CONTENT_PADDING_H as usize);

    let left = format!("{padding}{PRODUCT_NAME}  ");
    let used = left.width() + breadcrumb.width() + badge.width();
    let gap = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(chrome_color).add_modifier(Modifier::BOLD)),
        Span::styled(breadcrumb, theme::text_muted()),
        Span::raw(" ".repeat(gap)),
        Span::styled(badge, theme::text_primary()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn footer_hints(app: &App) -> &'static str {
    match (app.dashboard.page(), app.input_mode()) {
        (Page::Landing, _) => "←↑↓→ move · Enter open · q quit",
        (Page::Inbox, InputMode::EditingDraft) => "type to edit · Enter newline · Ctrl+S save · Esc cancel",
        (Page::Inbox, InputMode::Chat) => "type a question · Enter send · 1-5 quick question · Alt+M minimize · Esc close",
        (Page::Inbox, InputMode::Normal) => {
            "j/k move · Enter select · p process · e edit · s send · c chat · a activity · Esc back"
        }
    }
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.pending_quit {
        ("⚠ Press Ctrl+C again to quit", Style::default().fg(theme::ACCENT_ERROR))
    } else {
        (footer_hints(app), theme::text_muted())
    };
    let padded = format!("{}{}", " ".repeat(layout::CONTENT_PADDING_H as usize), text);
    f.render_widget(Paragraph::new(padded).style(style), area);
}
