// Global status bar at the very bottom of the app.
// Notice on the left, simulated session clock on the right.

use lending_core::models::Notice;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::{format_elapsed, truncate_with_ellipsis};
use crate::ui::theme;

const SESSION_LABEL: &str = "Session: ";

/// Fits "Session: MM:SS " plus padding without collapsing
const SESSION_COLUMN_MIN_WIDTH: u16 = 18;

fn format_session_label(elapsed_ms: u64) -> String {
    format!("{}{} ", SESSION_LABEL, format_elapsed(elapsed_ms))
}

fn session_column_width(elapsed_ms: u64) -> u16 {
    let label = format_session_label(elapsed_ms);
    (label.width() + 1).max(SESSION_COLUMN_MIN_WIDTH as usize) as u16
}

/// Render the status bar.
///
/// The session label is green while the agent is processing a request and
/// muted otherwise.
pub fn render_statusbar(f: &mut Frame, area: Rect, notice: Option<&Notice>, elapsed_ms: u64, agent_busy: bool) {
    let chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(session_column_width(elapsed_ms)),
    ])
    .split(area);
    let notice_area = chunks[0];
    let session_area = chunks[1];

    let notice_paragraph = match notice {
        Some(notice) => {
            let color = theme::notice_color(notice.level);
            let icon = notice.level.icon();
            let available = (notice_area.width as usize).saturating_sub(icon.width() + 2);
            let message = truncate_with_ellipsis(&notice.message, available);
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(color)),
                Span::styled(message, Style::default().fg(color)),
            ]))
        }
        None => Paragraph::new(""),
    };
    f.render_widget(notice_paragraph.style(Style::default().bg(theme::BG_SIDEBAR)), notice_area);

    let session_color = if agent_busy { theme::ACCENT_SUCCESS } else { theme::TEXT_MUTED };
    let label = format_session_label(elapsed_ms);
    let padding = (session_area.width as usize).saturating_sub(label.width());
    let session = Paragraph::new(format!("{}{}", " ".repeat(padding), label))
        .style(Style::default().fg(session_color).bg(theme::BG_SIDEBAR));
    f.render_widget(session, session_area);
}
