use lending_core::models::InboxItem;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::{render_activity, render_chat_panel, render_details};
use crate::ui::format::truncate_with_ellipsis;
use crate::ui::layout::{ACTIVITY_PANEL_WIDTH, INBOX_LIST_WIDTH};
use crate::ui::{theme, App};

/// Inbox page: list | details | optional activity feed, chat panel on top
pub fn render_inbox(f: &mut Frame, app: &App, area: Rect) {
    let activity_width = if app.show_activity { ACTIVITY_PANEL_WIDTH } else { 0 };
    let columns = Layout::horizontal([
        Constraint::Length(INBOX_LIST_WIDTH),
        Constraint::Min(0),
        Constraint::Length(activity_width),
    ])
    .split(area);

    render_list(f, app, columns[0]);
    render_details(f, app, columns[1]);
    if app.show_activity {
        render_activity(f, app, columns[2]);
    }

    if app.dashboard.chat_panel().open {
        render_chat_panel(f, app, area);
    }
}

fn render_list(f: &mut Frame, app: &App, area: Rect) {
    let active = app.dashboard.inbox().active_count();
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::border_inactive())
        .title(Span::styled(format!(" Inbox · {active} active "), theme::section_title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let items = app.dashboard.items();
    if items.is_empty() {
        f.render_widget(Paragraph::new("No requests").style(theme::text_muted()), inner);
        return;
    }

    // Each card is three lines plus a spacer
    let visible = (inner.height as usize / 4).max(1);
    let offset = app.inbox_cursor.saturating_sub(visible - 1);
    let text_width = (inner.width as usize).saturating_sub(3);

    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, item)| {
            let is_cursor = index == app.inbox_cursor;
            let is_selected = app.dashboard.selected_id() == Some(item.id);
            inbox_card(app, item, is_cursor, is_selected, text_width)
        })
        .collect();

    f.render_widget(List::new(list_items), inner);
}

fn inbox_card(app: &App, item: &InboxItem, is_cursor: bool, is_selected: bool, width: usize) -> ListItem<'static> {
    let marker = if is_cursor {
        Span::styled("▌ ", Style::default().fg(theme::ACCENT_PRIMARY))
    } else {
        Span::raw("  ")
    };
    let sender_style = if is_selected {
        Style::default().fg(theme::ACCENT_PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        theme::text_bold()
    };

    let mut header = vec![
        marker,
        Span::styled(truncate_with_ellipsis(&item.from, width.saturating_sub(6)), sender_style),
    ];
    if item.is_new {
        let badge_style = if app.animation().pulse() {
            Style::default().fg(theme::ACCENT_SUCCESS).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::ACCENT_SUCCESS)
        };
        header.push(Span::styled(" NEW", badge_style));
    }

    let meta = vec![
        Span::raw("  "),
        Span::styled(
            format!("{} ", item.priority.label()),
            Style::default().fg(theme::priority_color(item.priority)),
        ),
        Span::styled(
            format!("· {} ", item.status.label()),
            Style::default().fg(theme::status_color(item.status)),
        ),
        Span::styled(format!("· {}", item.timestamp), theme::text_dim()),
    ];

    let lines = vec![
        Line::from(header),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(truncate_with_ellipsis(&item.subject, width), theme::text_primary()),
        ]),
        Line::from(meta),
        Line::from(""),
    ];

    let item = ListItem::new(lines);
    if is_cursor {
        item.style(theme::card_bg_selected())
    } else {
        item
    }
}
