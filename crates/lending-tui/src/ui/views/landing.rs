use lending_core::landing::{tile_stats, LANDING_TILES, RECENT_ACTIVITY};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::{self, TILE_COLUMNS, TILE_HEIGHT};
use crate::ui::{theme, App};

pub fn render_landing(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::with_content_padding(area);
    let rows = LANDING_TILES.len().div_ceil(TILE_COLUMNS);
    let grid_height = TILE_HEIGHT * rows as u16;

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(grid_height),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled("AI Agent Modules", theme::section_title())),
        Line::from(Span::styled(
            "Choose a module to get started. More agents are on the way.",
            theme::text_muted(),
        )),
    ]);
    f.render_widget(intro, chunks[0]);

    render_tiles(f, app, chunks[1], rows);
    render_recent_activity(f, chunks[3]);
}

fn render_tiles(f: &mut Frame, app: &App, area: Rect, rows: usize) {
    let inbox_len = app.dashboard.items().len();
    let row_areas = Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); rows]).split(area);

    for (index, tile) in LANDING_TILES.iter().enumerate() {
        let row = index / TILE_COLUMNS;
        let col = index % TILE_COLUMNS;
        let columns =
            Layout::horizontal(vec![Constraint::Ratio(1, TILE_COLUMNS as u32); TILE_COLUMNS]).split(row_areas[row]);
        let tile_area = columns[col];

        let focused = index == app.landing_index;
        let border_style = if focused { theme::border_focused() } else { theme::border_inactive() };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", tile.title), theme::text_bold()));

        let status_color = theme::tile_status_color(tile.status);
        let lines = vec![
            Line::from(Span::styled(tile.description, theme::text_muted())),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("● {}", tile.status.label()), Style::default().fg(status_color)),
                Span::styled("  ", Style::default()),
                Span::styled(tile_stats(tile, inbox_len), theme::text_dim()),
            ]),
        ];

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        let paragraph = if focused {
            paragraph.style(theme::card_bg_selected())
        } else {
            paragraph
        };
        f.render_widget(paragraph, tile_area);
    }
}

fn render_recent_activity(f: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled("Recent Activity", theme::section_title()))];
    for (message, when) in RECENT_ACTIVITY {
        lines.push(Line::from(vec![
            Span::styled("  • ", theme::text_dim()),
            Span::styled(message, theme::text_primary()),
            Span::styled(format!("  {when}"), theme::text_dim()),
        ]));
    }
    f.render_widget(Paragraph::new(lines), area);
}
