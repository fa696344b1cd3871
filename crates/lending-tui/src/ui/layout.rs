// Layout constants shared by every view

use ratatui::layout::Rect;

/// Horizontal padding for main content areas (left + right)
pub const CONTENT_PADDING_H: u16 = 2;

/// Header: product name, breadcrumb and operator badge
pub const HEADER_HEIGHT: u16 = 2;

/// Key hint line above the status bar
pub const FOOTER_HEIGHT: u16 = 1;

/// Status bar height (single line at very bottom of app)
pub const STATUSBAR_HEIGHT: u16 = 1;

/// Inbox list column on the inbox page
pub const INBOX_LIST_WIDTH: u16 = 44;

/// Activity feed column, shown on demand
pub const ACTIVITY_PANEL_WIDTH: u16 = 40;

/// Landing tile grid
pub const TILE_COLUMNS: usize = 3;
pub const TILE_HEIGHT: u16 = 7;

/// Chat panel sizing
pub const CHAT_PANEL_WIDTH: u16 = 64;
pub const CHAT_PANEL_HEIGHT_PERCENT: u16 = 70;
pub const CHAT_MINIMIZED_HEIGHT: u16 = 3;

/// Apply horizontal padding to a Rect (reduces width and shifts x)
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

#[inline]
pub fn with_content_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, CONTENT_PADDING_H)
}

/// Rect anchored to the bottom-right corner of `area`, clamped to fit
pub fn bottom_right(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}
