// Centralized theme: every color and style used by the dashboard lives here

use lending_core::landing::TileStatus;
use lending_core::models::{AnalysisStatus, ItemStatus, NoticeLevel, Priority};
use lending_core::workflow::StageState;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Selected item background
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Sidebar and status bar background
pub const BG_SIDEBAR: Color = Color::Rgb(12, 12, 12);

/// Input field background
pub const BG_INPUT: Color = Color::Rgb(18, 18, 18);

/// Chat panel background
pub const BG_PANEL: Color = Color::Rgb(24, 24, 24);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// -----------------------------------------------------------------------------
// Accent Colors
// -----------------------------------------------------------------------------

/// Interactive elements, focus
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// The agent's voice in chat
pub const ACCENT_SPECIAL: Color = Color::Rgb(169, 154, 203);

// -----------------------------------------------------------------------------
// Borders
// -----------------------------------------------------------------------------

pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

// =============================================================================
// STYLE HELPERS
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

pub fn section_title() -> Style {
    Style::default().fg(ACCENT_PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn input_active() -> Style {
    Style::default().fg(TEXT_PRIMARY).bg(BG_INPUT)
}

pub fn input_placeholder() -> Style {
    Style::default().fg(TEXT_DIM).bg(BG_INPUT)
}

pub fn card_bg_selected() -> Style {
    Style::default().bg(BG_SELECTED)
}

pub fn key_hint() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

// =============================================================================
// DOMAIN COLORS
// =============================================================================

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => ACCENT_ERROR,
        Priority::Medium => ACCENT_WARNING,
        Priority::Low => ACCENT_SUCCESS,
    }
}

pub fn status_color(status: ItemStatus) -> Color {
    match status {
        ItemStatus::Pending => ACCENT_WARNING,
        ItemStatus::Processing => ACCENT_PRIMARY,
        ItemStatus::Completed => ACCENT_SUCCESS,
    }
}

pub fn tile_status_color(status: TileStatus) -> Color {
    match status {
        TileStatus::Active => ACCENT_SUCCESS,
        TileStatus::ComingSoon => TEXT_MUTED,
    }
}

pub fn analysis_color(status: AnalysisStatus) -> Color {
    match status {
        AnalysisStatus::Analyzed => ACCENT_SUCCESS,
        AnalysisStatus::Reviewing => ACCENT_WARNING,
    }
}

pub fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => ACCENT_PRIMARY,
        NoticeLevel::Success => ACCENT_SUCCESS,
    }
}

/// Marker and style for one processing stage row
pub fn stage_marker(state: StageState) -> (&'static str, Style) {
    match state {
        StageState::Done => ("✓", Style::default().fg(ACCENT_SUCCESS)),
        StageState::Active => ("●", Style::default().fg(ACCENT_PRIMARY).add_modifier(Modifier::BOLD)),
        StageState::Waiting => ("○", Style::default().fg(TEXT_DIM)),
    }
}
