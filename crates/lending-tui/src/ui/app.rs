use std::time::Duration;

use lending_core::landing::LANDING_TILES;
use lending_core::{CoreEvent, Dashboard, Page};

use crate::ui::layout::TILE_COLUMNS;
use crate::ui::services::AnimationClock;

/// Where typed characters go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands
    Normal,
    /// Keys edit the draft reply
    EditingDraft,
    /// Keys go to the chat input line
    Chat,
}

pub struct App {
    pub dashboard: Dashboard,
    pub running: bool,
    /// First Ctrl+C pressed; a second one quits
    pub pending_quit: bool,
    /// Focused landing tile
    pub landing_index: usize,
    /// Highlighted row in the inbox list (not necessarily the selected item)
    pub inbox_cursor: usize,
    pub chat_input: String,
    pub show_activity: bool,
    animation_clock: AnimationClock,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard,
            running: true,
            pending_quit: false,
            landing_index: 0,
            inbox_cursor: 0,
            chat_input: String::new(),
            show_activity: false,
            animation_clock: AnimationClock::new(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn input_mode(&self) -> InputMode {
        if self.dashboard.page() != Page::Inbox {
            return InputMode::Normal;
        }
        if self.dashboard.draft().is_editing() {
            return InputMode::EditingDraft;
        }
        let panel = self.dashboard.chat_panel();
        if panel.open && !panel.minimized {
            InputMode::Chat
        } else {
            InputMode::Normal
        }
    }

    pub fn animation(&self) -> &AnimationClock {
        &self.animation_clock
    }

    /// Advance timers and animations by the real time since the last tick
    pub fn on_tick(&mut self, elapsed: Duration) {
        self.animation_clock.tick();
        for event in self.dashboard.advance(elapsed) {
            if let CoreEvent::ItemArrived { .. } = event {
                // New items are prepended; keep the cursor on the same row content
                if self.dashboard.items().len() > 1 {
                    self.inbox_cursor += 1;
                }
            }
        }
        self.clamp_cursor();
    }

    pub fn handle_paste(&mut self, text: &str) {
        match self.input_mode() {
            InputMode::EditingDraft => {
                if let Some(buffer) = self.dashboard.edit_buffer_mut() {
                    buffer.push_str(text);
                }
            }
            InputMode::Chat => {
                // Single-line input; newlines become spaces
                self.chat_input.extend(text.chars().map(|c| if c == '\n' { ' ' } else { c }));
            }
            InputMode::Normal => {}
        }
    }

    // ===== Landing =====

    pub fn move_landing(&mut self, dx: isize, dy: isize) {
        let columns = TILE_COLUMNS as isize;
        let count = LANDING_TILES.len() as isize;
        let index = self.landing_index as isize;
        let (row, col) = (index / columns, index % columns);
        let (new_row, new_col) = (row + dy, col + dx);
        if new_col < 0 || new_col >= columns || new_row < 0 {
            return;
        }
        let target = new_row * columns + new_col;
        if target < count {
            self.landing_index = target as usize;
        }
    }

    pub fn open_landing_tile(&mut self) {
        if let Some(tile) = LANDING_TILES.get(self.landing_index) {
            if self.dashboard.activate_tile(tile.id) {
                self.inbox_cursor = 0;
            }
        }
    }

    // ===== Inbox =====

    pub fn move_cursor_up(&mut self) {
        self.inbox_cursor = self.inbox_cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.inbox_cursor + 1 < self.dashboard.items().len() {
            self.inbox_cursor += 1;
        }
    }

    pub fn cursor_item_id(&self) -> Option<u32> {
        self.dashboard.items().get(self.inbox_cursor).map(|item| item.id)
    }

    /// Select the highlighted item; the chat input belongs to the old item, so drop it
    pub fn select_cursor_item(&mut self) {
        let Some(id) = self.cursor_item_id() else {
            return;
        };
        if self.dashboard.selected_id() == Some(id) {
            return;
        }
        if self.dashboard.select_item(id).is_ok() {
            self.chat_input.clear();
        }
    }

    pub fn submit_chat_input(&mut self) {
        if self.dashboard.submit_chat(&self.chat_input) {
            self.chat_input.clear();
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.dashboard.items().len();
        if len == 0 {
            self.inbox_cursor = 0;
        } else if self.inbox_cursor >= len {
            self.inbox_cursor = len - 1;
        }
    }
}
