//! Keyboard handling. Routes each key by page and input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lending_core::Page;

use crate::ui::{App, InputMode};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match app.dashboard.page() {
        Page::Landing => handle_landing_key(app, key),
        Page::Inbox => match app.input_mode() {
            InputMode::EditingDraft => handle_editor_key(app, key),
            InputMode::Chat => handle_chat_key(app, key),
            InputMode::Normal => handle_inbox_key(app, key),
        },
    }
}

fn handle_landing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_landing(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_landing(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_landing(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_landing(0, 1),
        KeyCode::Enter => app.open_landing_tile(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_inbox_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Enter => app.select_cursor_item(),
        KeyCode::Char('p') => {
            app.dashboard.start_processing();
        }
        KeyCode::Char('e') => {
            app.dashboard.start_editing();
        }
        KeyCode::Char('s') => {
            app.dashboard.send_response();
        }
        KeyCode::Char('c') => {
            app.dashboard.open_chat();
        }
        KeyCode::Char('a') => app.show_activity = !app.show_activity,
        KeyCode::Esc => {
            if app.dashboard.chat_panel().open {
                app.dashboard.close_chat();
            } else {
                app.dashboard.back_to_landing();
            }
        }
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('s') if ctrl => {
            app.dashboard.save_edits();
        }
        KeyCode::Esc => {
            app.dashboard.cancel_edits();
        }
        KeyCode::Enter => {
            if let Some(buffer) = app.dashboard.edit_buffer_mut() {
                buffer.push('\n');
            }
        }
        KeyCode::Backspace => {
            if let Some(buffer) = app.dashboard.edit_buffer_mut() {
                buffer.pop();
            }
        }
        KeyCode::Char(c) if !ctrl => {
            if let Some(buffer) = app.dashboard.edit_buffer_mut() {
                buffer.push(c);
            }
        }
        _ => {}
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('m') if alt => app.dashboard.toggle_chat_minimized(),
        KeyCode::Esc => app.dashboard.close_chat(),
        KeyCode::Enter => app.submit_chat_input(),
        KeyCode::Backspace => {
            app.chat_input.pop();
        }
        KeyCode::Char(c @ '1'..='5')
            if app.chat_input.is_empty() && app.dashboard.quick_questions_visible() =>
        {
            let index = c as usize - '1' as usize;
            app.dashboard.ask_quick_question(index);
        }
        KeyCode::Char(c) if !alt && !ctrl => app.chat_input.push(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use lending_core::config::CoreConfig;
    use lending_core::models::ItemStatus;
    use lending_core::Dashboard;

    fn app() -> App {
        App::new(Dashboard::new(CoreConfig::default()))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key(app, KeyEvent::new(code, modifiers));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Landing -> inbox with the first item selected
    fn inbox_with_selection() -> App {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        app
    }

    #[test]
    fn test_landing_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.landing_index, 4);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.landing_index, 4);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.landing_index, 5);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.landing_index, 0);
    }

    #[test]
    fn test_coming_soon_tile_stays_on_landing() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.dashboard.page(), Page::Landing);
        assert!(app.dashboard.notice().is_some());
    }

    #[test]
    fn test_q_quits_from_landing_only() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.dashboard.page(), Page::Landing);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_select_and_process() {
        let mut app = inbox_with_selection();
        assert_eq!(app.dashboard.selected_id(), Some(1));

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.dashboard.selected_item().unwrap().status, ItemStatus::Processing);
        for _ in 0..6 {
            app.on_tick(Duration::from_secs(1));
        }
        assert!(app.dashboard.draft().has_draft());

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.dashboard.selected_item().unwrap().status, ItemStatus::Completed);
    }

    #[test]
    fn test_cursor_follows_arrival() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor_item_id(), Some(2));
        app.on_tick(Duration::from_secs(15));
        assert_eq!(app.dashboard.items().len(), 4);
        assert_eq!(app.cursor_item_id(), Some(2));
    }

    #[test]
    fn test_edit_draft_keys() {
        let mut app = inbox_with_selection();
        press(&mut app, KeyCode::Char('p'));
        app.on_tick(Duration::from_secs(6));
        let original = app.dashboard.draft().text().to_string();

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.input_mode(), InputMode::EditingDraft);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "PS");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode(), InputMode::Normal);
        assert_eq!(app.dashboard.draft().text(), original);

        press(&mut app, KeyCode::Char('e'));
        type_str(&mut app, "!");
        press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(app.dashboard.draft().text(), format!("{original}!"));
        assert_eq!(app.input_mode(), InputMode::Normal);
    }

    #[test]
    fn test_chat_typing_and_quick_questions() {
        let mut app = inbox_with_selection();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.input_mode(), InputMode::Chat);
        assert_eq!(app.dashboard.chat_messages().len(), 1);

        // Digit on empty input asks a quick question
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.dashboard.chat_messages().len(), 2);
        assert!(app.chat_input.is_empty());

        // Quick questions are gone now, so digits are typed
        type_str(&mut app, "1 credit");
        assert_eq!(app.chat_input, "1 credit");
        press(&mut app, KeyCode::Enter);
        assert!(app.chat_input.is_empty());
        assert_eq!(app.dashboard.chat_messages().len(), 3);

        app.on_tick(Duration::from_secs(2));
        assert_eq!(app.dashboard.chat_messages().len(), 5);
    }

    #[test]
    fn test_blank_chat_enter_keeps_nothing() {
        let mut app = inbox_with_selection();
        press(&mut app, KeyCode::Char('c'));
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.dashboard.chat_messages().len(), 1);
        assert!(!app.dashboard.is_typing());
    }

    #[test]
    fn test_chat_minimize_returns_focus() {
        let mut app = inbox_with_selection();
        press(&mut app, KeyCode::Char('c'));
        press_with(&mut app, KeyCode::Char('m'), KeyModifiers::ALT);
        assert!(app.dashboard.chat_panel().minimized);
        assert_eq!(app.input_mode(), InputMode::Normal);

        // Inbox keys work again; 'c' restores the panel
        press(&mut app, KeyCode::Char('a'));
        assert!(app.show_activity);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.input_mode(), InputMode::Chat);
        press(&mut app, KeyCode::Esc);
        assert!(!app.dashboard.chat_panel().open);
    }

    #[test]
    fn test_paste_into_chat_input() {
        let mut app = inbox_with_selection();
        press(&mut app, KeyCode::Char('c'));
        app.handle_paste("line one\nline two");
        assert_eq!(app.chat_input, "line one line two");
    }
}
