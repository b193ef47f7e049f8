use crate::application::{App, AppMode};
use crate::domain::HELPLINE;
use crate::infrastructure::ClipboardService;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Browsing => Self::handle_browsing_mode(app, key, modifiers),
            AppMode::AddressBar => Self::handle_address_bar_mode(app, key),
            AppMode::Search => Self::handle_search_mode(app, key),
            AppMode::ContactForm => Self::handle_contact_form_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_browsing_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('l') = key {
                app.start_address_bar();
            }
            return;
        }

        app.status_message = None;

        match key {
            KeyCode::Char(c @ '1'..='6') => {
                if let Some(digit) = c.to_digit(10) {
                    app.activate_nav(digit as usize - 1);
                }
            }
            KeyCode::Tab => app.focus_next(),
            KeyCode::BackTab => app.focus_previous(),
            KeyCode::Enter => app.activate_focused(),
            KeyCode::Esc => {
                if app.nav.is_menu_open() {
                    app.toggle_menu();
                } else {
                    app.focus = None;
                }
            }
            KeyCode::Char('m') => app.toggle_menu(),
            KeyCode::Char('g') => app.start_address_bar(),
            KeyCode::Char('/') => app.start_search(),
            KeyCode::Char('b') => {
                app.go_back();
            }
            KeyCode::Char('f') => {
                app.go_forward();
            }
            KeyCode::Down | KeyCode::Char('j') => app.viewport.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => app.viewport.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => app.viewport.page_down(),
            KeyCode::PageUp => app.viewport.page_up(),
            KeyCode::Home => app.viewport.jump_to_top(),
            KeyCode::End => app.viewport.jump_to_bottom(),
            KeyCode::Char('y') => {
                let result = ClipboardService::copy_text(HELPLINE);
                app.set_copy_result(result);
            }
            KeyCode::F(1) | KeyCode::Char('?') => app.open_help(),
            _ => {}
        }
    }

    fn handle_address_bar_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.finish_address_bar(),
            KeyCode::Esc => app.cancel_address_bar(),
            _ => {
                edit_line(&mut app.address_input, &mut app.cursor_position, key);
            }
        }
    }

    fn handle_search_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.perform_search();
                app.finish_search();
            }
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Down => app.next_search_result(),
            KeyCode::Up => app.previous_search_result(),
            _ => {
                // Live search as the user types
                if edit_line(&mut app.search_query, &mut app.cursor_position, key) {
                    app.perform_search();
                }
            }
        }
    }

    fn handle_contact_form_mode(app: &mut App, key: KeyCode) {
        let multiline = app.contact.editing.is_some_and(|field| field.is_multiline());
        match key {
            KeyCode::Esc => app.finish_contact_edit(),
            KeyCode::Tab => app.next_contact_field(),
            KeyCode::Enter if multiline => app.contact.insert_char('\n'),
            KeyCode::Enter => app.next_contact_field(),
            KeyCode::Backspace => app.contact.backspace(),
            KeyCode::Delete => app.contact.delete(),
            KeyCode::Left => app.contact.move_left(),
            KeyCode::Right => app.contact.move_right(),
            KeyCode::Home => app.contact.move_home(),
            KeyCode::End => app.contact.move_end(),
            KeyCode::Char(c) => app.contact.insert_char(c),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

/// Applies a single-line editing key to `text`, keeping `cursor` on a char
/// boundary. Returns whether the text changed.
fn edit_line(text: &mut String, cursor: &mut usize, key: KeyCode) -> bool {
    *cursor = (*cursor).min(text.len());
    match key {
        KeyCode::Backspace => match text[..*cursor].char_indices().next_back() {
            Some((index, _)) => {
                text.remove(index);
                *cursor = index;
                true
            }
            None => false,
        },
        KeyCode::Delete => {
            if *cursor < text.len() {
                text.remove(*cursor);
                true
            } else {
                false
            }
        }
        KeyCode::Left => {
            if let Some((index, _)) = text[..*cursor].char_indices().next_back() {
                *cursor = index;
            }
            false
        }
        KeyCode::Right => {
            if let Some(c) = text[*cursor..].chars().next() {
                *cursor += c.len_utf8();
            }
            false
        }
        KeyCode::Home => {
            *cursor = 0;
            false
        }
        KeyCode::End => {
            *cursor = text.len();
            false
        }
        KeyCode::Char(c) => {
            text.insert(*cursor, c);
            *cursor += c.len_utf8();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ContactField, Focusable, DEFAULT_BREAKPOINT};

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_number_keys_follow_primary_nav() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.nav.current_path(), "/services");
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.nav.current_path(), "/contact");
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.nav.current_path(), "/");
    }

    #[test]
    fn test_menu_toggle_and_escape() {
        let mut app = App::default();
        app.set_width(60);

        press(&mut app, KeyCode::Char('m'));
        assert!(app.nav.is_menu_open());
        press(&mut app, KeyCode::Esc);
        assert!(!app.nav.is_menu_open());
    }

    #[test]
    fn test_nav_key_closes_open_menu() {
        let mut app = App::default();
        app.set_width(60);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.nav.current_path(), "/about");
        assert!(!app.nav.is_menu_open());
    }

    #[test]
    fn test_address_bar_navigation() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('g'));
        assert!(matches!(app.mode, AppMode::AddressBar));
        assert_eq!(app.address_input, "/");

        type_text(&mut app, "about");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.mode, AppMode::Browsing));
        assert_eq!(app.nav.current_path(), "/about");
    }

    #[test]
    fn test_ctrl_l_opens_address_bar() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert!(matches!(app.mode, AppMode::AddressBar));
    }

    #[test]
    fn test_address_bar_escape_keeps_path() {
        let mut app = App::new("/clients", DEFAULT_BREAKPOINT);
        press(&mut app, KeyCode::Char('g'));
        type_text(&mut app, "xyz");
        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.mode, AppMode::Browsing));
        assert_eq!(app.nav.current_path(), "/clients");
        assert!(app.address_input.is_empty());
    }

    #[test]
    fn test_edit_line_is_utf8_safe() {
        let mut text = String::from("/a");
        let mut cursor = text.len();

        assert!(edit_line(&mut text, &mut cursor, KeyCode::Char('é')));
        assert_eq!(text, "/aé");
        edit_line(&mut text, &mut cursor, KeyCode::Left);
        assert_eq!(cursor, 2);
        edit_line(&mut text, &mut cursor, KeyCode::Right);
        assert_eq!(cursor, 4);
        assert!(edit_line(&mut text, &mut cursor, KeyCode::Backspace));
        assert_eq!(text, "/a");

        edit_line(&mut text, &mut cursor, KeyCode::Home);
        assert!(!edit_line(&mut text, &mut cursor, KeyCode::Backspace));
        assert!(edit_line(&mut text, &mut cursor, KeyCode::Delete));
        assert_eq!(text, "a");
    }

    #[test]
    fn test_search_follows_first_hit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('/'));
        assert!(matches!(app.mode, AppMode::Search));

        type_text(&mut app, "story");
        assert!(!app.search_results.is_empty());
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, AppMode::Browsing));
        assert_eq!(app.nav.current_path(), "/about");
        assert!(app.status_message.as_deref().is_some_and(|s| s.contains("for 'story'")));
    }

    #[test]
    fn test_search_without_hits_stays_put() {
        let mut app = App::new("/clients", DEFAULT_BREAKPOINT);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "quantum");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.nav.current_path(), "/clients");
        assert_eq!(
            app.status_message.as_deref(),
            Some("No results found for 'quantum'")
        );
    }

    #[test]
    fn test_back_and_forward_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('3'));

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.nav.current_path(), "/about");
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.nav.current_path(), "/services");
    }

    #[test]
    fn test_tab_then_enter_follows_hero_link() {
        let mut app = App::default();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused(), Some(Focusable::PageLink(0)));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.current_path(), "/services");
    }

    #[test]
    fn test_contact_form_typing() {
        let mut app = App::new("/contact", DEFAULT_BREAKPOINT);
        app.begin_contact_edit(ContactField::Name);

        type_text(&mut app, "Rahim");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.contact.editing, Some(ContactField::Phone));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.contact.editing, Some(ContactField::Message));

        type_text(&mut app, "Hi");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "there");
        assert_eq!(app.contact.values.message, "Hi\nthere");

        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.mode, AppMode::Browsing));
        assert_eq!(app.contact.values.name, "Rahim");
    }

    #[test]
    fn test_help_mode_scrolls_and_closes() {
        let mut app = App::default();
        press(&mut app, KeyCode::F(1));
        assert!(matches!(app.mode, AppMode::Help));

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.help_scroll, 6);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.help_scroll, 5);

        press(&mut app, KeyCode::Char('q'));
        assert!(matches!(app.mode, AppMode::Browsing));
    }

    #[test]
    fn test_scroll_keys_move_viewport() {
        let mut app = App::default();
        app.viewport.resize(10, 100);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.viewport.offset(), 1);
        press(&mut app, KeyCode::End);
        assert_eq!(app.viewport.offset(), app.viewport.max_offset());
        press(&mut app, KeyCode::Home);
        assert_eq!(app.viewport.offset(), 0);
    }
}
