//! Key mapping from terminal events to app actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_glitch_types::AppAction;

/// Map keyboard input to app actions.
///
/// While the waitlist form is open, printable characters feed the email
/// field; otherwise only the form-open key is live.
pub fn handle_key_event(key: KeyEvent, form_open: bool) -> Option<AppAction> {
    if form_open {
        return match key.code {
            KeyCode::Esc => Some(AppAction::CloseForm),
            KeyCode::Enter => Some(AppAction::Submit),
            KeyCode::Backspace => Some(AppAction::Backspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppAction::Input(c))
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(AppAction::OpenForm),
        _ => None,
    }
}

/// Check if key should quit the app.
///
/// While the form is open, `q` is a regular input character; ctrl-c always
/// quits.
pub fn should_quit(key: KeyEvent, form_open: bool) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    !form_open && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_background_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w')), false),
            Some(AppAction::OpenForm)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x')), false), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter), false), None);
    }

    #[test]
    fn test_form_editing_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a')), true),
            Some(AppAction::Input('a'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('@')), true),
            Some(AppAction::Input('@'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace), true),
            Some(AppAction::Backspace)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter), true),
            Some(AppAction::Submit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc), true),
            Some(AppAction::CloseForm)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q')), false));
        assert!(should_quit(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            true
        ));
        // `q` types into the email field while the form is open.
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q')), true));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x')), false));
    }
}
