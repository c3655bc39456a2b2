pub mod screens;

use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_input(app: &mut App, key: KeyCode) {
    screens::dispatch_input(app, key);
}

/// Entry point for key presses from the terminal. Ctrl+C quits from any
/// screen since raw mode swallows the signal.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    handle_input(app, key.code);
}

#[cfg(test)]
mod tests {
    use super::handle_key_event;
    use crate::app::state::App;
    use crate::loader::SiteSource;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn ctrl_c_quits_instead_of_typing() {
        let mut app = App::new(&SiteSource::parse("Sites.json"), "");

        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(!app.running);
        assert_eq!(app.search_query, "");
    }

    #[test]
    fn plain_c_goes_to_search() {
        let mut app = App::new(&SiteSource::parse("Sites.json"), "");

        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));

        assert!(app.running);
        assert_eq!(app.search_query, "c");
    }
}
