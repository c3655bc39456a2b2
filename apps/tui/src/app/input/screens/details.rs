use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_details_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
            app.go_back_to_list();
        }
        KeyCode::Enter | KeyCode::Char('o') => {
            app.open_map_link();
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}
