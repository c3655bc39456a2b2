use crate::app::state::App;
use crossterm::event::KeyCode;

const PAGE_ROWS: usize = 5;

pub fn handle_list_input(app: &mut App, key: KeyCode) {
    let total_rows = app.filtered_sites().len();

    match key {
        KeyCode::Esc => {
            if app.search_query.is_empty() {
                app.running = false;
            } else {
                app.clear_search();
            }
        }
        KeyCode::Enter => {
            if total_rows > 0 {
                app.open_selected();
            }
        }
        KeyCode::Char(ch) => {
            app.push_search_char(ch);
        }
        KeyCode::Backspace => {
            app.pop_search_char();
        }
        KeyCode::Up => {
            app.selected_index = app.selected_index.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.selected_index + 1 < total_rows {
                app.selected_index += 1;
            }
        }
        KeyCode::PageUp => {
            app.selected_index = app.selected_index.saturating_sub(PAGE_ROWS);
        }
        KeyCode::PageDown => {
            if total_rows > 0 {
                app.selected_index = (app.selected_index + PAGE_ROWS).min(total_rows - 1);
            }
        }
        KeyCode::Home => {
            app.selected_index = 0;
        }
        KeyCode::End => {
            app.selected_index = total_rows.saturating_sub(1);
        }
        _ => {}
    }
}
