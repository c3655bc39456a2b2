use crate::app::state::App;
use crossterm::event::KeyCode;
use site_directory::Screen;

mod details;
mod help;
mod list;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.screen() {
        Screen::List => list::handle_list_input(app, key),
        Screen::Detail => details::handle_details_input(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::dispatch_input;
    use crate::app::state::App;
    use crate::loader::tests::SAMPLE;
    use crate::loader::{LoadError, SiteSource};
    use crossterm::event::KeyCode;
    use site_directory::{Screen, Site, ViewModel};

    fn loaded_app() -> Result<App, serde_json::Error> {
        let mut app = App::new(&SiteSource::parse("Sites.json"), "");
        app.finish_loading(Ok(Site::parse_collection(SAMPLE)?));
        Ok(app)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            dispatch_input(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn search_select_and_back() -> Result<(), serde_json::Error> {
        let mut app = loaded_app()?;

        type_text(&mut app, "a1");
        let ViewModel::List(list) = app.view() else {
            panic!("expected list view");
        };
        assert_eq!(list.rows.len(), 1);
        assert_eq!(list.rows[0].site.identifier, "A1");

        dispatch_input(&mut app, KeyCode::Enter);
        let ViewModel::Detail(detail) = app.view() else {
            panic!("expected detail view");
        };
        assert_eq!(detail.title, "Details for A1");
        assert!(detail.map_url.contains("query=1,2"));
        assert!(!app.view().shows_search());

        dispatch_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::List);
        assert_eq!(app.search_query, "a1");
        let ViewModel::List(list) = app.view() else {
            panic!("expected list view");
        };
        assert_eq!(list.rows.len(), 1);
        assert_eq!(list.rows[0].site.identifier, "A1");
        Ok(())
    }

    #[test]
    fn letters_in_details_do_not_edit_search() -> Result<(), serde_json::Error> {
        let mut app = loaded_app()?;
        dispatch_input(&mut app, KeyCode::Enter);

        dispatch_input(&mut app, KeyCode::Char('x'));

        assert_eq!(app.screen(), Screen::Detail);
        assert_eq!(app.search_query, "");
        Ok(())
    }

    #[test]
    fn arrows_move_within_filtered_rows() -> Result<(), serde_json::Error> {
        let mut app = loaded_app()?;

        dispatch_input(&mut app, KeyCode::Down);
        dispatch_input(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index, 1);

        dispatch_input(&mut app, KeyCode::Enter);
        assert_eq!(
            app.selected_site.as_ref().map(|site| site.identifier.as_str()),
            Some("B2")
        );
        Ok(())
    }

    #[test]
    fn escape_clears_search_then_quits() -> Result<(), serde_json::Error> {
        let mut app = loaded_app()?;
        type_text(&mut app, "b");

        dispatch_input(&mut app, KeyCode::Esc);
        assert!(app.search_query.is_empty());
        assert!(app.running);

        dispatch_input(&mut app, KeyCode::Esc);
        assert!(!app.running);
        Ok(())
    }

    #[test]
    fn help_swallows_keys_until_closed() -> Result<(), serde_json::Error> {
        let mut app = loaded_app()?;

        dispatch_input(&mut app, KeyCode::F(1));
        dispatch_input(&mut app, KeyCode::Char('a'));
        assert!(app.search_query.is_empty());

        dispatch_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);
        Ok(())
    }

    #[test]
    fn enter_after_failed_load_stays_on_error() {
        let mut app = App::new(&SiteSource::parse("Sites.json"), "");
        app.finish_loading(Err(LoadError::Status(404)));

        dispatch_input(&mut app, KeyCode::Enter);

        assert_eq!(app.view(), ViewModel::load_failed());
    }
}
