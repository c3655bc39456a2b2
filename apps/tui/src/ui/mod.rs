// UI module for site_finder
// Thin adapter that draws the directory view model with ratatui

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::Frame;
use site_directory::ViewModel;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let view = app.view();
    let area = f.area().inner(Margin::new(1, 0));

    match &view {
        ViewModel::Detail(detail) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(5), Constraint::Length(3)])
                .split(area);

            screens::details::render_site_details(detail, f, chunks[0]);
            screens::details::render_details_status(app, f, chunks[1]);
        }
        ViewModel::Loading | ViewModel::LoadFailed(_) | ViewModel::List(_) => {
            let chunks = list_layout(area);

            screens::list::render_search(app, f, chunks[0]);
            match &view {
                ViewModel::Loading => screens::list::render_loading(app, f, chunks[1]),
                ViewModel::LoadFailed(message) => {
                    screens::list::render_load_error(message, f, chunks[1]);
                }
                ViewModel::List(list) => {
                    screens::list::render_site_list(app, list, f, chunks[1]);
                }
                ViewModel::Detail(_) => {}
            }
            screens::list::render_list_status(app, f, chunks[2]);
        }
    }

    if app.show_help {
        widgets::help::render_help_popup(f);
    }
}

fn list_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Site list
            Constraint::Length(3), // Status and shortcuts
        ])
        .split(area)
        .to_vec()
}
