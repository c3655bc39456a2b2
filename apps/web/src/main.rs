mod state;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use site_directory::{DetailView, ListView, Site, ViewModel};
use state::{Effect, WebState};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

const SITES_PATH: &str = "Sites.json";

fn main() -> io::Result<()> {
    let state = Rc::new(RefCell::new(WebState::default()));

    spawn_local(fetch_sites(state.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |event| {
            let effect = state.borrow_mut().handle_key(&event.code);
            if let Some(Effect::OpenLink(url)) = effect {
                open_in_new_tab(&url);
            }
        }
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("Site Directory")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        let state = state.borrow();
        render_view(&state, &state.view(), f, inner);
    });

    Ok(())
}

fn render_view(state: &WebState, view: &ViewModel, f: &mut Frame<'_>, area: Rect) {
    if let ViewModel::Detail(detail) = view {
        render_detail(detail, f, area);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    render_search(&state.search, f, layout[0]);

    match view {
        ViewModel::Loading => {
            render_message(&format!("Loading {SITES_PATH}..."), Color::Gray, f, layout[1]);
        }
        ViewModel::LoadFailed(message) => render_message(message, Color::Red, f, layout[1]),
        ViewModel::List(list) => render_list(list, state.selected_index, f, layout[1]),
        ViewModel::Detail(_) => {}
    }

    let hint = TextLine::from(Span::styled(
        "Type to search  ↑/↓ select  Enter details  Esc clear",
        Style::default().fg(Color::Gray),
    ));
    f.render_widget(
        Paragraph::new(hint).alignment(Alignment::Center),
        layout[2],
    );
}

fn render_search(search: &str, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Search sites")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let line = TextLine::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::raw(search.to_string()),
        Span::styled("█", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_message(message: &str, color: Color, f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(message)
        .block(Block::default().title("Sites").borders(Borders::ALL))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_list(list: &ListView, selected_index: usize, f: &mut Frame<'_>, area: Rect) {
    if let Some(message) = list.message {
        render_message(message, Color::Yellow, f, area);
        return;
    }

    let items = list
        .rows
        .iter()
        .map(|row| {
            ListItem::new(Text::from(vec![
                TextLine::from(Span::styled(
                    row.heading(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                TextLine::from(Span::styled(
                    row.devices(),
                    Style::default().fg(Color::Gray),
                )),
            ]))
        })
        .collect::<Vec<_>>();

    let widget = List::new(items)
        .block(
            Block::default()
                .title(format!("Sites ({} of {})", list.rows.len(), list.total))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default().with_selected(Some(selected_index));
    f.render_stateful_widget(widget, area, &mut list_state);
}

fn render_detail(detail: &DetailView, f: &mut Frame<'_>, area: Rect) {
    let label = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        TextLine::from(vec![Span::styled("Site: ", label), Span::raw(detail.identifier.clone())]),
        TextLine::from(vec![Span::styled("Name: ", label), Span::raw(detail.name.clone())]),
        TextLine::from(vec![
            Span::styled("Address: ", label),
            Span::raw(detail.address.clone()),
        ]),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("[Enter] Open Google Maps: ", label),
            Span::styled(
                detail.map_url.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        TextLine::from(""),
        TextLine::from(Span::styled("Devices:", label)),
    ];
    lines.extend(detail.device_lines.iter().map(|line| TextLine::from(line.clone())));
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled("Other Details:", label)));
    lines.extend(
        detail
            .other_detail_lines
            .iter()
            .map(|line| TextLine::from(line.clone())),
    );
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(vec![
        Span::styled("Coordinates: ", label),
        Span::raw(detail.coordinates.clone()),
    ]));
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "[Esc] Back to List",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(detail.title.clone())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if window.open_with_url_and_target(url, "_blank").is_err() {
        web_sys::console::error_1(&format!("Could not open {url}").into());
    }
}

async fn fetch_sites(store: Rc<RefCell<WebState>>) {
    match fetch_site_data().await {
        Ok(sites) => store.borrow_mut().loaded(sites),
        Err(message) => {
            web_sys::console::error_1(&format!("Could not load {SITES_PATH}: {message}").into());
            store.borrow_mut().failed();
        }
    }
}

async fn fetch_site_data() -> Result<Vec<Site>, String> {
    let window = web_sys::window().ok_or("no window")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(SITES_PATH, &opts)
        .map_err(|e| format!("bad request: {e:?}"))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("network error: {e:?}"))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| "Failed to read response".to_string())?;

    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|e| format!("Failed to read body: {e:?}"))?;
    let body = wasm_bindgen_futures::JsFuture::from(text_promise)
        .await
        .map_err(|e| format!("Failed to read body: {e:?}"))?
        .as_string()
        .ok_or("body is not text")?;

    Site::parse_collection(&body).map_err(|e| format!("Failed to parse {SITES_PATH}: {e}"))
}
