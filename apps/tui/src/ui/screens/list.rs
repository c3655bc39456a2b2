use crate::app::{App, LoadState};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;
use site_directory::ListView;
use throbber_widgets_tui::{Throbber, BRAILLE_SIX};

const ROW_HEIGHT: u16 = 2;

pub fn render_search(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Search sites")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let line = TextLine::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::styled(app.search_query.clone(), Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::Gray)),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_loading(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default().title("Sites").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let throbber = Throbber::default()
        .label(format!("Loading {}...", app.source_label))
        .style(Style::default().fg(Color::Cyan))
        .throbber_set(BRAILLE_SIX);

    let mut state = app.throbber.clone();
    f.render_stateful_widget(throbber, inner, &mut state);
}

pub fn render_load_error(message: &str, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Sites")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let paragraph = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

pub fn render_site_list(app: &App, list: &ListView, f: &mut Frame<'_>, area: Rect) {
    if let Some(message) = list.message {
        let block = Block::default()
            .title("Sites")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let total_rows = list.rows.len();
    let max_visible_rows = (area.height.saturating_sub(2) / ROW_HEIGHT) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_index);

    let rows = list
        .rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, row)| {
            let style = if index == app.selected_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let text = Text::from(vec![
                TextLine::from(Span::styled(
                    row.heading(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                TextLine::from(Span::styled(
                    row.devices(),
                    Style::default().fg(Color::Gray),
                )),
            ]);

            Row::new(vec![Cell::from(text)])
                .height(ROW_HEIGHT)
                .style(style)
        });

    let table = Table::new(rows, [Constraint::Percentage(100)]).block(
        Block::default()
            .title(format!("Sites ({total_rows} of {})", list.total))
            .borders(Borders::ALL),
    );

    f.render_widget(table, area);
}

pub fn render_list_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let status_color = if matches!(app.load_state, LoadState::Failed) {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        TextLine::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(status_color),
        )),
        TextLine::from(vec![
            Span::styled("Type", key_style),
            Span::raw(": Search   "),
            Span::styled("↑/↓", key_style),
            Span::raw(": Navigate   "),
            Span::styled("Enter", key_style),
            Span::raw(": Details   "),
            Span::styled("ESC", key_style),
            Span::raw(": Clear search / Quit   "),
            Span::styled("F1", key_style),
            Span::raw(": Help"),
        ]),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
