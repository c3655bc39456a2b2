use crate::app::App;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use site_directory::DetailView;

pub fn render_site_details(detail: &DetailView, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(detail.title.clone())
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut lines = vec![
        field("Site", &detail.identifier),
        field("Name", &detail.name),
        field("Address", &detail.address),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Map: ", label_style()),
            Span::styled(
                detail.map_url.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        TextLine::from(""),
        TextLine::from(Span::styled("Devices:", label_style())),
    ];

    lines.extend(detail.device_lines.iter().map(|line| TextLine::from(format!("  {line}"))));
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled("Other Details:", label_style())));
    lines.extend(
        detail
            .other_detail_lines
            .iter()
            .map(|line| TextLine::from(format!("  {line}"))),
    );
    lines.push(TextLine::from(""));
    lines.push(field("Coordinates", &detail.coordinates));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

pub fn render_details_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        TextLine::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(Color::Green),
        )),
        TextLine::from(vec![
            Span::styled("ESC", key_style),
            Span::raw(": Back to List   "),
            Span::styled("Enter/o", key_style),
            Span::raw(": Open Google Maps   "),
            Span::styled("q", key_style),
            Span::raw(": Quit"),
        ]),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn label_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn field(label: &str, value: &str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(format!("{label}: "), label_style()),
        Span::raw(value.to_string()),
    ])
}
