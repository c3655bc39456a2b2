use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(70, 70, f.area());

    let block = Block::default()
        .title("Help (F1 / ESC to close)")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Text::from(help_lines()))
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn help_lines() -> Vec<TextLine<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let shortcut = |keys: &'static str, action: &'static str| {
        TextLine::from(vec![
            Span::styled(format!("  {keys}"), key),
            Span::raw(format!(" - {action}")),
        ])
    };

    let mut lines = vec![
        TextLine::from(Span::styled("Site list:", heading)),
        shortcut("any text", "Filter sites by identifier"),
        shortcut("Backspace", "Delete last search character"),
        shortcut("↑/↓ PgUp/PgDn Home/End", "Move selection"),
        shortcut("Enter", "Show site details"),
        shortcut("ESC", "Clear search, or quit when empty"),
        TextLine::from(""),
        TextLine::from(Span::styled("Site details:", heading)),
        shortcut("Enter / o", "Open the location in Google Maps"),
        shortcut("ESC / Backspace / b", "Back to the list"),
        shortcut("q", "Quit"),
        shortcut("Ctrl+C", "Quit from any screen"),
        TextLine::from(""),
        TextLine::from(Span::styled("CLI Options:", heading)),
    ];

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
