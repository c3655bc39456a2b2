use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use site_directory::{filter_sites, Site, LOAD_ERROR_MESSAGE};
use std::fmt::Write as _;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_key_event, App};
use crate::config::AppConfig;
use crate::loader::load_sites;
use crate::ui;

/// Configure event poll timeout (ms)
const EVENT_POLL_TIMEOUT: u64 = 50;

/// Load the directory, print the sites matching `search` and exit.
pub async fn run_headless(config: &AppConfig, search: &str, json: bool) -> Result<()> {
    let sites = match load_sites(&config.source).await {
        Ok(sites) => sites,
        Err(e) => {
            tracing::error!("Could not load {}: {e}", config.source);
            eprintln!("{LOAD_ERROR_MESSAGE}");
            return Err(e.into());
        }
    };

    print!("{}", headless_report(&sites, search, json)?);
    Ok(())
}

fn headless_report(sites: &[Site], search: &str, json: bool) -> Result<String> {
    let matches = filter_sites(sites, search);

    if json {
        let mut report = serde_json::to_string_pretty(&matches)?;
        report.push('\n');
        return Ok(report);
    }

    let mut report = String::new();
    for site in &matches {
        let devices = site.device_lines().into_iter().next().unwrap_or_default();
        writeln!(report, "{} | {} | {devices}", site.identifier, site.city)?;
    }
    writeln!(report, "\n{} of {} sites", matches.len(), sites.len())?;

    Ok(report)
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.poll_loader();
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_key_event(app, key);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore non-key events
                }
            }
        }

        // Let the loader task make progress between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}
