use clap::Parser;
use color_eyre::Result;
use site_finder::app::App;
use site_finder::cli::CliArgs;
use site_finder::config::AppConfig;
use site_finder::{event, logging, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = AppConfig::from_env();

    let headless = args.headless || !is_terminal();
    logging::init(&config, headless)?;

    let search = args.search.unwrap_or_default();

    if headless {
        return event::run_headless(&config, &search, args.json).await;
    }

    // Fetch the directory in the background while the UI starts
    let mut app = App::new(&config.source, search);
    app.start_loading(config.source.clone());

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
