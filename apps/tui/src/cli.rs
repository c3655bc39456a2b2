use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "site_finder", version, about = "Searchable site directory")]
pub struct CliArgs {
    /// Print the matching sites and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless results as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Site data file or http(s) URL (default: Sites.json)
    #[arg(long, value_name = "PATH|URL")]
    pub source: Option<String>,

    /// Start with this search text
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(source) = &self.source {
            std::env::set_var("SITES_SOURCE", source);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("SITES_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
