use site_directory::Site;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Where the directory data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSource {
    File(PathBuf),
    Url(String),
}

impl SiteSource {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    /// Short name for status lines, e.g. `Sites.json`.
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path
                .file_name()
                .and_then(|name| name.to_str())
                .map_or_else(|| path.display().to_string(), str::to_string),
            Self::Url(url) => url
                .rsplit('/')
                .find(|segment| !segment.is_empty())
                .unwrap_or(url)
                .to_string(),
        }
    }
}

impl fmt::Display for SiteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("could not parse site data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("site loader stopped before finishing")]
    Interrupted,
}

/// Fetches and parses the whole collection. No retries.
pub async fn load_sites(source: &SiteSource) -> Result<Vec<Site>, LoadError> {
    let body = match source {
        SiteSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?
        }
        SiteSource::Url(url) => fetch(url).await?,
    };

    let sites = Site::parse_collection(&body)?;
    tracing::info!(count = sites.len(), %source, "loaded site data");
    Ok(sites)
}

async fn fetch(url: &str) -> Result<String, LoadError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    Ok(response.text().await?)
}
