use thiserror::Error;

/// Errors raised while fetching or validating portfolio data.
/// Any of these aborts the render pass; the page falls back to the
/// error panel.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("invalid data URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid JSON in portfolio data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("no portfolio data loaded")]
    NotLoaded,
}

/// Errors from reading a config file. Callers fall back to built-in
/// defaults instead of failing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Non-fatal render problems. These are logged and the offending
/// fragment or section is skipped; a render pass never aborts on them.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown mount point: {0}")]
    MissingMount(String),

    #[error("section {0} is not an object, skipping")]
    MalformedSection(String),
}

/// Preference store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("database error: {0}")]
    Sql(#[from] rusqlite::Error),
}
