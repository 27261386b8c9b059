use thiserror::Error;

/// Failure of a single request to the download index API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network failure, or a non-2xx status with its best available message
    #[error("{0}")]
    Transport(String),

    /// Body was not valid JSON
    #[error("{0}")]
    Decode(String),

    /// Valid JSON, but neither a list nor an error envelope
    #[error("{0}")]
    MalformedResponse(&'static str),
}

/// Reasons a "show downloadable files" submission is refused before any request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please select both a product and a version.")]
    IncompleteSelection,

    #[error("Selected version details not found. Please re-select.")]
    StaleSelection,
}

/// Copy-to-clipboard failures. Logged, never shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,

    #[error("clipboard contents did not match the copied link")]
    Mismatch,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid API base URL '{url}': {source}")]
    InvalidApiBase {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Startup failure of the API client
#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
