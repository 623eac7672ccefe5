use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Missing SUPABASE env: {}", .0.join(", "))]
    MissingConfiguration(Vec<&'static str>),

    #[error("Invalid SUPABASE_URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid client header: {0}")]
    InvalidHeader(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

impl AdminError {
    /// Names of the environment variables that were absent or empty, if this
    /// is a configuration error.
    #[must_use]
    pub fn missing_variables(&self) -> &[&'static str] {
        match self {
            AdminError::MissingConfiguration(names) => names,
            _ => &[],
        }
    }
}

impl From<reqwest::Error> for AdminError {
    fn from(error: reqwest::Error) -> Self {
        AdminError::HttpClient(error.to_string())
    }
}

impl From<url::ParseError> for AdminError {
    fn from(error: url::ParseError) -> Self {
        AdminError::InvalidUrl(error.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AdminError {
    fn from(error: reqwest::header::InvalidHeaderValue) -> Self {
        AdminError::InvalidHeader(error.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderName> for AdminError {
    fn from(error: reqwest::header::InvalidHeaderName) -> Self {
        AdminError::InvalidHeader(error.to_string())
    }
}
