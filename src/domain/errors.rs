use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("No delivery endpoint is configured for the contact form")]
    SubmissionUnavailable,
}

pub type SiteResult<T> = Result<T, SiteError>;
