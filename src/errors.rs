use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from the server logic (routing, missing resources,
/// bad form input) or from startup (fixtures, configuration).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    FixtureError(String),
    ConfigError(String),
    XlsxError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::FixtureError(_)
            | ServerError::ConfigError(_)
            | ServerError::XlsxError(_)
            | ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::FixtureError(msg) => write!(f, "Fixture Error: {msg}"),
            ServerError::ConfigError(msg) => write!(f, "Configuration Error: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
