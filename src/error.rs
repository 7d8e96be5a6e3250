use std::error::Error;
use std::fmt;

/// Custom Error and Result types to unify errors from all sources.
pub type SiteResult<T> = Result<T, SiteError>;

#[derive(Debug)]
pub enum SiteError {
    Http(String),
    /// Page-level "not found" carrying the message shown to the user.
    NotFound(String),
    /// Page-level redirect (status code, target location).
    Redirect(u16, String),
    Parse,
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SiteError::Http(s) => write!(f, "HTTP Error: {}", s),
            SiteError::NotFound(s) => write!(f, "Not Found: {}", s),
            SiteError::Redirect(status, location) => {
                write!(f, "Redirect ({}): {}", status, location)
            }
            SiteError::Parse => write!(f, "Parse Error"),
        }
    }
}

impl Error for SiteError {}

impl From<reqwest::Error> for SiteError {
    fn from(error: reqwest::Error) -> Self {
        SiteError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(_: serde_json::Error) -> Self {
        SiteError::Parse
    }
}
