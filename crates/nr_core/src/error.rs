use thiserror::Error;

/// Message shown to readers whenever the article list cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "뉴스를 불러올 수 없습니다.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The single error a reader ever sees for a failed load.
///
/// Network failures, bad statuses, malformed JSON and schema violations all
/// collapse into this value. The cause is kept for logs only and never leaks
/// into the display message.
#[derive(Error, Debug)]
#[error("{}", LOAD_ERROR_MESSAGE)]
pub struct LoadError {
    #[source]
    cause: Error,
}

impl LoadError {
    pub fn new(cause: Error) -> Self {
        Self { cause }
    }

    pub fn cause(&self) -> &Error {
        &self.cause
    }
}

impl From<Error> for LoadError {
    fn from(cause: Error) -> Self {
        Self::new(cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_message_is_generic() {
        let status = LoadError::from(Error::Status(404));
        let parse = LoadError::from(Error::Validation("missing field `url`".to_string()));

        assert_eq!(status.to_string(), LOAD_ERROR_MESSAGE);
        assert_eq!(parse.to_string(), LOAD_ERROR_MESSAGE);
        assert!(matches!(status.cause(), Error::Status(404)));
    }

    #[test]
    fn test_template_errors_convert() {
        let err = Error::from(minijinja::Error::new(
            minijinja::ErrorKind::SyntaxError,
            "unexpected end of block",
        ));
        assert!(matches!(err, Error::Template(_)));
        assert!(err.to_string().starts_with("Template error:"));
    }
}
