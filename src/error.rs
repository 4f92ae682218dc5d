use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Incorrect object identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Cannot unregister '{0}': no object is registered under it")]
    NotRegistered(String),

    #[error("{shape} has no field '{field}'")]
    UnknownField { shape: &'static str, field: &'static str },

    #[error("Wrong user type: '{0}'")]
    UnknownUserType(String),

    #[error("Unsupported platform: '{0}'")]
    UnsupportedPlatform(String),

    #[error("Unknown pattern: '{0}' (try `catalog list`)")]
    UnknownPattern(String),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PatternError {
    pub fn invalid_identifier(id: impl ToString) -> Self {
        Self::InvalidIdentifier(id.to_string())
    }

    pub fn not_registered(id: impl ToString) -> Self {
        Self::NotRegistered(id.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identifier_display() {
        let err = PatternError::invalid_identifier(7);
        assert_eq!(err.to_string(), "Incorrect object identifier: 7");
    }

    #[test]
    fn test_unknown_field_display() {
        let err = PatternError::UnknownField {
            shape: "Circle",
            field: "corner_radius",
        };
        assert_eq!(err.to_string(), "Circle has no field 'corner_radius'");
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: PatternError = io_err.into();
        assert!(matches!(err, PatternError::Io(_)));
    }
}
