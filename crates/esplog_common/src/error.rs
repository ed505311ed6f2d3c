//! Error types for esplogctl.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid log level '{input}'. Allowed: NONE, ERROR, WARN, INFO, DEBUG, VERBOSE (or 0..5)")]
    InvalidLevel { input: String },

    #[error("No log tags found. Try --tag '*' or add --scan-root directories.")]
    NoTagsFound,

    #[error("Publish failed: {0}")]
    Publish(String),

    #[error("Password must not be empty.")]
    EmptyPassword,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error. A rejected level exits with a
    /// code distinct from transport failures so wrappers can tell an
    /// operator typo from a broker problem.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidLevel { .. } => 2,
            Error::NoTagsFound
            | Error::Publish(_)
            | Error::EmptyPassword
            | Error::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_has_distinct_exit_code() {
        let err = Error::InvalidLevel {
            input: "bogus".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert_ne!(err.exit_code(), Error::Publish("x".to_string()).exit_code());
    }

    #[test]
    fn test_invalid_level_message_lists_allowed_names() {
        let msg = Error::InvalidLevel {
            input: "loud".to_string(),
        }
        .to_string();
        for name in ["NONE", "ERROR", "WARN", "INFO", "DEBUG", "VERBOSE"] {
            assert!(msg.contains(name), "message should list {}: {}", name, msg);
        }
        assert!(msg.contains("loud"));
    }
}
