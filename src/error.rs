//! Errors surfaced to the user

use std::process::ExitCode;

use thiserror::Error;

use crate::storage;

/// Everything that can end a command early
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing command line argument
    #[error("{0}")]
    Usage(String),

    /// The referenced note does not exist
    #[error("Note with ID {0} not found")]
    NotFound(i32),

    /// A storage interaction failed
    #[error(transparent)]
    Storage(#[from] storage::Error),

    /// The schema could not be established on startup
    #[error("Could not create the database schema: {0}")]
    FatalSchema(String),

    /// Reading from or writing to the terminal failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration from the environment is invalid
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// At least one of the requested field updates failed
    #[error("The note was not fully updated")]
    UpdateIncomplete,
}

impl Error {
    /// Error for a storage that could not be set up
    ///
    /// A schema that cannot be established is fatal, anything else is a plain storage error
    pub fn from_setup(err: storage::Error) -> Self {
        match err {
            storage::Error::Schema(reason) => Error::FatalSchema(reason),
            err => Error::Storage(err),
        }
    }

    /// Status code for the process when the command fails with this error
    pub fn code(&self) -> u8 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }

    /// Exit code for the process when the command fails with this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// Result type for all commands
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_usage_errors_exit_with_two() {
        assert_eq!(2, Error::Usage("Missing note ID".to_string()).code());
    }

    #[test]
    fn test_other_errors_exit_with_one() {
        let errors = [
            Error::NotFound(999),
            Error::Storage(storage::Error::Connection("connection reset".to_string())),
            Error::Storage(storage::Error::NotFound(3)),
            Error::FatalSchema("permission denied".to_string()),
            Error::Io(io::Error::from(io::ErrorKind::InvalidData)),
            Error::Config("unknown time zone".to_string()),
            Error::UpdateIncomplete,
        ];

        for err in errors {
            assert_eq!(1, err.code(), "{err:?}");
        }
    }

    #[test]
    fn test_setup_errors() {
        let err = Error::from_setup(storage::Error::Schema("permission denied".to_string()));
        assert!(matches!(&err, Error::FatalSchema(reason) if reason == "permission denied"));
        assert_eq!(
            "Could not create the database schema: permission denied",
            err.to_string()
        );

        let err = Error::from_setup(storage::Error::Connection("refused".to_string()));
        assert!(matches!(
            err,
            Error::Storage(storage::Error::Connection(reason)) if reason == "refused"
        ));
    }
}
