use mongodb::error::Error as MongoError;
use thiserror::Error;

/// Failure of one step of the connect, insert, find sequence.
///
/// Every variant ends the run with exit code 1; the split only tells the
/// operator which call failed. The cause is part of the message, not a
/// separate source.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid connection options: {0}")]
    Options(MongoError),
    #[error("Failed to connect to the database: {0}")]
    Connect(MongoError),
    #[error("Failed to insert reading: {0}")]
    Insert(MongoError),
    #[error("Failed to fetch readings: {0}")]
    Find(MongoError),
    #[error("Failed to render documents: {0}")]
    Render(serde_json::Error),
    #[error("Failed to write output: {0}")]
    Output(std::io::Error),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn every_failure_exits_with_one() {
        let io = AppError::Output(std::io::Error::other("broken pipe"));
        assert_eq!(io.exit_code(), 1);

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(AppError::Render(json).exit_code(), 1);
    }

    #[test]
    fn message_names_the_step() {
        let err = AppError::Output(std::io::Error::other("broken pipe"));
        assert_eq!(err.to_string(), "Failed to write output: broken pipe");
    }

    #[test]
    fn cause_is_reported_once() {
        let err = AppError::Output(std::io::Error::other("broken pipe"));
        assert!(err.source().is_none());
    }
}
