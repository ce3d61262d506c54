use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Error taxonomy shared by the domain logic, the repositories and the HTTP
/// layer. Messages are what callers see; the status mapping lives in the
/// server crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
pub enum ClueError {
    #[error("missing required field: {field}")]
    MissingField { field: String },
    #[error("invalid hint type: {requested}")]
    InvalidHintType { requested: String },
    #[error("invalid word classification: {reason}")]
    InvalidClassification { reason: String },
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("only the clue's author may classify it")]
    NotClueAuthor,
    #[error("group not found")]
    GroupNotFound,
    #[error("clue not found")]
    ClueNotFound,
    #[error("member not found or not in this group")]
    MemberNotInGroup,
    #[error("you have already solved this clue")]
    AlreadySolved,
    #[error("all letters have been revealed already")]
    AllLettersRevealed,
    #[error("clue does not have word classification data")]
    NoClassificationData,
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl ClueError {
    /// Wrap an unexpected failure (usually a database error) without losing
    /// its message.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        ClueError::Internal {
            message: err.to_string(),
        }
    }
}
