use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the identity contract.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// A caller violated an API contract, e.g. asked for data in the wrong wiki scope.
    #[error("Precondition failed: {message} {location}")]
    Precondition {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid user name: {message} {location}")]
    InvalidName {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid wiki ID: {value:?} {location}")]
    InvalidWikiId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid actor scope policy: {value} {location}")]
    InvalidActorScopePolicy {
        value: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    /// Creates Precondition error at caller location.
    #[track_caller]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidName error at caller location.
    #[track_caller]
    pub fn invalid_name(message: impl Into<String>) -> Self {
        Self::InvalidName {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether this error signals a violated contract (programmer error).
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition { .. })
    }

    /// Stable machine-readable code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Precondition { .. } => "PRECONDITION_FAILED",
            Self::InvalidName { .. } => "INVALID_NAME",
            Self::InvalidWikiId { .. } => "INVALID_WIKI_ID",
            Self::InvalidActorScopePolicy { .. } => "INVALID_ACTOR_SCOPE_POLICY",
        }
    }
}

pub type Result<T> = StdResult<T, IdentityError>;
