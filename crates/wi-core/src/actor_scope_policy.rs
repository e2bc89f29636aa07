use crate::{IdentityError, Result as IdentityResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How the actor ID accessor reacts to a wiki scope mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActorScopePolicy {
    /// Log a deprecation warning and return the actor ID anyway
    #[default]
    Warn,
    /// Fail with a precondition error, like the user ID accessor
    Strict,
}

impl ActorScopePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Strict => "strict",
        }
    }
}

impl FromStr for ActorScopePolicy {
    type Err = IdentityError;

    #[track_caller]
    fn from_str(s: &str) -> IdentityResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "warn" => Ok(Self::Warn),
            "strict" => Ok(Self::Strict),
            _ => Err(IdentityError::InvalidActorScopePolicy {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ActorScopePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
