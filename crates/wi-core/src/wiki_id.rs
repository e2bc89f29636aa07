use crate::{IdentityError, Result as IdentityResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Keyword accepted by [`WikiId::from_str`] for the local wiki.
pub const LOCAL_KEYWORD: &str = "local";

/// Scope token naming the wiki a value belongs to.
///
/// `Local` is the sentinel for "the wiki this process is running against".
/// Serialized as an optional string, with `null` standing for `Local`. Strings are
/// validated like [`WikiId::wiki`] on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<String>", into = "Option<String>")]
pub enum WikiId {
    #[default]
    Local,
    Wiki(String),
}

impl WikiId {
    /// Scope token for a specific wiki.
    #[track_caller]
    pub fn wiki(id: impl Into<String>) -> IdentityResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(IdentityError::InvalidWikiId {
                value: id,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self::Wiki(id))
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }

    /// The wiki's ID, or `None` for the local sentinel.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Local => None,
            Self::Wiki(id) => Some(id),
        }
    }

    /// Whether a caller stating `self` may read data scoped to `entity_wiki`.
    ///
    /// `Local` is accepted against any scope; a specific wiki must match exactly.
    pub fn admits(&self, entity_wiki: &WikiId) -> bool {
        match self {
            Self::Local => true,
            Self::Wiki(_) => self == entity_wiki,
        }
    }
}

impl TryFrom<Option<String>> for WikiId {
    type Error = IdentityError;

    fn try_from(value: Option<String>) -> IdentityResult<Self> {
        match value {
            None => Ok(Self::Local),
            Some(id) => Self::wiki(id),
        }
    }
}

impl From<WikiId> for Option<String> {
    fn from(value: WikiId) -> Self {
        match value {
            WikiId::Local => None,
            WikiId::Wiki(id) => Some(id),
        }
    }
}

impl FromStr for WikiId {
    type Err = IdentityError;

    #[track_caller]
    fn from_str(s: &str) -> IdentityResult<Self> {
        if s.eq_ignore_ascii_case(LOCAL_KEYWORD) {
            return Ok(Self::Local);
        }
        Self::wiki(s)
    }
}

impl std::fmt::Display for WikiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "({LOCAL_KEYWORD})"),
            Self::Wiki(id) => write!(f, "{id}"),
        }
    }
}
