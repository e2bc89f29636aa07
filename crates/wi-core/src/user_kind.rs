use serde::{Deserialize, Serialize};

/// Broad classification of a user identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserKind {
    /// Has a local account on the process's own wiki
    Registered,
    /// No local account: an IP user, or a name imported without an account
    Anonymous,
    /// Has an account on an explicitly named wiki
    Remote,
}

impl UserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Anonymous => "anonymous",
            Self::Remote => "remote",
        }
    }
}

impl std::fmt::Display for UserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
