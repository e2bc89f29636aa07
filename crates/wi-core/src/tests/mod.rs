mod user_identity;

use crate::{UserIdentityValue, WikiId};

pub(crate) fn enwiki() -> WikiId {
    WikiId::wiki("enwiki").unwrap()
}

pub(crate) fn dewiki() -> WikiId {
    WikiId::wiki("dewiki").unwrap()
}

/// Registered user 42 with actor 7 on enwiki.
pub(crate) fn registered_enwiki_user() -> UserIdentityValue {
    UserIdentityValue::new(42, "Alice", 7, enwiki()).unwrap()
}
