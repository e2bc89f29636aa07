use crate::tests::{dewiki, enwiki, registered_enwiki_user};
use crate::{
    IdentityError, Result as IdentityResult, UserIdentity, UserIdentityValue, UserKind,
    WikiAwareEntity, WikiId,
};

use std::collections::HashSet;
use std::sync::Arc;

use googletest::prelude::*;

/// Second implementation, as a central-account lookup would provide.
#[derive(Debug)]
struct CentralUser {
    name: String,
    wiki_id: WikiId,
}

impl WikiAwareEntity for CentralUser {
    fn wiki_id(&self) -> &WikiId {
        &self.wiki_id
    }
}

impl UserIdentity for CentralUser {
    fn local_id(&self) -> u64 {
        0
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn actor_id(&self, wiki_id: &WikiId) -> IdentityResult<u64> {
        self.assert_wiki(wiki_id)?;
        Ok(0)
    }
}

// =============================================================================
// Scope-checked accessors
// =============================================================================

#[test]
fn given_registered_enwiki_user_when_user_id_for_enwiki_then_local_id() {
    let user = registered_enwiki_user();

    assert_that!(user.user_id(&enwiki()), ok(eq(&42)));
}

#[test]
fn given_registered_enwiki_user_when_user_id_for_local_then_local_id() {
    let user = registered_enwiki_user();

    assert_that!(user.user_id(&WikiId::Local), ok(eq(&42)));
}

#[test]
fn given_registered_enwiki_user_when_user_id_for_dewiki_then_precondition_error() {
    let user = registered_enwiki_user();

    let result = user.user_id(&dewiki());

    assert!(matches!(result, Err(IdentityError::Precondition { .. })));
    let err_msg = result.unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("dewiki"));
    assert_that!(err_msg, contains_substring("enwiki"));
}

#[test]
fn given_local_user_when_user_id_for_named_wiki_then_precondition_error() {
    let user = UserIdentityValue::new(5, "Bob", 9, WikiId::Local).unwrap();

    let result = user.user_id(&enwiki());

    assert_that!(result, err(anything()));
}

#[test]
fn given_mismatched_scope_when_assert_wiki_then_entity_unchanged() {
    let user = registered_enwiki_user();

    let _ = user.assert_wiki(&dewiki());

    assert_that!(user.local_id(), eq(42));
    assert_that!(user.user_id(&enwiki()), ok(eq(&42)));
}

// =============================================================================
// Registration and classification
// =============================================================================

#[test]
fn given_anonymous_ip_user_when_inspected_then_not_registered() {
    let user = UserIdentityValue::anonymous("203.0.113.5", WikiId::Local).unwrap();

    assert!(!user.is_registered());
    assert_that!(user.name(), eq("203.0.113.5"));
    assert_that!(user.local_id(), eq(0));
    assert_that!(user.actor_id(&WikiId::Local), ok(eq(&0)));
    assert_that!(user.kind(), eq(UserKind::Anonymous));
    assert!(user.is_ip_name());
}

#[test]
fn given_local_registered_user_when_kind_then_registered() {
    let user = UserIdentityValue::new(3, "Carol", 11, WikiId::Local).unwrap();

    assert!(user.is_registered());
    assert_that!(user.kind(), eq(UserKind::Registered));
    assert!(!user.is_ip_name());
}

#[test]
fn given_registered_user_on_named_wiki_when_kind_then_remote() {
    assert_that!(registered_enwiki_user().kind(), eq(UserKind::Remote));
}

#[test]
fn given_imported_name_without_account_when_inspected_then_anonymous_but_not_ip() {
    let user = UserIdentityValue::anonymous("imported>Dave", enwiki()).unwrap();

    assert_that!(user.kind(), eq(UserKind::Anonymous));
    assert!(!user.is_ip_name());
}

#[test]
fn given_blank_name_when_constructed_then_invalid_name() {
    let result = UserIdentityValue::new(1, "  ", 1, WikiId::Local);

    assert!(matches!(result, Err(IdentityError::InvalidName { .. })));
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn given_two_instances_with_same_values_when_compared_then_equal() {
    let a = UserIdentityValue::new(42, "Alice", 7, enwiki()).unwrap();
    let b = UserIdentityValue::new(42, "Alice", 7, enwiki()).unwrap();

    assert!(a.equals(&b));
    assert_eq!(a, b);
}

#[test]
fn given_same_name_in_different_wikis_when_compared_then_not_equal() {
    let a = UserIdentityValue::new(42, "Alice", 7, enwiki()).unwrap();
    let b = UserIdentityValue::new(42, "Alice", 7, dewiki()).unwrap();

    assert!(!a.equals(&b));
    assert_ne!(a, b);
}

#[test]
fn given_different_names_in_same_wiki_when_compared_then_not_equal() {
    let a = UserIdentityValue::new(42, "Alice", 7, enwiki()).unwrap();
    let b = UserIdentityValue::new(42, "alice", 7, enwiki()).unwrap();

    assert!(!a.equals(&b));
}

#[test]
fn given_values_and_other_implementation_when_compared_then_equal_across_types() {
    let value = UserIdentityValue::anonymous("Erin", enwiki()).unwrap();
    let central = CentralUser {
        name: "Erin".to_string(),
        wiki_id: enwiki(),
    };

    assert!(value.equals(&central));
    assert!(central.equals(&value));
}

#[test]
fn given_equal_values_when_hashed_then_deduplicated() {
    let mut set = HashSet::new();
    set.insert(UserIdentityValue::new(42, "Alice", 7, enwiki()).unwrap());
    set.insert(UserIdentityValue::new(42, "Alice", 7, enwiki()).unwrap());
    set.insert(UserIdentityValue::new(42, "Alice", 7, dewiki()).unwrap());

    assert_that!(set.len(), eq(2));
}

// =============================================================================
// Sharing and serialization
// =============================================================================

#[test]
fn given_identity_behind_arc_when_read_from_threads_then_consistent() {
    let user: Arc<dyn UserIdentity> = Arc::new(registered_enwiki_user());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let user = Arc::clone(&user);
            std::thread::spawn(move || user.user_id(&WikiId::Local).unwrap())
        })
        .collect();

    for handle in handles {
        assert_that!(handle.join().unwrap(), eq(42));
    }
}

#[test]
fn given_identity_when_serialized_then_policy_omitted_and_restorable() {
    let user = registered_enwiki_user();

    let json = serde_json::to_string(&user).unwrap();
    let restored: UserIdentityValue = serde_json::from_str(&json).unwrap();

    assert_that!(json, not(contains_substring("actor_scope_policy")));
    assert_eq!(restored, user);
    assert_that!(restored.local_id(), eq(42));
    assert_that!(restored.actor_id(&enwiki()), ok(eq(&7)));
}

#[test]
fn given_json_with_empty_name_when_deserialized_then_error() {
    let result = serde_json::from_str::<UserIdentityValue>(r#"{"id":1,"name":""}"#);

    assert_that!(result, err(anything()));
}

#[test]
fn given_identity_when_displayed_then_name_at_wiki() {
    assert_that!(registered_enwiki_user().to_string(), eq("Alice@enwiki"));
}

// =============================================================================
// Wiki awareness
// =============================================================================

#[test]
fn given_entities_in_same_and_other_wikis_when_is_same_wiki_then_compares_scope() {
    let alice = registered_enwiki_user();
    let erin = CentralUser {
        name: "Erin".to_string(),
        wiki_id: enwiki(),
    };
    let bob = UserIdentityValue::new(5, "Bob", 9, dewiki()).unwrap();

    assert!(alice.is_same_wiki(&erin));
    assert!(!alice.is_same_wiki(&bob));
}

#[test]
fn given_entity_when_assert_wiki_then_local_and_own_scope_pass() {
    let user = registered_enwiki_user();

    assert_that!(user.assert_wiki(&WikiId::Local), ok(anything()));
    assert_that!(user.assert_wiki(&enwiki()), ok(anything()));
    assert_that!(user.assert_wiki(&dewiki()), err(anything()));
}
