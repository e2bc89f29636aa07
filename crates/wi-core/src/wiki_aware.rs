use crate::{Result as IdentityResult, WikiId, check_precondition};

/// Capability of values that belong to a specific wiki.
pub trait WikiAwareEntity {
    /// The scope this entity belongs to.
    fn wiki_id(&self) -> &WikiId;

    /// Fails with a precondition error unless `wiki_id` admits this entity's scope.
    #[track_caller]
    fn assert_wiki(&self, wiki_id: &WikiId) -> IdentityResult<()> {
        check_precondition(
            wiki_id.admits(self.wiki_id()),
            format!(
                "expected wiki {wiki_id}, but entity belongs to {}",
                self.wiki_id()
            ),
        )
    }

    fn is_same_wiki(&self, other: &dyn WikiAwareEntity) -> bool {
        self.wiki_id() == other.wiki_id()
    }
}
