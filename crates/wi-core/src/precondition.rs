use crate::{IdentityError, Result as IdentityResult};

/// Fails with [`IdentityError::Precondition`] when `condition` is false.
///
/// The error records the location of the code that called this function,
/// not of this function itself.
#[track_caller]
pub fn check_precondition(condition: bool, message: impl Into<String>) -> IdentityResult<()> {
    if condition {
        Ok(())
    } else {
        Err(IdentityError::precondition(message))
    }
}
