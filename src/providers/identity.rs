use crate::domain::Identity;
use crate::error::AppError;
use async_trait::async_trait;
use std::fmt::Debug;

/// Hosted authentication, consumed as an opaque collaborator.
#[async_trait]
pub trait IdentityProvider: Debug + Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AppError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AppError>;

    /// Returns `false` when the password does not match, other failures are errors.
    async fn reauthenticate(&self, identity: &Identity, password: &str) -> Result<bool, AppError>;

    async fn change_password(&self, identity: &Identity, new_password: &str) -> Result<(), AppError>;

    async fn sign_out(&self) -> Result<(), AppError>;

    async fn current_identity(&self) -> Option<Identity>;
}
