use crate::domain::UserPosition;
use crate::error::AppError;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt::Debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
}

#[async_trait]
pub trait LocationProvider: Debug + Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;

    /// One-shot position fetch.
    async fn current_position(&self) -> Result<UserPosition, AppError>;
}
