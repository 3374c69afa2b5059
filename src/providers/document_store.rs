use crate::domain::Document;
use crate::error::AppError;
use async_trait::async_trait;
use std::fmt::Debug;

/// Hosted per-user record persistence.
#[async_trait]
pub trait DocumentStore: Debug + Send + Sync {
    /// Fails with [`AppError::NotFound`] when the document does not exist.
    async fn get_document(&self, collection: &str, id: &str) -> Result<Document, AppError>;

    /// Creates or replaces the whole document.
    async fn set_document(&self, collection: &str, id: &str, document: &Document) -> Result<(), AppError>;

    /// Merges the given fields into an existing document.
    async fn update_document(&self, collection: &str, id: &str, fields: &Document) -> Result<(), AppError>;
}
