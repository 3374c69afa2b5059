use crate::error::AppError;
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

/// Runs a collaborator call, failing with [`AppError::Timeout`] once `limit` elapses.
pub async fn with_timeout<T, F>(limit: Duration, future: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    timeout(limit, future).await.map_err(|_| AppError::Timeout(limit))?
}
