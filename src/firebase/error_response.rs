use crate::error::AppError;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Maps an Identity Toolkit error code such as `WEAK_PASSWORD : Password should be...` to an [`AppError`].
pub fn map_auth_error(message: &str) -> AppError {
    let code = message.split(" : ").next().unwrap_or(message).trim();
    match code {
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" | "USER_DISABLED" | "INVALID_EMAIL" => AppError::AuthInvalidCredential,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => AppError::AuthTooManyRequests,
        "EMAIL_EXISTS" => AppError::AuthEmailInUse,
        "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" | "TOKEN_EXPIRED" | "INVALID_ID_TOKEN" | "USER_NOT_FOUND" => AppError::AuthRequiresRecentLogin,
        "WEAK_PASSWORD" => AppError::AuthWeakPassword,
        _ => AppError::Unknown(message.to_string()),
    }
}

/// Turns a failed Identity Toolkit response into an [`AppError`].
pub async fn auth_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(error_response) => map_auth_error(&error_response.error.message),
        Err(_) => {
            warn!(status_code = %status, "⚠️ Unexpected error response from the identity provider: {}", body);
            AppError::Unknown(format!("{}: {}", status, body))
        }
    }
}

/// Turns a failed Firestore response into an [`AppError`].
pub async fn store_error(response: Response) -> AppError {
    let status = response.status();
    match status {
        StatusCode::NOT_FOUND => AppError::NotFound,
        StatusCode::UNAUTHORIZED => AppError::NotAuthenticated,
        _ => {
            let body = response.text().await.unwrap_or_default();
            warn!(status_code = %status, "⚠️ Request to the document store failed. Response: {}", body);
            AppError::Unknown(format!("{}: {}", status, body))
        }
    }
}
