use std::time::Duration;
use thiserror::Error;

/// Every failure a collaborator call or a screen action can end in.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("permission to access location was denied")]
    PermissionDenied,
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),
    #[error("invalid credential")]
    AuthInvalidCredential,
    #[error("too many requests")]
    AuthTooManyRequests,
    #[error("email already in use")]
    AuthEmailInUse,
    #[error("requires recent login")]
    AuthRequiresRecentLogin,
    #[error("weak password")]
    AuthWeakPassword,
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("document not found")]
    NotFound,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no response within {0:?}")]
    Timeout(Duration),
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Unknown(error.to_string())
    }
}

/// Form input rejected before any collaborator is called.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingCredentials,
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),
    #[error("New password must be at least {0} characters")]
    NewPasswordTooShort(usize),
    #[error("Please enter your current password")]
    MissingCurrentPassword,
    #[error("Name cannot be empty")]
    EmptyName,
}
