use crate::error::AppError;
use std::fmt::{Display, Formatter};

/// A message shown to the user, the console counterpart of an alert dialog.
#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: &str, message: &str) -> Self {
        Notice {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn success(message: &str) -> Self {
        Notice::new("Success", message)
    }

    pub fn error(message: &str) -> Self {
        Notice::new("Error", message)
    }

    pub fn login_failed(error: &AppError) -> Self {
        match error {
            AppError::AuthInvalidCredential => Notice::error("Invalid email or password."),
            AppError::AuthTooManyRequests => Notice::error("Too many failed attempts. Please try again later."),
            error => Notice::common(error).unwrap_or_else(|| Notice::error("Login failed. Please try again.")),
        }
    }

    pub fn registration_failed(error: &AppError) -> Self {
        match error {
            AppError::AuthEmailInUse => Notice::error("This email is already registered."),
            error => Notice::common(error).unwrap_or_else(|| Notice::error("Registration failed. Please try again.")),
        }
    }

    pub fn reauthentication_failed(error: &AppError) -> Self {
        match error {
            AppError::AuthInvalidCredential => Notice::error("Incorrect password. Please try again."),
            error => Notice::common(error).unwrap_or_else(|| Notice::error("Failed to verify credentials. Please try again.")),
        }
    }

    pub fn profile_update_failed(error: &AppError) -> Self {
        match error {
            AppError::AuthRequiresRecentLogin => Notice::error("Please log in again to update your profile"),
            AppError::AuthWeakPassword => Notice::error("Password should be at least 6 characters"),
            AppError::AuthInvalidCredential => Notice::error("Incorrect password. Please try again."),
            AppError::NotAuthenticated => Notice::error("User not authenticated"),
            error => Notice::common(error).unwrap_or_else(|| Notice::error("Failed to update profile")),
        }
    }

    pub fn profile_fetch_failed(error: &AppError) -> Self {
        Notice::common(error).unwrap_or_else(|| Notice::error("Failed to fetch user data"))
    }

    pub fn sign_out_failed(error: &AppError) -> Self {
        Notice::common(error).unwrap_or_else(|| Notice::error("Failed to sign out"))
    }

    pub fn location_failed(error: &AppError) -> Self {
        match error {
            AppError::PermissionDenied => Notice::error("Permission to access location was denied"),
            error => Notice::common(error).unwrap_or_else(|| Notice::error("Unable to determine your location")),
        }
    }

    fn common(error: &AppError) -> Option<Self> {
        match error {
            AppError::Validation(validation) => Some(Notice::error(&validation.to_string())),
            AppError::Timeout(_) => Some(Notice::error("The request timed out. Please try again.")),
            _ => None,
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.title, self.message)
    }
}
