use crate::domain::UserProfile;
use crate::error::{AppError, ValidationError};
use crate::notice::Notice;
use crate::providers::with_timeout;
use crate::screens::{MIN_PASSWORD_LENGTH, Outcome, Route, Services};
use chrono::Utc;
use tracing::{info, instrument, warn};

#[derive(Clone, Default, Debug)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
    pub license_plate: Option<String>,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.name, &self.email, &self.password, &self.confirm_password, &self.phone_number];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingRequiredFields);
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }

        Ok(())
    }
}

#[derive(Debug)]
pub struct RegisterScreen {
    services: Services,
}

impl RegisterScreen {
    pub fn new(services: Services) -> Self {
        RegisterScreen { services }
    }

    #[instrument(skip_all, fields(email = form.email.as_str()))]
    pub async fn register(&mut self, form: &RegistrationForm) -> Outcome {
        match self.try_register(form).await {
            Ok(()) => Outcome::notice(Notice::success("Account created successfully!")).and_route(Route::Login),
            Err(error) => {
                warn!("⚠️ Registration failed: {}", error);
                Outcome::notice(Notice::registration_failed(&error))
            }
        }
    }

    async fn try_register(&self, form: &RegistrationForm) -> Result<(), AppError> {
        form.validate()?;

        let timeout = self.services.request_timeout;
        let identity = with_timeout(timeout, self.services.identity.sign_up(&form.email, &form.password)).await?;

        let profile = UserProfile {
            name: form.name.clone(),
            email: form.email.clone(),
            phone_number: form.phone_number.clone(),
            license_plate: form.license_plate.clone().unwrap_or_default(),
            created_at: Some(Utc::now()),
        };
        with_timeout(
            timeout,
            self.services
                .store
                .set_document(&self.services.users_collection, &identity.uid, &profile.to_document()),
        )
        .await?;

        info!(uid = identity.uid, "✅ Registered account");
        Ok(())
    }
}
