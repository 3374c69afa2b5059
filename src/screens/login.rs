use crate::error::{AppError, ValidationError};
use crate::notice::Notice;
use crate::providers::with_timeout;
use crate::screens::{Outcome, Route, Services};
use tracing::{info, instrument, warn};

#[derive(Debug)]
pub struct LoginScreen {
    services: Services,
}

impl LoginScreen {
    pub fn new(services: Services) -> Self {
        LoginScreen { services }
    }

    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Outcome {
        match self.try_login(email, password).await {
            Ok(()) => Outcome::route(Route::Home),
            Err(error) => {
                warn!("⚠️ Login failed: {}", error);
                Outcome::notice(Notice::login_failed(&error))
            }
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<(), AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }

        let identity = with_timeout(self.services.request_timeout, self.services.identity.sign_in(email, password)).await?;
        self.services
            .tokens
            .save(&identity.id_token)
            .await
            .map_err(|e| AppError::Unknown(format!("unable to store the user token: {}", e)))?;

        info!(uid = identity.uid, "✅ Logged in");
        Ok(())
    }
}
