use crate::domain::UserProfile;
use crate::error::AppError;
use crate::providers::with_timeout;
use crate::screens::{Outcome, Route, Services};
use tracing::{instrument, warn};

pub const FALLBACK_NAME: &str = "User";

#[derive(Debug)]
pub struct HomeScreen {
    services: Services,
    full_name: String,
}

impl HomeScreen {
    pub fn new(services: Services) -> Self {
        HomeScreen {
            services,
            full_name: String::new(),
        }
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}! 👋", self.full_name)
    }

    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Outcome {
        let Some(identity) = self.services.identity.current_identity().await else {
            return Outcome::route(Route::Login);
        };

        let request = self.services.store.get_document(&self.services.users_collection, &identity.uid);
        match with_timeout(self.services.request_timeout, request).await {
            Ok(document) => self.full_name = UserProfile::from_document(&document).name,
            Err(AppError::NotFound) => {}
            Err(error) => {
                warn!(uid = identity.uid, "⚠️ Unable to fetch user data: {}", error);
                self.full_name = FALLBACK_NAME.to_string();
            }
        }

        Outcome::none()
    }
}
