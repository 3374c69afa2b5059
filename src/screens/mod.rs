mod home;
mod login;
mod map;
mod register;
mod settings;

pub use home::HomeScreen;
pub use login::LoginScreen;
pub use map::{MapScreen, MapSettings};
pub use register::{RegisterScreen, RegistrationForm};
pub use settings::{EditorState, ProfileForm, SettingsScreen};

use crate::notice::Notice;
use crate::providers::{DocumentStore, IdentityProvider, LocationProvider};
use crate::session::TokenStore;
use std::sync::Arc;
use std::time::Duration;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// The collaborators every screen works with, constructed once by the composition root.
#[derive(Clone, Debug)]
pub struct Services {
    pub identity: Arc<dyn IdentityProvider>,
    pub store: Arc<dyn DocumentStore>,
    pub location: Arc<dyn LocationProvider>,
    pub tokens: TokenStore,
    pub request_timeout: Duration,
    pub users_collection: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Login,
    Register,
    Home,
    Map,
    Settings,
}

/// What a screen action asks the shell to do next.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Outcome {
    pub notice: Option<Notice>,
    pub route: Option<Route>,
}

impl Outcome {
    pub fn none() -> Self {
        Outcome::default()
    }

    pub fn notice(notice: Notice) -> Self {
        Outcome {
            notice: Some(notice),
            route: None,
        }
    }

    pub fn route(route: Route) -> Self {
        Outcome {
            notice: None,
            route: Some(route),
        }
    }

    pub fn and_route(self, route: Route) -> Self {
        Outcome { route: Some(route), ..self }
    }
}
