use crate::domain::ParkingSpot;
use crate::notice::Notice;
use crate::providers::MapView;
use crate::screens::{HomeScreen, LoginScreen, MapScreen, MapSettings, Outcome, RegisterScreen, Route, Services, SettingsScreen};
use crate::shell::command::{HELP, ShellCommand};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Routes shell commands to the screen that is currently shown.
#[derive(Debug)]
pub struct App {
    services: Services,
    map_settings: MapSettings,
    seed: Vec<ParkingSpot>,
    view: Arc<dyn MapView>,
    route: Route,
    login: LoginScreen,
    register: RegisterScreen,
    home: HomeScreen,
    settings: SettingsScreen,
    map: Option<MapScreen>,
}

impl App {
    pub fn new(services: Services, map_settings: MapSettings, seed: Vec<ParkingSpot>, view: Arc<dyn MapView>) -> Self {
        App {
            login: LoginScreen::new(services.clone()),
            register: RegisterScreen::new(services.clone()),
            home: HomeScreen::new(services.clone()),
            settings: SettingsScreen::new(services.clone()),
            services,
            map_settings,
            seed,
            view,
            route: Route::Login,
            map: None,
        }
    }

    #[cfg(test)]
    pub fn route(&self) -> Route {
        self.route
    }

    /// Handles one command and returns the lines to show to the user.
    #[instrument(skip_all)]
    pub async fn handle(&mut self, command: ShellCommand) -> Vec<String> {
        let mut output = Vec::new();
        let outcome = match command {
            ShellCommand::Help | ShellCommand::Quit => {
                output.push(HELP.to_string());
                Outcome::none()
            }
            ShellCommand::Login { email, password } => self.login.login(&email, &password).await,
            ShellCommand::Register(form) => {
                self.route = Route::Register;
                self.register.register(&form).await
            }
            ShellCommand::Home => Outcome::route(Route::Home),
            ShellCommand::Map => Outcome::route(Route::Map),
            ShellCommand::Settings => Outcome::route(Route::Settings),
            ShellCommand::Select(spot_id) => self.on_map(&mut output, |map, output| match map.select(&spot_id) {
                Some(prompt) => output.push(format!("[{}] {} ({} / cancel)", prompt.title, prompt.message, prompt.action.to_lowercase())),
                None => output.push(format!("Nothing to do for spot '{}'", spot_id)),
            }),
            ShellCommand::Park => self.on_map(&mut output, |map, output| match map.confirm() {
                Some(spot) => output.push(format!("Parked at {}", spot.title())),
                None => output.push("No spot selected".to_string()),
            }),
            ShellCommand::Cancel => match self.route {
                Route::Settings => self.on_settings(|settings| {
                    settings.cancel_edit();
                    Outcome::none()
                }),
                _ => self.on_map(&mut output, |map, _| {
                    map.cancel();
                }),
            },
            ShellCommand::Pan(center) => self.on_map(&mut output, |map, _| {
                let region = map.region().centered_on(center);
                map.on_region_change(region);
                map.render();
            }),
            ShellCommand::Spots => self.on_map(&mut output, |map, _| map.render()),
            ShellCommand::Recenter => match self.map.as_mut() {
                Some(map) if self.route == Route::Map => match map.recenter().await {
                    Ok(center) => {
                        output.push(format!("Centered on {:.5}, {:.5}", center.latitude(), center.longitude()));
                        Outcome::none()
                    }
                    Err(error) => Outcome::notice(Notice::location_failed(&error)),
                },
                _ => Outcome::notice(Notice::error("Open the map first")),
            },
            ShellCommand::Edit => self.on_settings(|settings| {
                settings.edit();
                Outcome::none()
            }),
            ShellCommand::Save(form) => match self.route {
                Route::Settings => self.settings.save(&form).await,
                _ => Outcome::notice(Notice::error("Open the settings first")),
            },
            ShellCommand::SignOut => self.settings.sign_out().await,
        };

        self.apply(outcome, &mut output).await;
        output
    }

    fn on_map<F>(&mut self, output: &mut Vec<String>, action: F) -> Outcome
    where
        F: FnOnce(&mut MapScreen, &mut Vec<String>),
    {
        match self.map.as_mut() {
            Some(map) if self.route == Route::Map => {
                action(map, output);
                Outcome::none()
            }
            _ => Outcome::notice(Notice::error("Open the map first")),
        }
    }

    fn on_settings<F>(&mut self, action: F) -> Outcome
    where
        F: FnOnce(&mut SettingsScreen) -> Outcome,
    {
        match self.route {
            Route::Settings => action(&mut self.settings),
            _ => Outcome::notice(Notice::error("Open the settings first")),
        }
    }

    async fn apply(&mut self, outcome: Outcome, output: &mut Vec<String>) {
        let mut next = Some(outcome);
        while let Some(outcome) = next.take() {
            if let Some(notice) = outcome.notice {
                output.push(notice.to_string());
            }
            if let Some(route) = outcome.route {
                next = Some(self.enter(route, output).await);
            }
        }
    }

    async fn enter(&mut self, route: Route, output: &mut Vec<String>) -> Outcome {
        debug!(?route, "Entering screen");
        self.route = route;
        match route {
            Route::Login => {
                self.map = None;
                output.push("Please log in".to_string());
                Outcome::none()
            }
            Route::Register => Outcome::none(),
            Route::Home => {
                let outcome = self.home.load().await;
                if outcome.route.is_none() {
                    output.push(self.home.greeting());
                }
                outcome
            }
            Route::Map => {
                let mut map = MapScreen::new(self.services.clone(), self.map_settings.clone(), self.view.clone(), self.seed.clone());
                let outcome = match map.mount().await {
                    Ok(()) => Outcome::none(),
                    Err(error) => {
                        map.render();
                        Outcome::notice(Notice::location_failed(&error))
                    }
                };
                self.map = Some(map);
                outcome
            }
            Route::Settings => {
                let outcome = self.settings.load().await;
                if outcome.route.is_none() {
                    output.push(format!("Name: {}", self.settings.name()));
                    output.push(format!("Email: {}", self.settings.email()));
                }
                outcome
            }
        }
    }
}
