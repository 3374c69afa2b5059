use crate::domain::{GeoCoordinate, Region};
use crate::providers::PermissionStatus;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    firebase: Firebase,
    map: Map,
    device: Device,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("PARKMASTER").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn firebase(&self) -> &Firebase {
        &self.firebase
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
    token_file: String,
}

impl Core {
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn token_file(&self) -> &str {
        &self.token_file
    }
}

#[derive(Debug, Deserialize)]
pub struct Firebase {
    api_key: String,
    project_id: String,
    auth_url: String,
    firestore_url: String,
    users_collection: String,
}

impl Firebase {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    pub fn firestore_url(&self) -> &str {
        &self.firestore_url
    }

    pub fn users_collection(&self) -> &str {
        &self.users_collection
    }
}

#[derive(Debug, Deserialize)]
pub struct Map {
    radius_m: f64,
    spots_file: String,
    #[serde(with = "humantime_serde")]
    recenter_animation: Duration,
    recenter_latitude_delta: f64,
    default_region: Region,
}

impl Map {
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn spots_file(&self) -> &str {
        &self.spots_file
    }

    pub fn recenter_animation(&self) -> Duration {
        self.recenter_animation
    }

    pub fn recenter_latitude_delta(&self) -> f64 {
        self.recenter_latitude_delta
    }

    pub fn default_region(&self) -> Region {
        self.default_region
    }
}

#[derive(Debug, Deserialize)]
pub struct Device {
    location_permission: PermissionStatus,
    location: GeoCoordinate,
}

impl Device {
    pub fn location_permission(&self) -> PermissionStatus {
        self.location_permission
    }

    pub fn location(&self) -> GeoCoordinate {
        self.location
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    request_timeout: Duration::from_secs(2),
                    token_file: std::env::temp_dir().join("parkmaster_test_token").to_string_lossy().to_string(),
                },
                firebase: Firebase {
                    api_key: "api-key".to_string(),
                    project_id: "parkmaster".to_string(),
                    auth_url: "https://auth.url".to_string(),
                    firestore_url: "https://firestore.url".to_string(),
                    users_collection: "users".to_string(),
                },
                map: Map {
                    radius_m: 650.0,
                    spots_file: "tests/resources/spots.json".to_string(),
                    recenter_animation: Duration::from_millis(600),
                    recenter_latitude_delta: 0.0622,
                    default_region: Region::new(GeoCoordinate::new(42.4975, 27.4716).unwrap(), 0.0922, 0.0421),
                },
                device: Device {
                    location_permission: PermissionStatus::Granted,
                    location: GeoCoordinate::new(42.4988, 27.4607).unwrap(),
                },
            },
        }
    }

    pub fn auth_url(mut self, url: String) -> Self {
        self.config.firebase.auth_url = url;
        self
    }

    pub fn firestore_url(mut self, url: String) -> Self {
        self.config.firebase.firestore_url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
