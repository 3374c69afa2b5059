use crate::app_config::AppConfig;
use crate::domain::{GeoCoordinate, UserPosition};
use crate::error::AppError;
use crate::providers::{LocationProvider, PermissionStatus};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// A device whose position and permission state come from configuration.
#[derive(Debug)]
pub struct FixedLocationProvider {
    permission: PermissionStatus,
    location: GeoCoordinate,
}

impl FixedLocationProvider {
    pub fn new(permission: PermissionStatus, location: GeoCoordinate) -> Self {
        FixedLocationProvider { permission, location }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        FixedLocationProvider::new(config.device().location_permission(), config.device().location())
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    #[instrument(skip(self))]
    async fn request_permission(&self) -> PermissionStatus {
        debug!(permission = ?self.permission, "Requested location permission");
        self.permission
    }

    async fn current_position(&self) -> Result<UserPosition, AppError> {
        match self.permission {
            PermissionStatus::Granted => Ok(UserPosition::now(self.location)),
            PermissionStatus::Denied => Err(AppError::PermissionDenied),
        }
    }
}
