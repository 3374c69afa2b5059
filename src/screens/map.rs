use crate::app_config::AppConfig;
use crate::domain::{GeoCoordinate, ParkingSpot, Region};
use crate::error::AppError;
use crate::parking::{OccupancyMachine, ParkPrompt, SpotRegistry};
use crate::providers::{MapView, PermissionStatus, with_timeout};
use crate::screens::Services;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

#[derive(Clone, Debug)]
pub struct MapSettings {
    pub radius_m: f64,
    pub recenter_animation: Duration,
    pub recenter_latitude_delta: f64,
    pub default_region: Region,
}

impl MapSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        MapSettings {
            radius_m: config.map().radius_m(),
            recenter_animation: config.map().recenter_animation(),
            recenter_latitude_delta: config.map().recenter_latitude_delta(),
            default_region: config.map().default_region(),
        }
    }
}

/// Shows the parking spots around the user and lets them claim one.
#[derive(Debug)]
pub struct MapScreen {
    services: Services,
    settings: MapSettings,
    view: Arc<dyn MapView>,
    registry: SpotRegistry,
    occupancy: OccupancyMachine,
    region: Region,
}

impl MapScreen {
    pub fn new(services: Services, settings: MapSettings, view: Arc<dyn MapView>, spots: Vec<ParkingSpot>) -> Self {
        let region = settings.default_region;
        MapScreen {
            services,
            settings,
            view,
            registry: SpotRegistry::new(spots),
            occupancy: OccupancyMachine::new(),
            region,
        }
    }

    #[cfg(test)]
    pub fn spots(&self) -> &[ParkingSpot] {
        self.registry.spots()
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Asks for the device position once, keeps only the nearby spots and centers the map on the user.
    #[instrument(skip(self))]
    pub async fn mount(&mut self) -> Result<(), AppError> {
        let timeout = self.services.request_timeout;
        let permission = with_timeout(timeout, async { Ok(self.services.location.request_permission().await) }).await?;
        if permission != PermissionStatus::Granted {
            warn!("⚠️ Permission to access location was denied");
            return Err(AppError::PermissionDenied);
        }

        let position = with_timeout(timeout, self.services.location.current_position()).await?;
        debug!(timestamp = %position.timestamp, "Received the device position");
        self.registry.narrow(position.coordinate, self.settings.radius_m);
        self.region = self.settings.default_region.centered_on(position.coordinate);

        if self.registry.is_empty() {
            info!("🗺️ No spots within {} m", self.settings.radius_m);
        } else {
            info!("🗺️ Showing {} nearby spot(s)", self.registry.len());
        }
        self.render();
        Ok(())
    }

    pub fn render(&self) {
        self.view.render(&self.region, self.registry.spots());
    }

    /// The user panned or zoomed the map.
    pub fn on_region_change(&mut self, region: Region) {
        self.region = region;
    }

    pub fn select(&mut self, spot_id: &str) -> Option<&ParkPrompt> {
        self.occupancy.select(&self.registry, spot_id)
    }

    /// Confirms the outstanding prompt. Returns the claimed spot, or `None` when nothing was pending.
    #[instrument(skip(self))]
    pub fn confirm(&mut self) -> Option<ParkingSpot> {
        match self.occupancy.confirm(&mut self.registry) {
            Ok(Some(spot)) => {
                self.render();
                Some(spot)
            }
            Ok(None) => None,
            Err(error) => {
                warn!("⚠️ Unable to park: {}", error);
                None
            }
        }
    }

    pub fn cancel(&mut self) -> Option<ParkPrompt> {
        self.occupancy.cancel()
    }

    /// Fetches a fresh position and animates the map to it. On failure the region is left unchanged.
    #[instrument(skip(self))]
    pub async fn recenter(&mut self) -> Result<GeoCoordinate, AppError> {
        let position = with_timeout(self.services.request_timeout, self.services.location.current_position()).await?;

        let region = Region::new(position.coordinate, self.settings.recenter_latitude_delta, self.settings.default_region.longitude_delta);
        self.region = region;
        self.view.animate_to_region(&region, self.settings.recenter_animation);

        Ok(position.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Occupancy;
    use crate::domain::UserPosition;
    use crate::providers::LocationProvider;
    use crate::providers::fakes::{FakeDocumentStore, FakeIdentityProvider, FakeLocationProvider, RecordingMapView};
    use async_trait::async_trait;
    use crate::screens::testing::services;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn coordinate(latitude: f64, longitude: f64) -> GeoCoordinate {
        GeoCoordinate::new(latitude, longitude).unwrap()
    }

    fn settings(radius_m: f64) -> MapSettings {
        MapSettings {
            radius_m,
            recenter_animation: Duration::from_millis(600),
            recenter_latitude_delta: 0.0622,
            default_region: Region::new(coordinate(42.4975, 27.4716), 0.0922, 0.0421),
        }
    }

    /// Never answers the permission prompt.
    #[derive(Debug)]
    struct UnansweredPermission;

    #[async_trait]
    impl LocationProvider for UnansweredPermission {
        async fn request_permission(&self) -> PermissionStatus {
            std::future::pending().await
        }

        async fn current_position(&self) -> Result<UserPosition, AppError> {
            Err(AppError::LocationUnavailable("no fix".to_string()))
        }
    }

    fn screen(location: impl LocationProvider + 'static, radius_m: f64) -> (MapScreen, Arc<RecordingMapView>) {
        let (mut services, _, _) = services(FakeIdentityProvider::new(), FakeDocumentStore::new());
        services.location = Arc::new(location);
        let view = Arc::new(RecordingMapView::default());
        let spots = serde_json::from_str(include_str!("../../tests/resources/spots.json")).unwrap();
        (MapScreen::new(services, settings(radius_m), view.clone(), spots), view)
    }

    fn at(latitude: f64, longitude: f64) -> Result<UserPosition, AppError> {
        Ok(UserPosition::now(coordinate(latitude, longitude)))
    }

    fn ids(screen: &MapScreen) -> Vec<&str> {
        screen.spots().iter().map(ParkingSpot::id).collect()
    }

    #[test(tokio::test)]
    async fn mount_keeps_only_nearby_spots_and_centers_on_the_user() -> Result<(), AppError> {
        let (mut screen, view) = screen(FakeLocationProvider::new(PermissionStatus::Granted, vec![at(42.4988, 27.4607)]), 650.0);

        screen.mount().await?;

        assert_eq!(ids(&screen), vec!["3"]);
        assert_eq!(screen.region(), Region::new(coordinate(42.4988, 27.4607), 0.0922, 0.0421));
        assert_eq!(view.renders.lock().unwrap().last().map(|(_, ids)| ids.clone()), Some(vec!["3".to_string()]));
        Ok(())
    }

    #[test(tokio::test)]
    async fn mount_with_a_wider_radius_includes_the_farther_spot() -> Result<(), AppError> {
        let (mut screen, _) = screen(FakeLocationProvider::new(PermissionStatus::Granted, vec![at(42.4988, 27.4607)]), 1500.0);

        screen.mount().await?;

        assert_eq!(ids(&screen), vec!["3", "4"]);
        Ok(())
    }

    #[test(tokio::test)]
    async fn mount_fails_without_permission_and_keeps_every_spot() {
        let (mut screen, _) = screen(FakeLocationProvider::new(PermissionStatus::Denied, vec![at(42.4988, 27.4607)]), 650.0);

        let result = screen.mount().await;

        assert_eq!(result, Err(AppError::PermissionDenied));
        assert_eq!(screen.spots().len(), 6);
        assert_eq!(screen.region(), settings(650.0).default_region);
    }

    #[test(tokio::test)]
    async fn mount_times_out_when_the_permission_prompt_hangs() {
        let (mut screen, view) = screen(UnansweredPermission, 650.0);
        screen.services.request_timeout = Duration::from_millis(50);

        let result = tokio::time::timeout(Duration::from_secs(2), screen.mount()).await;

        assert_eq!(result, Ok(Err(AppError::Timeout(Duration::from_millis(50)))));
        assert_eq!(screen.spots().len(), 6);
        assert!(view.renders.lock().unwrap().is_empty());
    }

    #[test(tokio::test)]
    async fn mount_does_not_refilter_later_positions() -> Result<(), AppError> {
        let positions = vec![at(42.4988, 27.4607), at(42.4975, 27.4716)];
        let (mut screen, _) = screen(FakeLocationProvider::new(PermissionStatus::Granted, positions), 1500.0);

        screen.mount().await?;
        screen.recenter().await?;

        assert_eq!(ids(&screen), vec!["3", "4"]);
        Ok(())
    }

    #[test(tokio::test)]
    async fn parking_on_a_selected_spot_only_changes_that_spot() -> Result<(), AppError> {
        let (mut screen, _) = screen(FakeLocationProvider::new(PermissionStatus::Granted, vec![at(42.4975, 27.4716)]), 2000.0);
        screen.mount().await?;

        let prompt = screen.select("3").cloned();
        let parked = screen.confirm();

        assert_eq!(prompt.map(|p| p.message), Some("Would you like to park here?"));
        assert_eq!(parked.map(|s| s.id().to_string()), Some("3".to_string()));
        let occupancies = screen.spots().iter().map(|s| (s.id(), s.occupancy())).collect::<Vec<_>>();
        assert_eq!(
            occupancies,
            vec![("2", Occupancy::OccupiedByOther), ("3", Occupancy::OccupiedByMe), ("4", Occupancy::Available)]
        );
        Ok(())
    }

    #[test(tokio::test)]
    async fn selecting_an_occupied_spot_changes_nothing() -> Result<(), AppError> {
        let (mut screen, _) = screen(FakeLocationProvider::new(PermissionStatus::Granted, vec![at(42.4975, 27.4716)]), 2000.0);
        screen.mount().await?;
        let before = screen.spots().to_vec();

        assert!(screen.select("2").is_none());
        assert!(screen.confirm().is_none());
        assert_eq!(screen.spots(), before.as_slice());
        Ok(())
    }

    #[test(tokio::test)]
    async fn recenter_animates_to_the_fresh_position() -> Result<(), AppError> {
        let positions = vec![at(42.4988, 27.4607), at(42.5000, 27.4756)];
        let (mut screen, view) = screen(FakeLocationProvider::new(PermissionStatus::Granted, positions), 650.0);
        screen.mount().await?;

        let center = screen.recenter().await?;

        let expected = Region::new(coordinate(42.5000, 27.4756), 0.0622, 0.0421);
        assert_eq!(center, coordinate(42.5000, 27.4756));
        assert_eq!(screen.region(), expected);
        assert_eq!(*view.animations.lock().unwrap(), vec![(expected, Duration::from_millis(600))]);
        Ok(())
    }

    #[test(tokio::test)]
    async fn recenter_failure_keeps_the_region() -> Result<(), AppError> {
        let positions = vec![at(42.4988, 27.4607), Err(AppError::LocationUnavailable("no fix".to_string()))];
        let (mut screen, view) = screen(FakeLocationProvider::new(PermissionStatus::Granted, positions), 650.0);
        screen.mount().await?;
        let region = screen.region();

        let result = screen.recenter().await;

        assert_eq!(result, Err(AppError::LocationUnavailable("no fix".to_string())));
        assert_eq!(screen.region(), region);
        assert!(view.animations.lock().unwrap().is_empty());
        Ok(())
    }

    #[test]
    fn on_region_change_replaces_the_region() {
        let (mut screen, _) = screen(FakeLocationProvider::new(PermissionStatus::Granted, vec![at(42.4988, 27.4607)]), 650.0);
        let region = Region::new(coordinate(42.6, 27.5), 0.01, 0.01);

        screen.on_region_change(region);

        assert_eq!(screen.region(), region);
    }
}
