use crate::domain::{GeoCoordinate, OccupancyError, ParkingSpot};
use crate::parking::proximity::filter_nearby;
use tracing::{debug, info, instrument};

/// The ordered working set of spots shown on the map.
///
/// Spots are never added or removed after seeding except by the single
/// proximity narrowing; only their occupancy changes.
#[derive(Debug)]
pub struct SpotRegistry {
    spots: Vec<ParkingSpot>,
    narrowed: bool,
}

impl SpotRegistry {
    pub fn new(spots: Vec<ParkingSpot>) -> Self {
        SpotRegistry { spots, narrowed: false }
    }

    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    pub fn get(&self, spot_id: &str) -> Option<&ParkingSpot> {
        self.spots.iter().find(|spot| spot.id() == spot_id)
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    #[cfg(test)]
    pub fn is_narrowed(&self) -> bool {
        self.narrowed
    }

    /// Drops every spot farther than `radius_m` from `origin`. Only the first call has an effect.
    /// Returns the number of dropped spots.
    #[instrument(skip(self))]
    pub fn narrow(&mut self, origin: GeoCoordinate, radius_m: f64) -> usize {
        if self.narrowed {
            debug!("Registry was already narrowed, ignoring");
            return 0;
        }

        let before = self.spots.len();
        self.spots = filter_nearby(&self.spots, origin, radius_m);
        self.narrowed = true;

        let dropped = before - self.spots.len();
        info!("📍 Narrowed spots to {} within {} m, dropped {}", self.spots.len(), radius_m, dropped);
        dropped
    }

    pub(crate) fn park(&mut self, spot_id: &str) -> Result<&ParkingSpot, OccupancyError> {
        let spot = self
            .spots
            .iter_mut()
            .find(|spot| spot.id() == spot_id)
            .ok_or_else(|| OccupancyError::UnknownSpot(spot_id.to_string()))?;

        spot.park()?;
        Ok(&*spot)
    }
}
