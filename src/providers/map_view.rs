use crate::domain::{ParkingSpot, Region};
use std::fmt::Debug;
use std::time::Duration;

/// The rendering surface of the map screen.
pub trait MapView: Debug + Send + Sync {
    fn render(&self, region: &Region, spots: &[ParkingSpot]);

    fn animate_to_region(&self, region: &Region, duration: Duration);
}
