use crate::domain::{GeoCoordinate, ParkingSpot};
use crate::parking::distance::distance;

/// Whether `spot` lies within `radius_m` meters of `origin`, boundary included.
pub fn is_nearby(spot: &ParkingSpot, origin: GeoCoordinate, radius_m: f64) -> bool {
    distance(origin, spot.coordinate()) <= radius_m
}

/// Returns the spots within `radius_m` meters of `origin`, in their original order.
pub fn filter_nearby(spots: &[ParkingSpot], origin: GeoCoordinate, radius_m: f64) -> Vec<ParkingSpot> {
    spots.iter().filter(|spot| is_nearby(spot, origin, radius_m)).cloned().collect()
}
