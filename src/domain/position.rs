use crate::domain::GeoCoordinate;
use chrono::{DateTime, Utc};

/// A single snapshot of the device position.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct UserPosition {
    pub coordinate: GeoCoordinate,
    pub timestamp: DateTime<Utc>,
}

impl UserPosition {
    pub fn now(coordinate: GeoCoordinate) -> Self {
        UserPosition {
            coordinate,
            timestamp: Utc::now(),
        }
    }
}
