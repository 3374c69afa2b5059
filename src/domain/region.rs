use crate::domain::GeoCoordinate;
use serde::Deserialize;

/// The visible part of the map: a center plus the span in degrees.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Region {
    pub center: GeoCoordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub fn new(center: GeoCoordinate, latitude_delta: f64, longitude_delta: f64) -> Self {
        Region {
            center,
            latitude_delta,
            longitude_delta,
        }
    }

    pub fn centered_on(&self, center: GeoCoordinate) -> Self {
        Region { center, ..*self }
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            latitude: f64,
            longitude: f64,
            latitude_delta: f64,
            longitude_delta: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        let center = GeoCoordinate::new(inner.latitude, inner.longitude).map_err(|e| serde::de::Error::custom(format!("invalid region center {}", e)))?;
        Ok(Region::new(center, inner.latitude_delta, inner.longitude_delta))
    }
}
