use crate::domain::{GeoCoordinate, Occupancy};
use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ParkingSpot {
    id: String,
    coordinate: GeoCoordinate,
    title: String,
    description: String,
    occupancy: Occupancy,
}

impl ParkingSpot {
    #[cfg(test)]
    pub fn new(id: String, coordinate: GeoCoordinate, title: String, description: String, occupancy: Occupancy) -> Self {
        ParkingSpot {
            id,
            coordinate,
            title,
            description,
            occupancy,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Claims the spot for the current user. Only an available spot can be claimed.
    pub fn park(&mut self) -> Result<(), OccupancyError> {
        if self.occupancy != Occupancy::Available {
            return Err(OccupancyError::NotAvailable {
                spot_id: self.id.clone(),
                occupancy: self.occupancy,
            });
        }

        self.occupancy = Occupancy::OccupiedByMe;
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum OccupancyError {
    #[error("spot '{spot_id}' is {occupancy}")]
    NotAvailable { spot_id: String, occupancy: Occupancy },
    #[error("unknown spot '{0}'")]
    UnknownSpot(String),
}
