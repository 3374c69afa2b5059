mod document;
mod geo_coordinate;
mod identity;
mod occupancy;
mod parking_spot;
mod position;
mod region;
pub mod user_profile;

pub use document::{Document, FieldValue};
pub use geo_coordinate::{CoordinateError, GeoCoordinate};
pub use identity::Identity;
pub use occupancy::Occupancy;
pub use parking_spot::{OccupancyError, ParkingSpot};
pub use position::UserPosition;
pub use region::Region;
pub use user_profile::UserProfile;
