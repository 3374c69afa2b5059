pub mod distance;
mod loader;
mod occupancy;
pub mod proximity;
mod registry;

pub use loader::load_spots_from;
pub use occupancy::{OccupancyMachine, ParkPrompt};
pub use registry::SpotRegistry;
