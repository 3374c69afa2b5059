mod console_map_view;
mod fixed_location;

pub use console_map_view::ConsoleMapView;
pub use fixed_location::FixedLocationProvider;
