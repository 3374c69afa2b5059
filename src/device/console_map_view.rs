use crate::domain::{ParkingSpot, Region};
use crate::parking::distance::distance;
use crate::providers::MapView;
use std::time::Duration;
use tracing::info;

/// Renders the map as a list of markers on stdout.
#[derive(Debug, Default)]
pub struct ConsoleMapView;

impl ConsoleMapView {
    pub fn describe(region: &Region, spots: &[ParkingSpot]) -> Vec<String> {
        let mut lines = Vec::with_capacity(spots.len() + 1);
        lines.push(format!(
            "Map centered on {:.5}, {:.5} ({} spot(s))",
            region.center.latitude(),
            region.center.longitude(),
            spots.len()
        ));
        lines.extend(spots.iter().map(|spot| {
            format!(
                "  [{}] {} - {} ({}, {:.0} m, pin {})",
                spot.id(),
                spot.title(),
                spot.description(),
                spot.occupancy(),
                distance(region.center, spot.coordinate()),
                spot.occupancy().pin_color()
            )
        }));
        lines
    }
}

impl MapView for ConsoleMapView {
    fn render(&self, region: &Region, spots: &[ParkingSpot]) {
        for line in ConsoleMapView::describe(region, spots) {
            println!("{}", line);
        }
    }

    fn animate_to_region(&self, region: &Region, duration: Duration) {
        info!(duration = ?duration, "🗺️ Moving map to {:.5}, {:.5}", region.center.latitude(), region.center.longitude());
    }
}
