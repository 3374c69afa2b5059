use crate::domain::{Occupancy, OccupancyError, ParkingSpot};
use crate::parking::registry::SpotRegistry;
use tracing::{debug, info, instrument};

pub const PARK_QUESTION: &str = "Would you like to park here?";
pub const PARK_ACTION: &str = "Park";

/// The confirmation asked before a spot is claimed.
#[derive(Clone, PartialEq, Debug)]
pub struct ParkPrompt {
    pub spot_id: String,
    pub title: String,
    pub message: &'static str,
    pub action: &'static str,
}

/// Drives the per-spot occupancy transitions.
///
/// Selecting an available spot opens a prompt, confirming it claims the spot.
/// Nothing is mutated until the prompt is confirmed, and at most one prompt
/// is outstanding at a time.
#[derive(Default, Debug)]
pub struct OccupancyMachine {
    pending: Option<ParkPrompt>,
}

impl OccupancyMachine {
    pub fn new() -> Self {
        OccupancyMachine::default()
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<&ParkPrompt> {
        self.pending.as_ref()
    }

    /// Opens a prompt for an available spot, replacing any outstanding prompt.
    /// Selecting an unknown or taken spot is a no-op.
    #[instrument(skip(self, registry))]
    pub fn select(&mut self, registry: &SpotRegistry, spot_id: &str) -> Option<&ParkPrompt> {
        let Some(spot) = registry.get(spot_id) else {
            debug!("Selected unknown spot '{}'", spot_id);
            return None;
        };

        if spot.occupancy() != Occupancy::Available {
            debug!("Spot '{}' is {}, nothing to do", spot_id, spot.occupancy());
            return None;
        }

        self.pending = Some(ParkPrompt {
            spot_id: spot.id().to_string(),
            title: spot.description().to_string(),
            message: PARK_QUESTION,
            action: PARK_ACTION,
        });
        self.pending.as_ref()
    }

    /// Claims the spot of the outstanding prompt. Returns `None` when no prompt is outstanding.
    #[instrument(skip_all)]
    pub fn confirm(&mut self, registry: &mut SpotRegistry) -> Result<Option<ParkingSpot>, OccupancyError> {
        let Some(prompt) = self.pending.take() else {
            return Ok(None);
        };

        let spot = registry.park(&prompt.spot_id)?;
        info!(spot_id = spot.id(), "🅿️ Parked at '{}'", spot.title());
        Ok(Some(spot.clone()))
    }

    pub fn cancel(&mut self) -> Option<ParkPrompt> {
        self.pending.take()
    }
}
