use crate::domain::ParkingSpot;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Reads the seed list of parking spots from a JSON array.
#[instrument]
pub async fn load_spots_from(path: &Path) -> Result<Vec<ParkingSpot>, SpotLoaderError> {
    info!("📁 Loading parking spots...");
    let content = fs::read_to_string(path).await.map_err(|e| SpotLoaderError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;

    let spots = parse_spots(&content).map_err(|e| match e {
        SpotLoaderError::Parse { source, .. } => SpotLoaderError::Parse {
            source,
            path: Some(path.to_path_buf()),
        },
        other => other,
    })?;

    info!("📁 Loading parking spots... OK, {} loaded", spots.len());
    Ok(spots)
}

pub fn parse_spots(json: &str) -> Result<Vec<ParkingSpot>, SpotLoaderError> {
    let spots: Vec<ParkingSpot> = serde_json::from_str(json).map_err(|e| SpotLoaderError::Parse { source: e, path: None })?;

    let mut ids = HashSet::with_capacity(spots.len());
    for spot in &spots {
        if !ids.insert(spot.id()) {
            return Err(SpotLoaderError::DuplicateId(spot.id().to_string()));
        }
    }

    Ok(spots)
}

#[derive(Error, Debug)]
pub enum SpotLoaderError {
    #[error("failed to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("invalid spot list: {}", source)]
    Parse { source: serde_json::Error, path: Option<PathBuf> },
    #[error("duplicate spot id '{0}'")]
    DuplicateId(String),
}
