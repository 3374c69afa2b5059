use serde::Deserialize;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
pub enum Occupancy {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "occupied")]
    OccupiedByOther,
    #[serde(rename = "myOccupied")]
    OccupiedByMe,
}

impl Occupancy {
    /// Marker color used when rendering a spot on the map.
    pub fn pin_color(&self) -> &'static str {
        match self {
            Occupancy::Available => "green",
            Occupancy::OccupiedByOther => "red",
            Occupancy::OccupiedByMe => "#007AFF",
        }
    }
}

impl Display for Occupancy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Occupancy::Available => "available",
            Occupancy::OccupiedByOther => "occupied",
            Occupancy::OccupiedByMe => "occupied by me",
        };
        write!(f, "{}", text)
    }
}
