//! Location contracts and the best-effort labeling policy.
//!
//! Saving a calculation attaches a geographic label. The label comes from
//! two substitutable collaborators (a position provider and a reverse
//! geocoder), and every failure rung has a defined fallback: no position
//! fix within [`POSITION_TIMEOUT`] yields [`UNKNOWN_LOCATION`], a failed or
//! nameless geocode yields the raw coordinate label.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Label used when no position can be determined.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Upper bound on the wait for a position fix.
pub const POSITION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Place naming returned by a reverse geocoder. Fields are independent;
/// any of them may be missing or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceName {
    pub city: Option<String>,
    /// Administrative region (state, province).
    pub region: Option<String>,
    /// Coarser name (town, district) used when no city is known.
    pub locality: Option<String>,
}

impl PlaceName {
    /// `"City, Region"` when both are known, otherwise the bare locality,
    /// otherwise `None` (the caller falls back to coordinates).
    pub fn label(&self) -> Option<String> {
        let city = self.city.as_deref().filter(|s| !s.is_empty());
        let region = self.region.as_deref().filter(|s| !s.is_empty());
        let locality = self.locality.as_deref().filter(|s| !s.is_empty());

        match (city, region) {
            (Some(city), Some(region)) => Some(format!("{city}, {region}")),
            _ => locality.map(str::to_string),
        }
    }
}

/// `"lat, lng"` with each coordinate limited to 4 decimal places.
pub fn coordinate_label(position: Coordinates) -> String {
    format!("{:.4}, {:.4}", position.latitude, position.longitude)
}

#[derive(Debug, Error)]
pub enum LocateError {
    /// No position fix could be obtained.
    #[error("position unavailable: {0}")]
    Unavailable(String),

    /// The reverse-geocoding lookup failed.
    #[error("reverse geocoding failed: {0}")]
    Lookup(String),
}

/// Source of the current position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, LocateError>;
}

/// Turns coordinates into a human-readable place name.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn place_name(&self, position: Coordinates) -> Result<PlaceName, LocateError>;
}
