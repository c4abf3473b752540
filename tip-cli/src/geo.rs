//! Position lookup and reverse geocoding over HTTP, plus the policy that
//! turns them into a history label.
//!
//! Every failure degrades instead of erroring: no position within the
//! timeout gives [`UNKNOWN_LOCATION`], and a position that cannot be named
//! gives its raw coordinates.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use tip_core::location::{
    Coordinates, LocateError, LocationProvider, POSITION_TIMEOUT, PlaceName, ReverseGeocoder,
    UNKNOWN_LOCATION, coordinate_label,
};

const IP_LOCATE_ENDPOINT: &str = "http://ip-api.com/json/";
const REVERSE_GEOCODE_ENDPOINT: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";

/// Per-request limit, separate from the overall position timeout.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

// ─── providers ───────────────────────────────────────────────────────────────

/// Position lookup backed by an IP geolocation service.
pub struct IpApiLocationProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl IpApiLocationProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: IP_LOCATE_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

#[async_trait]
impl LocationProvider for IpApiLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, LocateError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| LocateError::Unavailable(e.to_string()))?;

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| LocateError::Unavailable(e.to_string()))?;

        if body.status != "success" {
            let reason = body.message.unwrap_or_else(|| "lookup refused".to_string());
            return Err(LocateError::Unavailable(reason));
        }

        Ok(Coordinates {
            latitude: body.lat,
            longitude: body.lon,
        })
    }
}

/// Reverse geocoder backed by the BigDataCloud client API.
pub struct BigDataCloudGeocoder {
    client: reqwest::Client,
    endpoint: String,
}

impl BigDataCloudGeocoder {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: REVERSE_GEOCODE_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    #[serde(default)]
    city: Option<String>,
    #[serde(default, rename = "principalSubdivision")]
    principal_subdivision: Option<String>,
    #[serde(default)]
    locality: Option<String>,
}

#[async_trait]
impl ReverseGeocoder for BigDataCloudGeocoder {
    async fn place_name(&self, position: Coordinates) -> Result<PlaceName, LocateError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("latitude", position.latitude.to_string()),
                ("longitude", position.longitude.to_string()),
                ("localityLanguage", "en".to_string()),
            ])
            .send()
            .await
            .map_err(|e| LocateError::Lookup(e.to_string()))?;

        let body: ReverseGeocodeResponse = response
            .json()
            .await
            .map_err(|e| LocateError::Lookup(e.to_string()))?;

        Ok(PlaceName {
            city: body.city,
            region: body.principal_subdivision,
            locality: body.locality,
        })
    }
}

// ─── resolution policy ───────────────────────────────────────────────────────

/// Resolve a history label using the default HTTP providers.
pub async fn resolve_current_location() -> String {
    let client = match reqwest::Client::builder().timeout(HTTP_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, "could not build an HTTP client");
            return UNKNOWN_LOCATION.to_string();
        }
    };

    let provider = IpApiLocationProvider::new(client.clone());
    let geocoder = BigDataCloudGeocoder::new(client);

    resolve_location(&provider, &geocoder).await
}

/// Resolve a history label from any provider pair, bounded by
/// [`POSITION_TIMEOUT`].
pub async fn resolve_location(
    provider: &dyn LocationProvider,
    geocoder: &dyn ReverseGeocoder,
) -> String {
    resolve_location_with_timeout(provider, geocoder, POSITION_TIMEOUT).await
}

async fn resolve_location_with_timeout(
    provider: &dyn LocationProvider,
    geocoder: &dyn ReverseGeocoder,
    timeout: Duration,
) -> String {
    let position = match tokio::time::timeout(timeout, provider.current_position()).await {
        Ok(Ok(position)) => position,
        Ok(Err(e)) => {
            warn!(error = %e, "position lookup failed");
            return UNKNOWN_LOCATION.to_string();
        }
        Err(_) => {
            warn!("position lookup timed out");
            return UNKNOWN_LOCATION.to_string();
        }
    };

    match geocoder.place_name(position).await {
        Ok(place) => place.label().unwrap_or_else(|| coordinate_label(position)),
        Err(e) => {
            warn!(error = %e, "reverse geocoding failed");
            coordinate_label(position)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
