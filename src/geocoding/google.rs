//! Google Geocoding API 客户端
//!
//! 文档：<https://developers.google.com/maps/documentation/geocoding/requests-geocoding>

use super::{Candidate, GeocodeRequest, Geocoder, GeocodingError};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Google Geocoding API 网关
#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl GoogleGeocoder {
    /// 创建网关；请求不设超时
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, GeocodingError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl Geocoder for GoogleGeocoder {
    fn geocode(&self, request: &GeocodeRequest<'_>) -> Result<Vec<Candidate>, GeocodingError> {
        if request.api_key.is_empty() {
            return Err(GeocodingError::MissingApiKey);
        }
        debug!("Geocoding '{}' via {}", request.address, self.endpoint);

        let response: GeocodeResponse = self
            .client
            .get(&self.endpoint)
            .query(&[("address", request.address), ("key", request.api_key)])
            .send()?
            .error_for_status()?
            .json()?;

        into_candidates(response)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

fn into_candidates(response: GeocodeResponse) -> Result<Vec<Candidate>, GeocodingError> {
    let GeocodeResponse {
        status,
        error_message,
        results,
    } = response;

    match status.as_str() {
        STATUS_OK => Ok(results
            .into_iter()
            .map(|r| {
                let LatLng { lat, lng } = r.geometry.location;
                Candidate::new(r.formatted_address, lat, lng)
            })
            .collect()),
        STATUS_ZERO_RESULTS => Ok(Vec::new()),
        _ => Err(GeocodingError::Provider {
            status: status.clone(),
            message: error_message.unwrap_or_else(|| "no error message".to_string()),
        }),
    }
}
