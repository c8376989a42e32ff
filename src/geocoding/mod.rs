//! 地理编码网关
//!
//! 将自由文本地址解析为候选位置列表
//!
//! - [`Geocoder`] - 网关抽象 trait
//! - [`google`](google::GoogleGeocoder) - Google Geocoding API 实现

pub mod google;

pub use google::GoogleGeocoder;

/// 地理编码返回的候选位置
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// 服务商给出的格式化地址
    pub formatted_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Candidate {
    pub fn new(formatted_address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            formatted_address: formatted_address.into(),
            latitude,
            longitude,
        }
    }
}

/// 一次地理编码请求
#[derive(Debug, Clone, Copy)]
pub struct GeocodeRequest<'a> {
    pub address: &'a str,
    pub api_key: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum GeocodingError {
    #[error("API key is missing")]
    MissingApiKey,

    #[error("geocoding request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// 服务商返回了非 `OK` / `ZERO_RESULTS` 的状态
    #[error("geocoding provider answered {status}: {message}")]
    Provider { status: String, message: String },
}

/// 地理编码网关
///
/// 同步调用；按服务商给出的顺序返回零个或多个候选
pub trait Geocoder {
    fn geocode(&self, request: &GeocodeRequest<'_>) -> Result<Vec<Candidate>, GeocodingError>;
}

impl<T: Geocoder + ?Sized> Geocoder for &T {
    fn geocode(&self, request: &GeocodeRequest<'_>) -> Result<Vec<Candidate>, GeocodingError> {
        (**self).geocode(request)
    }
}

/// 请求 URL 中带有 API Key，不保留在错误里
impl From<reqwest::Error> for GeocodingError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}
