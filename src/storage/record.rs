//! 配置记录数据模型
//!
//! ## 文件格式
//!
//! ```json
//! {
//!   "Address": "Jl. Merdeka No. 1, Jakarta, Indonesia",
//!   "Lat": -6.175392,
//!   "Lng": 106.827153,
//!   "api_key": "AIza..."
//! }
//! ```
//!
//! 读取时较宽松：缺失的字段取默认值，未知字段忽略。

use serde::{Deserialize, Serialize};

/// 已解析的位置配置
///
/// 四个字段总是来自同一次成功的地址解析，一起写入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRecord {
    /// 地理编码服务返回的格式化地址
    #[serde(rename = "Address", alias = "address")]
    pub address: String,

    /// 纬度（度）
    #[serde(rename = "Lat", alias = "lat")]
    pub latitude: f64,

    /// 经度（度）
    #[serde(rename = "Lng", alias = "lng")]
    pub longitude: f64,

    /// 地理编码服务的 API Key（明文保存）
    pub api_key: String,
}

impl ConfigRecord {
    pub fn new(
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            latitude,
            longitude,
            api_key: api_key.into(),
        }
    }
}
