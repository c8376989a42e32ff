//! 存储层模块
//!
//! 将解析结果持久化到用户主目录下的单个 JSON 文件
//!
//! ## 模块结构
//!
//! - [`record`](record::ConfigRecord) - 配置记录数据模型
//! - [`store`](store::ConfigStore) - 配置文件的读写

pub mod record;
pub mod store;

pub use record::ConfigRecord;
pub use store::{ConfigStore, CONFIG_FILE_NAME};
