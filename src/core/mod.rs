pub mod prompt;
pub mod resolver;

pub use prompt::Prompt;

// 重新导出 resolver 模块中的公共 API
pub use resolver::{choose_candidate, AddressResolver, API_KEY_HINT};
