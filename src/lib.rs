pub mod cli;
pub mod core;
pub mod geocoding;
pub mod storage;

use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 日志写到 stderr，避免与 stdout 上的提示和输出混在一起。
/// 设置了 `RUST_LOG` 时以其为准。
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
    Ok(())
}
