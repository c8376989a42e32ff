use super::record::ConfigRecord;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 默认配置文件名，位于用户主目录下
pub const CONFIG_FILE_NAME: &str = ".saveConfig.json";

/// 配置文件权限：仅所有者和所属组可读写
#[cfg(unix)]
const CONFIG_FILE_MODE: u32 = 0o660;

/// 配置存储
///
/// 以文件路径为唯一标识的单条记录。文件存在即表示已完成配置。
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用 `~/.saveConfig.json` 打开存储
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// 默认配置文件路径
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 检查配置文件是否存在
    ///
    /// 除“不存在”以外的文件系统错误都会返回 `Err`
    pub fn exists(&self) -> Result<bool> {
        self.path
            .try_exists()
            .with_context(|| format!("Failed to check configuration file {}", self.path.display()))
    }

    /// 读取并解析配置文件
    pub fn load(&self) -> Result<ConfigRecord> {
        let file = fs::File::open(&self.path)
            .with_context(|| format!("Failed to open configuration file {}", self.path.display()))?;
        let record = serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("Failed to parse configuration file {}", self.path.display()))?;
        debug!("Loaded configuration from {:?}", self.path);
        Ok(record)
    }

    /// 写入配置文件（不存在则创建，存在则覆盖）
    pub fn save(&self, record: &ConfigRecord) -> Result<()> {
        let content =
            serde_json::to_string_pretty(record).context("Failed to serialize configuration")?;

        let mut file = open_for_write(&self.path)
            .with_context(|| format!("Failed to create configuration file {}", self.path.display()))?;
        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .with_context(|| format!("Failed to write configuration file {}", self.path.display()))?;

        // mode() 只在新建文件时生效
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(CONFIG_FILE_MODE))
                .with_context(|| {
                    format!("Failed to restrict permissions of {}", self.path.display())
                })?;
        }

        debug!("Saved configuration to {:?}", self.path);
        Ok(())
    }
}

#[cfg(unix)]
fn open_for_write(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(CONFIG_FILE_MODE)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
