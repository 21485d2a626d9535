//! 版本更新
//!
//! 远端只提供最新版本号（`X.Y` 文本），安装包按 `<base>/OSD-X.Y.{zip,msi}` 命名：
//! 便携版下载 zip，安装版下载 msi。获取版本号的网络传输由调用方实现 [`VersionSource`]。

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// 安装包名前缀
pub const PACKAGE_PREFIX: &str = "OSD";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("Invalid version string: '{0}'")]
    InvalidVersion(String),

    #[error("Failed to fetch latest version: {0}")]
    Source(String),
}

/// 主版本号.次版本号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// 当前程序的版本
    pub fn current() -> Self {
        Self::new(
            env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or_default(),
            env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or_default(),
        )
    }
}

impl FromStr for Version {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || UpdateError::InvalidVersion(s.to_string());
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let (major, minor) = trimmed.split_once('.').ok_or_else(invalid)?;
        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// 最新版本号的来源
pub trait VersionSource {
    fn latest_version(&self) -> Result<String, UpdateError>;
}

pub struct Updater<S: VersionSource> {
    current: Version,
    source: S,
    download_base: String,
}

impl<S: VersionSource> Updater<S> {
    pub fn new(current: Version, source: S, download_base: impl Into<String>) -> Self {
        Self {
            current,
            source,
            download_base: download_base.into(),
        }
    }

    pub fn current_version(&self) -> Version {
        self.current
    }

    pub fn remote_version(&self) -> Result<Version, UpdateError> {
        self.source.latest_version()?.parse()
    }

    /// 远端版本比当前版本新时返回 true；获取失败视为没有更新
    pub fn newer_version_available(&self) -> bool {
        match self.remote_version() {
            Ok(remote) => {
                tracing::info!("Current version {}, latest version {}", self.current, remote);
                remote > self.current
            }
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }

    pub fn download_url(&self, version: Version, portable: bool) -> String {
        let ext = if portable { "zip" } else { "msi" };
        format!(
            "{}/{}-{}.{}",
            self.download_base.trim_end_matches('/'),
            PACKAGE_PREFIX,
            version,
            ext
        )
    }
}
