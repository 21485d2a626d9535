//! 设置目录与程序资源路径
//!
//! 程序目录下存在设置文件即视为便携版；否则使用用户的漫游应用数据目录。
//! 便携状态每次查询都会重新判断。

use std::path::{Path, PathBuf};

use tracing::warn;

pub const APP_DIR: &str = "OSD";
pub const SETTINGS_FILE: &str = "Settings.xml";
pub const LANGUAGES_DIR: &str = "Languages";
pub const SKINS_DIR: &str = "Skins";
pub const SKIN_FILE: &str = "Skin.xml";
pub const MAIN_APP: &str = "osd.exe";
pub const SETTINGS_APP: &str = "Settings.exe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPaths {
    app_dir: PathBuf,
    /// 用户数据根目录（不含 `APP_DIR`），为空时退回程序目录
    user_data_dir: Option<PathBuf>,
}

impl SettingsPaths {
    pub fn new(app_dir: impl Into<PathBuf>, user_data_dir: Option<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
            user_data_dir,
        }
    }

    /// 根据当前可执行文件位置与系统目录构造
    pub fn detect() -> Self {
        let app_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        let user_data_dir = dirs::config_dir().or_else(dirs::data_local_dir);
        if user_data_dir.is_none() {
            warn!("No application data directory available; falling back to {}", app_dir.display());
        }
        Self::new(app_dir, user_data_dir)
    }

    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    pub fn is_portable(&self) -> bool {
        self.app_dir.join(SETTINGS_FILE).exists()
    }

    pub fn settings_dir(&self) -> PathBuf {
        if self.is_portable() {
            return self.app_dir.clone();
        }
        match &self.user_data_dir {
            Some(dir) => dir.join(APP_DIR),
            None => self.app_dir.clone(),
        }
    }

    pub fn settings_file(&self) -> PathBuf {
        self.settings_dir().join(SETTINGS_FILE)
    }

    pub fn languages_dir(&self) -> PathBuf {
        self.app_dir.join(LANGUAGES_DIR)
    }

    pub fn language_file(&self, language: &str) -> PathBuf {
        self.languages_dir().join(format!("{}.xml", language))
    }

    pub fn skins_dir(&self) -> PathBuf {
        self.app_dir.join(SKINS_DIR)
    }

    pub fn skin_file(&self, skin: &str) -> PathBuf {
        self.skins_dir().join(skin).join(SKIN_FILE)
    }

    pub fn main_app(&self) -> PathBuf {
        self.app_dir.join(MAIN_APP)
    }

    pub fn settings_app(&self) -> PathBuf {
        self.app_dir.join(SETTINGS_APP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_user_data_dir_when_not_portable() {
        let app = tempdir().unwrap();
        let data = tempdir().unwrap();
        let paths = SettingsPaths::new(app.path(), Some(data.path().to_path_buf()));

        assert!(!paths.is_portable());
        assert_eq!(paths.settings_dir(), data.path().join(APP_DIR));
        assert_eq!(paths.settings_file(), data.path().join(APP_DIR).join(SETTINGS_FILE));
    }

    #[test]
    fn test_portable_layout_is_reevaluated() {
        let app = tempdir().unwrap();
        let data = tempdir().unwrap();
        let paths = SettingsPaths::new(app.path(), Some(data.path().to_path_buf()));
        assert_eq!(paths.settings_dir(), data.path().join(APP_DIR));

        fs::write(app.path().join(SETTINGS_FILE), "<settings/>").unwrap();
        assert!(paths.is_portable());
        assert_eq!(paths.settings_dir(), app.path());
    }

    #[test]
    fn test_falls_back_to_app_dir() {
        let paths = SettingsPaths::new("/opt/osd", None);
        assert_eq!(paths.settings_dir(), PathBuf::from("/opt/osd"));
    }

    #[test]
    fn test_resource_paths() {
        let paths = SettingsPaths::new("/opt/osd", None);
        assert_eq!(
            paths.skin_file("Classic"),
            PathBuf::from("/opt/osd/Skins/Classic/Skin.xml")
        );
        assert_eq!(
            paths.language_file("English"),
            PathBuf::from("/opt/osd/Languages/English.xml")
        );
    }
}
