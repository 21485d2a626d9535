//! 应用状态
//!
//! 定义全局运行时状态

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use app_core::{Settings, SharedSettings};

use crate::modules::shortcut::HotkeyManager;

/// 应用运行时状态
#[derive(Clone)]
pub struct AppState {
    pub settings: SharedSettings,
    pub hotkeys: Arc<HotkeyManager>,
    /// 设置窗口是否打开
    pub is_settings_open: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(settings: SharedSettings) -> Self {
        Self {
            settings,
            hotkeys: Arc::new(HotkeyManager::new()),
            is_settings_open: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 按当前设置重新注册快捷键
    pub fn reload_hotkeys(&self) -> usize {
        let settings = self.settings.lock();
        self.hotkeys.reload(&settings)
    }

    /// 重新读取设置文件并刷新快捷键
    pub fn reload_settings(&self) -> usize {
        self.settings.lock().load();
        self.reload_hotkeys()
    }

    /// 在同一把锁内读取设置
    pub fn with_settings<R>(&self, f: impl FnOnce(&Settings) -> R) -> R {
        f(&self.settings.lock())
    }

    pub fn is_settings_open(&self) -> bool {
        self.is_settings_open.load(Ordering::SeqCst)
    }

    pub fn set_settings_open(&self, open: bool) {
        self.is_settings_open.store(open, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::{ActionKind, HotkeyEntry, KeyCombination, LogReporter, SettingsPaths};
    use tempfile::tempdir;

    #[test]
    fn test_reload_settings_refreshes_hotkeys() {
        let app = tempdir().unwrap();
        let data = tempdir().unwrap();
        let paths = SettingsPaths::new(app.path(), Some(data.path().to_path_buf()));
        let mut settings = Settings::new(paths, Arc::new(LogReporter));
        settings.load();
        let state = AppState::new(settings.into_shared());
        assert_eq!(state.reload_hotkeys(), 0);

        {
            let mut settings = state.settings.lock();
            settings.set_hotkeys(&[HotkeyEntry::new(ActionKind::Mute, 4224u32)]);
            settings.save().unwrap();
        }
        assert_eq!(state.reload_settings(), 1);
        assert!(state.hotkeys.is_registered(KeyCombination::new(4224)));
        assert!(!state.with_settings(Settings::always_on_top));
    }

    #[test]
    fn test_settings_open_flag() {
        let app = tempdir().unwrap();
        let paths = SettingsPaths::new(app.path(), None);
        let state = AppState::new(Settings::new(paths, Arc::new(LogReporter)).into_shared());
        assert!(!state.is_settings_open());
        state.set_settings_open(true);
        assert!(state.is_settings_open());
    }
}
