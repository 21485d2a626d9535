//! 全局快捷键管理器
//!
//! 维护按键组合到绑定的注册表；按键事件通过 [`HotkeyManager::dispatch`] 转换成命令

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use app_core::{HotkeyEntry, HotkeyError, KeyCombination, Settings};
use parking_lot::Mutex;

use super::command::HotkeyCommand;

/// 快捷键管理器
#[derive(Debug, Default)]
pub struct HotkeyManager {
    /// 已注册的快捷键
    registered: Arc<Mutex<BTreeMap<KeyCombination, HotkeyEntry>>>,
    /// 是否响应按键
    running: Arc<AtomicBool>,
}

impl HotkeyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用设置中的快捷键表替换当前注册表，返回注册数量
    pub fn reload(&self, settings: &Settings) -> usize {
        let hotkeys = settings.hotkeys();
        let count = hotkeys.len();
        *self.registered.lock() = hotkeys;
        tracing::info!("Registered {} hotkeys from settings", count);
        count
    }

    /// 注册快捷键
    pub fn register(&self, entry: HotkeyEntry) -> Result<(), HotkeyError> {
        entry.validate()?;

        let mut registered = self.registered.lock();
        if registered.contains_key(&entry.combination) {
            return Err(HotkeyError::AlreadyRegistered(entry.combination.to_string()));
        }
        tracing::info!("Registered shortcut: {}", entry);
        registered.insert(entry.combination, entry);
        Ok(())
    }

    /// 以 `Ctrl+Shift+A` 形式的字符串注册
    pub fn register_shortcut(&self, shortcut: &str, entry: HotkeyEntry) -> Result<(), HotkeyError> {
        let combination: KeyCombination = shortcut.parse()?;
        self.register(HotkeyEntry { combination, ..entry })
    }

    /// 注销快捷键
    pub fn unregister(&self, combination: KeyCombination) -> Result<HotkeyEntry, HotkeyError> {
        let removed = self.registered.lock().remove(&combination);
        match removed {
            Some(entry) => {
                tracing::info!("Unregistered shortcut: {}", combination);
                Ok(entry)
            }
            None => Err(HotkeyError::NotFound(combination.to_string())),
        }
    }

    /// 注销所有快捷键
    pub fn unregister_all(&self) {
        self.registered.lock().clear();
        tracing::info!("Unregistered all shortcuts");
    }

    pub fn lookup(&self, combination: KeyCombination) -> Option<HotkeyEntry> {
        self.registered.lock().get(&combination).cloned()
    }

    pub fn is_registered(&self, combination: KeyCombination) -> bool {
        self.registered.lock().contains_key(&combination)
    }

    /// 获取所有已注册的快捷键（按组合值排序）
    pub fn registered(&self) -> Vec<HotkeyEntry> {
        self.registered.lock().values().cloned().collect()
    }

    /// 把按键事件转换成命令；未运行或未注册时返回 None
    pub fn dispatch(&self, combination: KeyCombination) -> Option<HotkeyCommand> {
        if !self.is_running() {
            return None;
        }

        let entry = self.lookup(combination)?;
        match HotkeyCommand::try_from(&entry) {
            Ok(command) => {
                tracing::debug!("{} -> {}", combination, command);
                Some(command)
            }
            Err(e) => {
                tracing::warn!("Cannot dispatch {}: {}", entry, e);
                None
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn start(&self) {
        self.running.store(true, Ordering::SeqCst);
    }

    /// 停止响应并清空注册表
    pub fn stop(&self) {
        if self.is_running() {
            self.unregister_all();
            self.running.store(false, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::shortcut::command::VolumeUnit;
    use app_core::{ActionKind, LogReporter, SettingsPaths};
    use std::fs;
    use tempfile::tempdir;

    const CTRL_M: u32 = 0x20000 | 0x4D;

    #[test]
    fn test_register_rejects_duplicates() {
        let manager = HotkeyManager::new();
        manager.register(HotkeyEntry::new(ActionKind::Mute, CTRL_M)).unwrap();

        let err = manager
            .register(HotkeyEntry::new(ActionKind::Exit, CTRL_M))
            .unwrap_err();
        assert_eq!(err, HotkeyError::AlreadyRegistered("Ctrl+M".to_string()));
        assert_eq!(manager.lookup(KeyCombination::new(CTRL_M)).unwrap().action, ActionKind::Mute);
    }

    #[test]
    fn test_register_rejects_invalid_entries() {
        let manager = HotkeyManager::new();
        assert!(manager.register(HotkeyEntry::new(ActionKind::SetVolume, 1u32)).is_err());
        assert!(manager.registered().is_empty());
    }

    #[test]
    fn test_register_shortcut_string() {
        let manager = HotkeyManager::new();
        manager
            .register_shortcut("ctrl+m", HotkeyEntry::new(ActionKind::Mute, 0u32))
            .unwrap();
        assert!(manager.is_registered(KeyCombination::new(CTRL_M)));
        assert!(manager
            .register_shortcut("Ctrl+Shift", HotkeyEntry::new(ActionKind::Mute, 0u32))
            .is_err());
    }

    #[test]
    fn test_unregister() {
        let manager = HotkeyManager::new();
        manager.register(HotkeyEntry::new(ActionKind::Mute, CTRL_M)).unwrap();
        manager.unregister(KeyCombination::new(CTRL_M)).unwrap();
        assert!(matches!(
            manager.unregister(KeyCombination::new(CTRL_M)),
            Err(HotkeyError::NotFound(_))
        ));
    }

    #[test]
    fn test_dispatch_requires_running() {
        let manager = HotkeyManager::new();
        manager
            .register(HotkeyEntry::new(ActionKind::VolumeUp, CTRL_M).with_args(["5", "percent"]))
            .unwrap();
        assert_eq!(manager.dispatch(KeyCombination::new(CTRL_M)), None);

        manager.start();
        assert_eq!(
            manager.dispatch(KeyCombination::new(CTRL_M)),
            Some(HotkeyCommand::IncreaseVolume { amount: 5, unit: VolumeUnit::Percent })
        );
        assert_eq!(manager.dispatch(KeyCombination::new(1)), None);

        manager.stop();
        assert!(!manager.is_running());
        assert!(manager.registered().is_empty());
    }

    #[test]
    fn test_reload_from_settings() {
        let app = tempdir().unwrap();
        fs::write(
            app.path().join("Settings.xml"),
            r#"<settings><hotkeys>
                <hotkey action="Mute" combination="4224"/>
                <hotkey action="Bogus" combination="1"/>
            </hotkeys></settings>"#,
        )
        .unwrap();
        let mut settings = Settings::new(SettingsPaths::new(app.path(), None), Arc::new(LogReporter));
        settings.load();

        let manager = HotkeyManager::new();
        manager.register(HotkeyEntry::new(ActionKind::Exit, 7u32)).unwrap();
        assert_eq!(manager.reload(&settings), 1);
        assert!(!manager.is_registered(KeyCombination::new(7)));
        assert_eq!(manager.lookup(KeyCombination::new(4224)).unwrap().action, ActionKind::Mute);
    }
}
