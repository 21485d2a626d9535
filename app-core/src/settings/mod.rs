//! 设置管理
//!
//! 在设置文档之上提供带默认值的强类型访问、快捷键表的读写以及语言翻译器的绑定。
//! 整个进程只持有一个实例，多线程访问时通过 [`SharedSettings`] 的单把锁串行化。

pub mod enums;
pub mod keys;
pub mod paths;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::document::{Document, Element};
use crate::error::{HotkeyError, SettingsError};
use crate::hotkey::{ActionKind, HotkeyEntry, KeyCombination};
use crate::reporter::{ErrorKind, ErrorReporter, LogReporter};
use crate::translator::LanguageTranslator;

pub use enums::{HideAnimation, NamedEnum, OsdPosition};
pub use keys::{Key, SettingValue};
pub use paths::SettingsPaths;

/// 进程内共享的设置实例
pub type SharedSettings = Arc<Mutex<Settings>>;

/// 快捷键映射：按键组合 -> 绑定
pub type HotkeyMap = BTreeMap<KeyCombination, HotkeyEntry>;

pub struct Settings {
    paths: SettingsPaths,
    file: PathBuf,
    document: Document,
    translator: Option<LanguageTranslator>,
    reporter: Arc<dyn ErrorReporter>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("file", &self.file)
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(SettingsPaths::detect(), Arc::new(LogReporter))
    }
}

impl Settings {
    /// 创建设置实例，此时文档为空，需要调用 [`Settings::load`]
    pub fn new(paths: SettingsPaths, reporter: Arc<dyn ErrorReporter>) -> Self {
        let file = paths.settings_file();
        Self {
            paths,
            file,
            document: Document::empty(),
            translator: None,
            reporter,
        }
    }

    pub fn into_shared(self) -> SharedSettings {
        Arc::new(Mutex::new(self))
    }

    /// 重新确定设置文件位置并加载
    pub fn load(&mut self) {
        self.translator = None;
        self.file = self.paths.settings_file();
        info!("Loading settings: {}", self.file.display());
        self.document = Document::load(&self.file, self.reporter.as_ref());
    }

    /// 写回设置文件
    pub fn save(&self) -> Result<(), SettingsError> {
        info!("Saving settings: {}", self.file.display());
        self.document.save(&self.file)
    }

    /// 丢弃所有设置，恢复默认值（不写盘）
    pub fn reset(&mut self) {
        self.document = Document::empty();
        self.translator = None;
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn paths(&self) -> &SettingsPaths {
        &self.paths
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn get<T: SettingValue>(&self, key: &Key<T>) -> T {
        T::read(&self.document, key)
    }

    pub fn set<T: SettingValue>(&mut self, key: &Key<T>, value: T) {
        T::write(&mut self.document, key, value);
    }

    pub fn audio_device_id(&self) -> String {
        self.get(&keys::AUDIO_DEVICE)
    }

    pub fn set_audio_device_id(&mut self, id: impl Into<String>) {
        self.set(&keys::AUDIO_DEVICE, id.into());
    }

    pub fn language_name(&self) -> String {
        self.get(&keys::LANGUAGE)
    }

    /// 更换语言后，下一次访问翻译器会重新绑定语言文件
    pub fn set_language_name(&mut self, name: impl Into<String>) {
        self.set(&keys::LANGUAGE, name.into());
        self.translator = None;
    }

    pub fn always_on_top(&self) -> bool {
        self.get(&keys::ON_TOP)
    }

    pub fn set_always_on_top(&mut self, enable: bool) {
        self.set(&keys::ON_TOP, enable);
    }

    pub fn hide_fullscreen(&self) -> bool {
        self.get(&keys::HIDE_FULLSCREEN)
    }

    pub fn set_hide_fullscreen(&mut self, enable: bool) {
        self.set(&keys::HIDE_FULLSCREEN, enable);
    }

    /// 显示 OSD 的显示器名称，空字符串表示主显示器
    pub fn monitor(&self) -> String {
        self.get(&keys::MONITOR)
    }

    pub fn set_monitor(&mut self, name: impl Into<String>) {
        self.set(&keys::MONITOR, name.into());
    }

    pub fn osd_edge_offset(&self) -> i32 {
        self.get(&keys::OSD_EDGE_OFFSET)
    }

    pub fn set_osd_edge_offset(&mut self, offset: i32) {
        self.set(&keys::OSD_EDGE_OFFSET, offset);
    }

    pub fn osd_position(&self) -> OsdPosition {
        self.get(&keys::OSD_POSITION)
    }

    pub fn set_osd_position(&mut self, position: OsdPosition) {
        self.set(&keys::OSD_POSITION, position);
    }

    pub fn osd_x(&self) -> i32 {
        self.get(&keys::OSD_X)
    }

    pub fn set_osd_x(&mut self, x: i32) {
        self.set(&keys::OSD_X, x);
    }

    pub fn osd_y(&self) -> i32 {
        self.get(&keys::OSD_Y)
    }

    pub fn set_osd_y(&mut self, y: i32) {
        self.set(&keys::OSD_Y, y);
    }

    pub fn hide_animation(&self) -> HideAnimation {
        self.get(&keys::HIDE_ANIMATION)
    }

    pub fn set_hide_animation(&mut self, animation: HideAnimation) {
        self.set(&keys::HIDE_ANIMATION, animation);
    }

    pub fn hide_delay(&self) -> i32 {
        self.get(&keys::HIDE_DELAY)
    }

    pub fn set_hide_delay(&mut self, delay: i32) {
        self.set(&keys::HIDE_DELAY, delay);
    }

    pub fn hide_speed(&self) -> i32 {
        self.get(&keys::HIDE_SPEED)
    }

    pub fn set_hide_speed(&mut self, speed: i32) {
        self.set(&keys::HIDE_SPEED, speed);
    }

    pub fn notify_icon_enabled(&self) -> bool {
        self.get(&keys::NOTIFY_ICON)
    }

    pub fn set_notify_icon_enabled(&mut self, enable: bool) {
        self.set(&keys::NOTIFY_ICON, enable);
    }

    pub fn sound_effects_enabled(&self) -> bool {
        self.get(&keys::SOUND_EFFECTS)
    }

    pub fn set_sound_effects_enabled(&mut self, enable: bool) {
        self.set(&keys::SOUND_EFFECTS, enable);
    }

    pub fn current_skin(&self) -> String {
        self.get(&keys::SKIN)
    }

    /// 切换皮肤，皮肤定义文件不存在时保持原值并返回 false
    pub fn set_current_skin(&mut self, name: &str) -> bool {
        let skin_file = self.paths.skin_file(name);
        if !skin_file.exists() {
            warn!("Skin definition not found: {}", skin_file.display());
            return false;
        }
        self.set(&keys::SKIN, name.to_string());
        true
    }

    pub fn skin_xml(&self) -> PathBuf {
        self.paths.skin_file(&self.current_skin())
    }

    /// 启动设置程序，启动失败时上报并返回 false
    pub fn launch_settings_app(&self) -> bool {
        let app = self.paths.settings_app();
        info!("Launching settings app: {}", app.display());
        match Command::new(&app).spawn() {
            Ok(_) => true,
            Err(e) => {
                warn!("Could not launch {}: {}", app.display(), e);
                self.reporter.report(ErrorKind::NotFound, &app.display().to_string());
                false
            }
        }
    }

    /// 读取快捷键表
    ///
    /// 缺少动作或按键组合、动作无法识别、参数不合法的条目都会被跳过；
    /// 按键组合重复时以文档中最后一条为准。
    pub fn hotkeys(&self) -> HotkeyMap {
        let mut mappings = HotkeyMap::new();
        let Some(container) = self.document.element(keys::HOTKEYS) else {
            return mappings;
        };

        for element in container.children_named(keys::HOTKEY) {
            match read_hotkey(element) {
                Ok(entry) => {
                    debug!("{}", entry);
                    mappings.insert(entry.combination, entry);
                }
                Err(e) => warn!("{}; skipping", e),
            }
        }
        mappings
    }

    /// 用给定的绑定替换快捷键表，不合法的条目不会写入
    pub fn set_hotkeys(&mut self, entries: &[HotkeyEntry]) {
        let container = self.document.get_or_create_element(keys::HOTKEYS);
        container.clear_children();

        for entry in entries {
            if let Err(e) = entry.validate() {
                debug!("Not saving {}: {}", entry, e);
                continue;
            }
            container.push_child(write_hotkey(entry));
        }
    }

    /// 当前语言的翻译器，首次访问时创建
    pub fn translator(&mut self) -> &LanguageTranslator {
        if self.translator.is_none() {
            let translator = build_translator(&self.paths, &self.language_name());
            self.translator = Some(translator);
        }
        self.translator.get_or_insert_with(LanguageTranslator::empty)
    }

    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            settings_file: self.file.clone(),
            portable: self.paths.is_portable(),
            audio_device_id: self.audio_device_id(),
            language: self.language_name(),
            always_on_top: self.always_on_top(),
            hide_fullscreen: self.hide_fullscreen(),
            monitor: self.monitor(),
            osd_edge_offset: self.osd_edge_offset(),
            osd_position: self.osd_position(),
            osd_x: self.osd_x(),
            osd_y: self.osd_y(),
            hide_animation: self.hide_animation(),
            hide_delay: self.hide_delay(),
            hide_speed: self.hide_speed(),
            notify_icon: self.notify_icon_enabled(),
            sound_effects: self.sound_effects_enabled(),
            skin: self.current_skin(),
            hotkeys: self.hotkeys().into_values().collect(),
        }
    }
}

/// 供界面层展示的设置快照
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    pub settings_file: PathBuf,
    pub portable: bool,
    pub audio_device_id: String,
    pub language: String,
    pub always_on_top: bool,
    pub hide_fullscreen: bool,
    pub monitor: String,
    pub osd_edge_offset: i32,
    pub osd_position: OsdPosition,
    pub osd_x: i32,
    pub osd_y: i32,
    pub hide_animation: HideAnimation,
    pub hide_delay: i32,
    pub hide_speed: i32,
    pub notify_icon: bool,
    pub sound_effects: bool,
    pub skin: String,
    pub hotkeys: Vec<HotkeyEntry>,
}

fn read_hotkey(element: &Element) -> Result<HotkeyEntry, HotkeyError> {
    let name = element
        .attribute(keys::HOTKEY_ACTION)
        .ok_or(HotkeyError::MissingAction)?;
    let action =
        ActionKind::from_name(name).ok_or_else(|| HotkeyError::UnknownAction(name.to_string()))?;

    let combination = element
        .attribute(keys::HOTKEY_COMBINATION)
        .ok_or(HotkeyError::MissingCombination)?;
    let combination = KeyCombination::from_attribute(combination)?;

    let args = element
        .children_named(keys::HOTKEY_ARG)
        .map(|arg| arg.text().unwrap_or_default().to_string())
        .collect();

    let entry = HotkeyEntry { action, combination, args };
    entry.validate()?;
    Ok(entry)
}

fn write_hotkey(entry: &HotkeyEntry) -> Element {
    let mut element = Element::new(keys::HOTKEY);
    element.set_attribute(keys::HOTKEY_COMBINATION, entry.combination.raw());
    element.set_attribute(keys::HOTKEY_ACTION, entry.action.name());
    for arg in &entry.args {
        let mut arg_element = Element::new(keys::HOTKEY_ARG);
        arg_element.set_text(arg.as_str());
        element.push_child(arg_element);
    }
    element
}

fn build_translator(paths: &SettingsPaths, language: &str) -> LanguageTranslator {
    let file = paths.language_file(language);
    if !file.exists() {
        debug!("Language file {} not found; using built-in strings", file.display());
        return LanguageTranslator::empty();
    }

    let mut translator = LanguageTranslator::new(file);
    if let Err(e) = translator.load_translations() {
        warn!("{}", e);
    }
    translator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::testing::RecordingReporter;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    struct Fixture {
        app: TempDir,
        _data: TempDir,
        reporter: Arc<RecordingReporter>,
        settings: Settings,
    }

    impl Fixture {
        fn new() -> Self {
            let app = tempdir().unwrap();
            let data = tempdir().unwrap();
            let reporter = Arc::new(RecordingReporter::default());
            let paths = SettingsPaths::new(app.path(), Some(data.path().to_path_buf()));
            let settings = Settings::new(paths, reporter.clone());
            Self { app, _data: data, reporter, settings }
        }

        fn with_file(content: &str) -> Self {
            let mut fixture = Self::new();
            let file = fixture.settings.file().to_path_buf();
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(&file, content).unwrap();
            fixture.settings.load();
            fixture
        }

        fn reload(&mut self) {
            self.settings.load();
        }
    }

    #[test]
    fn test_absent_file_uses_defaults_and_saves_root() {
        let mut fixture = Fixture::new();
        fixture.settings.load();

        assert!(!fixture.settings.always_on_top());
        assert_eq!(fixture.settings.language_name(), "English");
        assert_eq!(fixture.settings.current_skin(), "Classic");
        assert_eq!(fixture.settings.osd_position(), OsdPosition::Bottom);
        assert_eq!(fixture.settings.hide_animation(), HideAnimation::Fade);
        assert_eq!(fixture.settings.hide_delay(), 800);
        assert_eq!(fixture.settings.osd_edge_offset(), 140);
        assert!(fixture.settings.notify_icon_enabled());
        assert!(fixture.settings.hotkeys().is_empty());
        assert!(fixture.reporter.reports().is_empty());

        fixture.settings.save().unwrap();
        let written = fs::read_to_string(fixture.settings.file()).unwrap();
        assert!(written.contains("<settings/>"));
    }

    #[test]
    fn test_malformed_files_fall_back_to_defaults() {
        for content in ["", "not xml at all <", "<settings><onTop>true</settings>", "<other/>"] {
            let fixture = Fixture::with_file(content);
            assert!(!fixture.settings.always_on_top(), "content: {:?}", content);
            assert_eq!(fixture.settings.hide_speed(), 765);
            assert_eq!(fixture.settings.osd_position(), OsdPosition::Bottom);
            assert!(fixture.settings.hotkeys().is_empty());
            assert_eq!(fixture.settings.document().root().name(), "settings");
        }
    }

    #[test]
    fn test_missing_root_is_reported() {
        let fixture = Fixture::with_file("<config/>");
        assert_eq!(
            fixture.reporter.reports(),
            vec![(ErrorKind::MissingXml, "<settings>".to_string())]
        );
    }

    #[test]
    fn test_on_top_round_trip() {
        let mut fixture = Fixture::with_file("<settings><onTop>true</onTop></settings>");
        assert!(fixture.settings.always_on_top());

        fixture.settings.set_always_on_top(false);
        fixture.settings.save().unwrap();
        fixture.reload();
        assert!(!fixture.settings.always_on_top());
    }

    #[test]
    fn test_typed_setters_persist() {
        let mut fixture = Fixture::new();
        fixture.settings.load();
        fixture.settings.set_language_name("Deutsch");
        fixture.settings.set_osd_position(OsdPosition::TopLeft);
        fixture.settings.set_hide_animation(HideAnimation::None);
        fixture.settings.set_osd_x(-20);
        fixture.settings.set_osd_y(300);
        fixture.settings.set_hide_delay(1500);
        fixture.settings.set_sound_effects_enabled(false);
        fixture.settings.set_monitor(r"\\.\DISPLAY2");
        fixture.settings.set_audio_device_id("{0.0.0.00000000}.{abc}");
        fixture.settings.save().unwrap();

        let written = fs::read_to_string(fixture.settings.file()).unwrap();
        assert!(written.contains("<osdPosition>Top-left</osdPosition>"));
        assert!(written.contains("<hideAnimation>None</hideAnimation>"));

        fixture.reload();
        let settings = &fixture.settings;
        assert_eq!(settings.language_name(), "Deutsch");
        assert_eq!(settings.osd_position(), OsdPosition::TopLeft);
        assert_eq!(settings.hide_animation(), HideAnimation::None);
        assert_eq!((settings.osd_x(), settings.osd_y()), (-20, 300));
        assert_eq!(settings.hide_delay(), 1500);
        assert!(!settings.sound_effects_enabled());
        assert_eq!(settings.monitor(), r"\\.\DISPLAY2");
        assert_eq!(settings.audio_device_id(), "{0.0.0.00000000}.{abc}");
    }

    #[test]
    fn test_enum_names_are_case_insensitive() {
        let fixture = Fixture::with_file(
            "<settings><osdPosition>bottom-RIGHT</osdPosition><hideAnimation>fAdE</hideAnimation></settings>",
        );
        assert_eq!(fixture.settings.osd_position(), OsdPosition::BottomRight);
        assert_eq!(fixture.settings.hide_animation(), HideAnimation::Fade);

        let fixture = Fixture::with_file("<settings><osdPosition>Nowhere</osdPosition></settings>");
        assert_eq!(fixture.settings.osd_position(), OsdPosition::Bottom);
    }

    #[test]
    fn test_skin_requires_definition_file() {
        let mut fixture = Fixture::new();
        fixture.settings.load();

        assert!(!fixture.settings.set_current_skin("Modern"));
        assert_eq!(fixture.settings.current_skin(), "Classic");
        assert!(!fixture.settings.document().has_element("skin"));

        let skin_dir = fixture.app.path().join("Skins").join("Modern");
        fs::create_dir_all(&skin_dir).unwrap();
        fs::write(skin_dir.join("Skin.xml"), "<skin/>").unwrap();

        assert!(fixture.settings.set_current_skin("Modern"));
        assert_eq!(fixture.settings.current_skin(), "Modern");
        assert_eq!(fixture.settings.skin_xml(), skin_dir.join("Skin.xml"));
    }

    #[test]
    fn test_single_mute_hotkey() {
        let fixture = Fixture::with_file(
            r#"<settings><hotkeys><hotkey action="Mute" combination="4224"/></hotkeys></settings>"#,
        );
        let hotkeys = fixture.settings.hotkeys();
        assert_eq!(hotkeys.len(), 1);
        let entry = &hotkeys[&KeyCombination::new(4224)];
        assert_eq!(entry.action, ActionKind::Mute);
        assert!(entry.args.is_empty());
    }

    #[test]
    fn test_invalid_hotkeys_are_skipped() {
        let fixture = Fixture::with_file(
            r#"<settings><hotkeys>
                <hotkey action="Explode" combination="1"/>
                <hotkey combination="2"/>
                <hotkey action="Mute"/>
                <hotkey action="Mute" combination="-5"/>
                <hotkey action="Mute" combination="lots"/>
                <hotkey action="VolumeUp" combination="6"/>
                <hotkey action="EjectDrive" combination="7"><arg>CD</arg></hotkey>
                <hotkey action="volumeup" combination="8"><arg>5</arg></hotkey>
                <notahotkey action="Mute" combination="9"/>
            </hotkeys></settings>"#,
        );
        let hotkeys = fixture.settings.hotkeys();
        assert_eq!(hotkeys.keys().map(|k| k.raw()).collect::<Vec<_>>(), vec![8]);
        assert_eq!(hotkeys[&KeyCombination::new(8)].action, ActionKind::VolumeUp);
        assert_eq!(hotkeys[&KeyCombination::new(8)].args, vec!["5".to_string()]);
    }

    #[test]
    fn test_duplicate_combination_last_wins() {
        let fixture = Fixture::with_file(
            r#"<settings><hotkeys>
                <hotkey action="Mute" combination="100"/>
                <hotkey action="SetVolume" combination="100"><arg>50</arg></hotkey>
                <hotkey action="Exit" combination="200"/>
                <hotkey action="VolumeDown" combination="100"><arg>3</arg></hotkey>
            </hotkeys></settings>"#,
        );
        let hotkeys = fixture.settings.hotkeys();
        assert_eq!(hotkeys.len(), 2);
        assert_eq!(
            hotkeys[&KeyCombination::new(100)],
            HotkeyEntry::new(ActionKind::VolumeDown, 100u32).with_args(["3"])
        );
    }

    #[test]
    fn test_hotkeys_round_trip_through_file() {
        let entries = vec![
            HotkeyEntry::new(ActionKind::VolumeUp, 12345u32).with_args(["5"]),
            HotkeyEntry::new(ActionKind::Mute, 4224u32),
            HotkeyEntry::new(ActionKind::Run, 77u32).with_args([r"C:\Tools\a & b.exe", "--quiet"]),
            HotkeyEntry::new(ActionKind::EjectDrive, 78u32).with_args(["E"]),
            // 不合法，不会写入
            HotkeyEntry::new(ActionKind::SetVolume, 79u32).with_args(["150"]),
        ];

        let mut fixture = Fixture::new();
        fixture.settings.load();
        fixture.settings.set_hotkeys(&entries);
        fixture.settings.save().unwrap();
        fixture.reload();

        let expected: HotkeyMap = entries
            .iter()
            .filter(|e| e.is_valid())
            .map(|e| (e.combination, e.clone()))
            .collect();
        assert_eq!(fixture.settings.hotkeys(), expected);

        let written = fs::read_to_string(fixture.settings.file()).unwrap();
        assert!(written.contains(r#"<hotkey combination="12345" action="VolumeUp">"#));
        assert!(written.contains("<arg>5</arg>"));
    }

    #[test]
    fn test_whitespace_argument_round_trip() {
        let entry = HotkeyEntry::new(ActionKind::Run, 77u32).with_args(["notepad.exe", " "]);
        let mut fixture = Fixture::new();
        fixture.settings.load();
        fixture.settings.set_hotkeys(std::slice::from_ref(&entry));
        fixture.settings.save().unwrap();
        fixture.reload();

        let hotkeys = fixture.settings.hotkeys();
        assert_eq!(hotkeys.get(&KeyCombination::new(77)), Some(&entry));
    }

    #[test]
    fn test_launch_missing_settings_app_reports_not_found() {
        let mut fixture = Fixture::new();
        fixture.settings.load();

        assert!(!fixture.settings.launch_settings_app());
        let expected = fixture.app.path().join("Settings.exe").display().to_string();
        assert_eq!(fixture.reporter.reports(), vec![(ErrorKind::NotFound, expected)]);
    }

    #[test]
    fn test_set_hotkeys_replaces_previous_entries() {
        let mut fixture = Fixture::new();
        fixture.settings.load();
        fixture
            .settings
            .set_hotkeys(&[HotkeyEntry::new(ActionKind::Mute, 1u32)]);
        fixture
            .settings
            .set_hotkeys(&[HotkeyEntry::new(ActionKind::Exit, 2u32)]);

        let hotkeys = fixture.settings.hotkeys();
        assert_eq!(hotkeys.len(), 1);
        assert_eq!(hotkeys[&KeyCombination::new(2)].action, ActionKind::Exit);
        let containers = fixture
            .settings
            .document()
            .root()
            .children_named("hotkeys")
            .count();
        assert_eq!(containers, 1);
    }

    #[test]
    fn test_portable_settings_file_is_preferred() {
        let mut fixture = Fixture::new();
        fs::write(
            fixture.app.path().join("Settings.xml"),
            "<settings><hideSpeed>10</hideSpeed></settings>",
        )
        .unwrap();
        fixture.settings.load();
        assert_eq!(fixture.settings.file(), fixture.app.path().join("Settings.xml"));
        assert_eq!(fixture.settings.hide_speed(), 10);
        assert!(fixture.settings.snapshot().portable);
    }

    #[test]
    fn test_translator_binds_language_file() {
        let mut fixture = Fixture::with_file("<settings><language>Deutsch</language></settings>");
        assert_eq!(fixture.settings.translator().translate("Hotkeys"), "Hotkeys");

        let languages = fixture.app.path().join("Languages");
        fs::create_dir_all(&languages).unwrap();
        fs::write(
            languages.join("Deutsch.xml"),
            "<translation><string><original>Hotkeys</original><translation>Tastenkürzel</translation></string></translation>",
        )
        .unwrap();

        // 已创建的翻译器在重新加载前保持不变
        assert_eq!(fixture.settings.translator().translate("Hotkeys"), "Hotkeys");
        fixture.reload();
        assert_eq!(fixture.settings.translator().translate("Hotkeys"), "Tastenkürzel");

        fixture.settings.set_language_name("Français");
        assert!(fixture.settings.translator().is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut fixture = Fixture::with_file("<settings><onTop>true</onTop><hideDelay>5</hideDelay></settings>");
        fixture.settings.reset();
        assert!(!fixture.settings.always_on_top());
        assert_eq!(fixture.settings.hide_delay(), 800);
    }

    #[test]
    fn test_snapshot_reflects_settings() {
        let mut fixture = Fixture::new();
        fixture.settings.load();
        fixture
            .settings
            .set_hotkeys(&[HotkeyEntry::new(ActionKind::Mute, 4224u32)]);

        let snapshot = fixture.settings.snapshot();
        assert_eq!(snapshot.hotkeys.len(), 1);
        assert!(!snapshot.portable);
        assert_eq!(snapshot.language, "English");
    }
}
