//! OSD 核心库
//!
//! XML 设置存储、快捷键模型与界面翻译

pub mod document;
pub mod error;
pub mod hotkey;
pub mod reporter;
pub mod settings;
pub mod translator;

pub use document::{Document, Element};
pub use error::{AppError, ErrorCode, HotkeyError, SettingsError, TranslationError};
pub use hotkey::{ActionKind, HotkeyEntry, KeyCombination};
pub use reporter::{ErrorKind, ErrorReporter, LogReporter};
pub use settings::{
    HideAnimation, HotkeyMap, OsdPosition, Settings, SettingsPaths, SettingsSnapshot,
    SharedSettings,
};
pub use translator::LanguageTranslator;
