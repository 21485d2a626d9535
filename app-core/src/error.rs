//! 错误类型定义
//!
//! 设置、快捷键、翻译各模块的错误类型统一在此定义，使用 thiserror 自动派生 Error trait

use std::path::PathBuf;
use thiserror::Error;

/// 统一错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 设置相关错误
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// 快捷键相关错误
    #[error(transparent)]
    Hotkey(#[from] HotkeyError),

    /// 翻译相关错误
    #[error(transparent)]
    Translation(#[from] TranslationError),

    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

/// 错误代码（用于界面显示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // 设置错误 1xxx
    SettingsOpenFailed,
    SettingsWriteFailed,
    SettingsSerializeFailed,
    SettingsParseFailed,

    // 快捷键错误 2xxx
    HotkeyUnknownAction,
    HotkeyBadCombination,
    HotkeyBadArguments,
    HotkeyConflict,

    // 翻译错误 3xxx
    TranslationReadFailed,
    TranslationParseFailed,

    Internal,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::SettingsOpenFailed => write!(f, "SETTINGS_OPEN_FAILED"),
            ErrorCode::SettingsWriteFailed => write!(f, "SETTINGS_WRITE_FAILED"),
            ErrorCode::SettingsSerializeFailed => write!(f, "SETTINGS_SERIALIZE_FAILED"),
            ErrorCode::SettingsParseFailed => write!(f, "SETTINGS_PARSE_FAILED"),
            ErrorCode::HotkeyUnknownAction => write!(f, "HOTKEY_UNKNOWN_ACTION"),
            ErrorCode::HotkeyBadCombination => write!(f, "HOTKEY_BAD_COMBINATION"),
            ErrorCode::HotkeyBadArguments => write!(f, "HOTKEY_BAD_ARGUMENTS"),
            ErrorCode::HotkeyConflict => write!(f, "HOTKEY_CONFLICT"),
            ErrorCode::TranslationReadFailed => write!(f, "TRANSLATION_READ_FAILED"),
            ErrorCode::TranslationParseFailed => write!(f, "TRANSLATION_PARSE_FAILED"),
            ErrorCode::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// 设置文件错误
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not open settings file {path} for writing: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    #[error("Failed to parse settings: {0}")]
    Parse(String),

    #[error("Missing required root element <{0}>")]
    MissingRoot(&'static str),
}

impl SettingsError {
    /// 保存失败时返回给调用方的状态码
    ///
    /// 打开文件失败为 `100 + 系统错误码`，其余为固定值
    pub fn status(&self) -> i32 {
        match self {
            SettingsError::Open { source, .. } => 100 + source.raw_os_error().unwrap_or(0),
            SettingsError::Write { .. } => 2,
            SettingsError::Serialize(_) => 1,
            SettingsError::Parse(_) | SettingsError::MissingRoot(_) => 3,
        }
    }
}

/// 快捷键错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyError {
    #[error("Hotkey action '{0}' not recognized")]
    UnknownAction(String),

    #[error("No action provided for hotkey")]
    MissingAction,

    #[error("No key combination provided for hotkey")]
    MissingCombination,

    #[error("Invalid key combination: {0}")]
    InvalidCombination(String),

    #[error("{action} expects {min}..={max} arguments, found {found}")]
    ArgumentCount {
        action: &'static str,
        min: usize,
        max: usize,
        found: usize,
    },

    #[error("{action} argument {index} is invalid: '{value}' ({reason})")]
    InvalidArgument {
        action: &'static str,
        index: usize,
        value: String,
        reason: &'static str,
    },

    #[error("Shortcut already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Shortcut not found: {0}")]
    NotFound(String),
}

/// 翻译文件错误
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Failed to read language file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse language file: {0}")]
    Parse(String),

    #[error("No language file bound to translator")]
    NoFile,
}

impl AppError {
    /// 获取对应的错误代码
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Settings(e) => match e {
                SettingsError::Open { .. } => ErrorCode::SettingsOpenFailed,
                SettingsError::Write { .. } => ErrorCode::SettingsWriteFailed,
                SettingsError::Serialize(_) => ErrorCode::SettingsSerializeFailed,
                SettingsError::Parse(_) | SettingsError::MissingRoot(_) => {
                    ErrorCode::SettingsParseFailed
                }
            },
            AppError::Hotkey(e) => match e {
                HotkeyError::UnknownAction(_) | HotkeyError::MissingAction => {
                    ErrorCode::HotkeyUnknownAction
                }
                HotkeyError::MissingCombination | HotkeyError::InvalidCombination(_) => {
                    ErrorCode::HotkeyBadCombination
                }
                HotkeyError::ArgumentCount { .. } | HotkeyError::InvalidArgument { .. } => {
                    ErrorCode::HotkeyBadArguments
                }
                HotkeyError::AlreadyRegistered(_) | HotkeyError::NotFound(_) => {
                    ErrorCode::HotkeyConflict
                }
            },
            AppError::Translation(e) => match e {
                TranslationError::Read { .. } | TranslationError::NoFile => {
                    ErrorCode::TranslationReadFailed
                }
                TranslationError::Parse(_) => ErrorCode::TranslationParseFailed,
            },
            AppError::Internal(_) => ErrorCode::Internal,
        }
    }
}
