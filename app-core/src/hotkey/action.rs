//! 快捷键动作及其参数规则

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::Serialize;

/// 快捷键动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActionKind {
    VolumeUp,
    VolumeDown,
    SetVolume,
    Mute,
    VolumeSlider,
    EjectDrive,
    EjectLastDisk,
    MediaKey,
    VirtualKey,
    Run,
    Settings,
    Exit,
}

/// 单个参数的取值规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// 闭区间整数
    Integer { min: i64, max: i64 },
    /// 音量单位：`units` 或 `percent`
    VolumeUnit,
    /// 单个盘符 A-Z
    DriveLetter,
    /// 媒体键名称
    MediaKey,
    /// 十六进制虚拟键码
    HexVirtualKey,
    /// 非空字符串
    NonEmpty,
    /// 任意字符串
    Any,
}

/// 动作的参数规则：`kinds[i]` 约束第 i 个参数，前 `required` 个必填
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgRules {
    pub required: usize,
    pub kinds: &'static [ArgKind],
}

impl ArgRules {
    const NONE: ArgRules = ArgRules { required: 0, kinds: &[] };

    pub fn max(&self) -> usize {
        self.kinds.len()
    }
}

pub const MEDIA_KEYS: [&str; 4] = ["Next", "Previous", "PlayPause", "Stop"];

pub const VOLUME_UNITS: [&str; 2] = ["units", "percent"];

lazy_static! {
    /// 小写名称 -> 动作
    static ref ACTION_LOOKUP: HashMap<String, ActionKind> = ActionKind::ALL
        .iter()
        .map(|action| (action.name().to_ascii_lowercase(), *action))
        .collect();
}

impl ActionKind {
    pub const ALL: [ActionKind; 12] = [
        ActionKind::VolumeUp,
        ActionKind::VolumeDown,
        ActionKind::SetVolume,
        ActionKind::Mute,
        ActionKind::VolumeSlider,
        ActionKind::EjectDrive,
        ActionKind::EjectLastDisk,
        ActionKind::MediaKey,
        ActionKind::VirtualKey,
        ActionKind::Run,
        ActionKind::Settings,
        ActionKind::Exit,
    ];

    /// 写入设置文件的规范名称
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::VolumeUp => "VolumeUp",
            ActionKind::VolumeDown => "VolumeDown",
            ActionKind::SetVolume => "SetVolume",
            ActionKind::Mute => "Mute",
            ActionKind::VolumeSlider => "VolumeSlider",
            ActionKind::EjectDrive => "EjectDrive",
            ActionKind::EjectLastDisk => "EjectLastDisk",
            ActionKind::MediaKey => "MediaKey",
            ActionKind::VirtualKey => "VirtualKey",
            ActionKind::Run => "Run",
            ActionKind::Settings => "Settings",
            ActionKind::Exit => "Exit",
        }
    }

    /// 不区分大小写地按名称查找
    pub fn from_name(name: &str) -> Option<Self> {
        ACTION_LOOKUP.get(&name.trim().to_ascii_lowercase()).copied()
    }

    pub fn arg_rules(self) -> ArgRules {
        use ArgKind::*;

        match self {
            ActionKind::VolumeUp | ActionKind::VolumeDown => ArgRules {
                required: 1,
                kinds: &[Integer { min: 1, max: 100 }, VolumeUnit],
            },
            ActionKind::SetVolume => ArgRules {
                required: 1,
                kinds: &[Integer { min: 0, max: 100 }],
            },
            ActionKind::EjectDrive => ArgRules { required: 1, kinds: &[DriveLetter] },
            ActionKind::MediaKey => ArgRules { required: 1, kinds: &[MediaKey] },
            ActionKind::VirtualKey => ArgRules { required: 1, kinds: &[HexVirtualKey] },
            ActionKind::Run => ArgRules { required: 1, kinds: &[NonEmpty, Any] },
            ActionKind::Mute
            | ActionKind::VolumeSlider
            | ActionKind::EjectLastDisk
            | ActionKind::Settings
            | ActionKind::Exit => ArgRules::NONE,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ArgKind {
    /// 检查参数，失败时返回原因
    pub fn check(self, value: &str) -> Result<(), &'static str> {
        let value = value.trim();
        match self {
            ArgKind::Integer { min, max } => match value.parse::<i64>() {
                Ok(n) if (min..=max).contains(&n) => Ok(()),
                Ok(_) => Err("out of range"),
                Err(_) => Err("not a number"),
            },
            ArgKind::VolumeUnit => VOLUME_UNITS
                .iter()
                .any(|u| u.eq_ignore_ascii_case(value))
                .then_some(())
                .ok_or("expected 'units' or 'percent'"),
            ArgKind::DriveLetter => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => Ok(()),
                    _ => Err("expected a drive letter"),
                }
            }
            ArgKind::MediaKey => MEDIA_KEYS
                .iter()
                .any(|k| k.eq_ignore_ascii_case(value))
                .then_some(())
                .ok_or("unknown media key"),
            ArgKind::HexVirtualKey => match parse_hex_vk(value) {
                Some(_) => Ok(()),
                None => Err("expected a hex virtual key code"),
            },
            ArgKind::NonEmpty => {
                if value.is_empty() {
                    Err("must not be empty")
                } else {
                    Ok(())
                }
            }
            ArgKind::Any => Ok(()),
        }
    }
}

/// 解析 `0x41` 或 `41` 形式的虚拟键码，范围 0x01..=0xFE
pub fn parse_hex_vk(value: &str) -> Option<u8> {
    let value = value.trim();
    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u8::from_str_radix(hex, 16)
        .ok()
        .filter(|vk| (0x01..=0xFE).contains(vk))
}
