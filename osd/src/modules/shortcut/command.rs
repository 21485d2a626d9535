//! 快捷键触发的命令
//!
//! 由校验通过的绑定构造，参数已经解析成具体类型

use std::fmt;

use app_core::hotkey::action::parse_hex_vk;
use app_core::{ActionKind, HotkeyEntry, HotkeyError};

/// 音量调整单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeUnit {
    /// 按音量刻度调整
    #[default]
    Units,
    /// 按百分比调整
    Percent,
}

/// 媒体键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKey {
    Next,
    Previous,
    PlayPause,
    Stop,
}

impl MediaKey {
    /// Windows 虚拟键码
    pub fn vk(self) -> u8 {
        match self {
            MediaKey::Next => 0xB0,
            MediaKey::Previous => 0xB1,
            MediaKey::Stop => 0xB2,
            MediaKey::PlayPause => 0xB3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotkeyCommand {
    IncreaseVolume { amount: u8, unit: VolumeUnit },
    DecreaseVolume { amount: u8, unit: VolumeUnit },
    SetVolume(u8),
    Mute,
    ShowVolumeSlider,
    EjectLastDisk,
    EjectDrive(char),
    MediaKey(MediaKey),
    VirtualKey(u8),
    Run { path: String, args: Option<String> },
    OpenSettings,
    Exit,
}

impl TryFrom<&HotkeyEntry> for HotkeyCommand {
    type Error = HotkeyError;

    fn try_from(entry: &HotkeyEntry) -> Result<Self, Self::Error> {
        entry.validate()?;

        let command = match entry.action {
            ActionKind::VolumeUp => {
                let (amount, unit) = volume_step(entry)?;
                HotkeyCommand::IncreaseVolume { amount, unit }
            }
            ActionKind::VolumeDown => {
                let (amount, unit) = volume_step(entry)?;
                HotkeyCommand::DecreaseVolume { amount, unit }
            }
            ActionKind::SetVolume => HotkeyCommand::SetVolume(parse_arg(entry, 0, |v| v.parse().ok())?),
            ActionKind::Mute => HotkeyCommand::Mute,
            ActionKind::VolumeSlider => HotkeyCommand::ShowVolumeSlider,
            ActionKind::EjectLastDisk => HotkeyCommand::EjectLastDisk,
            ActionKind::EjectDrive => HotkeyCommand::EjectDrive(parse_arg(entry, 0, |v| {
                v.chars().next().map(|c| c.to_ascii_uppercase())
            })?),
            ActionKind::MediaKey => HotkeyCommand::MediaKey(parse_arg(entry, 0, media_key)?),
            ActionKind::VirtualKey => HotkeyCommand::VirtualKey(parse_arg(entry, 0, parse_hex_vk)?),
            ActionKind::Run => HotkeyCommand::Run {
                path: entry.arg(0).unwrap_or_default().trim().to_string(),
                args: entry.arg(1).filter(|a| !a.is_empty()).map(str::to_string),
            },
            ActionKind::Settings => HotkeyCommand::OpenSettings,
            ActionKind::Exit => HotkeyCommand::Exit,
        };
        Ok(command)
    }
}

impl fmt::Display for HotkeyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotkeyCommand::IncreaseVolume { amount, unit } => {
                write!(f, "Increase volume by {} {}", amount, unit_name(*unit))
            }
            HotkeyCommand::DecreaseVolume { amount, unit } => {
                write!(f, "Decrease volume by {} {}", amount, unit_name(*unit))
            }
            HotkeyCommand::SetVolume(level) => write!(f, "Set volume to {}%", level),
            HotkeyCommand::Mute => write!(f, "Mute"),
            HotkeyCommand::ShowVolumeSlider => write!(f, "Show volume slider"),
            HotkeyCommand::EjectLastDisk => write!(f, "Eject last disk"),
            HotkeyCommand::EjectDrive(drive) => write!(f, "Eject drive {}:", drive),
            HotkeyCommand::MediaKey(key) => write!(f, "Media key {:?}", key),
            HotkeyCommand::VirtualKey(vk) => write!(f, "Virtual key 0x{:02X}", vk),
            HotkeyCommand::Run { path, args: Some(args) } => write!(f, "Run {} {}", path, args),
            HotkeyCommand::Run { path, args: None } => write!(f, "Run {}", path),
            HotkeyCommand::OpenSettings => write!(f, "Open settings"),
            HotkeyCommand::Exit => write!(f, "Exit"),
        }
    }
}

fn unit_name(unit: VolumeUnit) -> &'static str {
    match unit {
        VolumeUnit::Units => "units",
        VolumeUnit::Percent => "percent",
    }
}

fn volume_step(entry: &HotkeyEntry) -> Result<(u8, VolumeUnit), HotkeyError> {
    let amount = parse_arg(entry, 0, |v| v.parse().ok())?;
    let unit = match entry.arg(1) {
        Some(unit) if unit.trim().eq_ignore_ascii_case("percent") => VolumeUnit::Percent,
        _ => VolumeUnit::Units,
    };
    Ok((amount, unit))
}

fn media_key(value: &str) -> Option<MediaKey> {
    [
        ("Next", MediaKey::Next),
        ("Previous", MediaKey::Previous),
        ("PlayPause", MediaKey::PlayPause),
        ("Stop", MediaKey::Stop),
    ]
    .into_iter()
    .find(|(name, _)| name.eq_ignore_ascii_case(value))
    .map(|(_, key)| key)
}

fn parse_arg<T>(
    entry: &HotkeyEntry,
    index: usize,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, HotkeyError> {
    let value = entry.arg(index).unwrap_or_default();
    parse(value.trim()).ok_or_else(|| HotkeyError::InvalidArgument {
        action: entry.action.name(),
        index,
        value: value.to_string(),
        reason: "cannot be converted",
    })
}
