//! 按键组合编码
//!
//! 低 8 位为虚拟键码，随后为鼠标按键位，高 16 位为修饰键位。

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::HotkeyError;

pub const MOD_ALT: u32 = 0x1_0000;
pub const MOD_CTRL: u32 = 0x2_0000;
pub const MOD_SHIFT: u32 = 0x4_0000;
pub const MOD_WIN: u32 = 0x8_0000;

pub const MOUSE_LEFT: u32 = 0x100;
pub const MOUSE_MIDDLE: u32 = 0x200;
pub const MOUSE_RIGHT: u32 = 0x400;
pub const MOUSE_X1: u32 = 0x800;
pub const MOUSE_X2: u32 = 0x1000;
pub const WHEEL_UP: u32 = 0x2000;
pub const WHEEL_DOWN: u32 = 0x4000;

const VK_MASK: u32 = 0xFF;

/// 显示顺序：修饰键在前，鼠标键在后
const MODIFIER_NAMES: [(u32, &str); 4] = [
    (MOD_CTRL, "Ctrl"),
    (MOD_ALT, "Alt"),
    (MOD_SHIFT, "Shift"),
    (MOD_WIN, "Win"),
];

const MOUSE_NAMES: [(u32, &str); 7] = [
    (MOUSE_LEFT, "Mouse1"),
    (MOUSE_RIGHT, "Mouse2"),
    (MOUSE_MIDDLE, "Mouse3"),
    (MOUSE_X1, "Mouse4"),
    (MOUSE_X2, "Mouse5"),
    (WHEEL_UP, "WheelUp"),
    (WHEEL_DOWN, "WheelDown"),
];

/// 按键组合
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct KeyCombination(u32);

impl KeyCombination {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    /// 虚拟键码（0 表示没有键盘按键）
    pub fn vk(self) -> u8 {
        (self.0 & VK_MASK) as u8
    }

    pub fn has(self, flag: u32) -> bool {
        self.0 & flag == flag
    }

    /// 从设置文件中的属性值解析，负数、非数字或超出范围都视为无效
    pub fn from_attribute(value: &str) -> Result<Self, HotkeyError> {
        let parsed: i64 = value
            .trim()
            .parse()
            .map_err(|_| HotkeyError::InvalidCombination(value.to_string()))?;
        u32::try_from(parsed)
            .map(Self)
            .map_err(|_| HotkeyError::InvalidCombination(value.to_string()))
    }
}

impl From<u32> for KeyCombination {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = MODIFIER_NAMES
            .iter()
            .chain(MOUSE_NAMES.iter())
            .filter(|(flag, _)| self.has(*flag))
            .map(|(_, name)| name.to_string())
            .collect();
        if self.vk() != 0 {
            parts.push(vk_name(self.vk()));
        }
        if parts.is_empty() {
            return write!(f, "None");
        }
        write!(f, "{}", parts.join("+"))
    }
}

impl FromStr for KeyCombination {
    type Err = HotkeyError;

    /// 解析 `Ctrl+Shift+A` 形式的字符串
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HotkeyError::InvalidCombination(s.to_string());
        let mut raw = 0u32;
        let mut has_key = false;

        for part in s.split('+').map(str::trim) {
            if part.is_empty() {
                return Err(invalid());
            }
            let lower = part.to_ascii_lowercase();
            let flag = match lower.as_str() {
                "ctrl" | "control" => Some(MOD_CTRL),
                "alt" | "option" => Some(MOD_ALT),
                "shift" => Some(MOD_SHIFT),
                "win" | "super" | "cmd" => Some(MOD_WIN),
                _ => MOUSE_NAMES
                    .iter()
                    .find(|(_, name)| name.eq_ignore_ascii_case(part))
                    .map(|(flag, _)| *flag),
            };

            match flag {
                Some(flag) => raw |= flag,
                None if !has_key => {
                    raw |= u32::from(parse_vk(part).ok_or_else(invalid)?);
                    has_key = true;
                }
                None => return Err(invalid()),
            }
        }

        if raw & !(MOD_ALT | MOD_CTRL | MOD_SHIFT | MOD_WIN) == 0 {
            // 只有修饰键
            return Err(invalid());
        }
        Ok(Self(raw))
    }
}

fn vk_name(vk: u8) -> String {
    match vk {
        0x30..=0x39 | 0x41..=0x5A => char::from(vk).to_string(),
        0x70..=0x87 => format!("F{}", vk - 0x6F),
        0x20 => "Space".to_string(),
        0x0D => "Enter".to_string(),
        0x1B => "Esc".to_string(),
        0x09 => "Tab".to_string(),
        _ => format!("0x{:02X}", vk),
    }
}

fn parse_vk(name: &str) -> Option<u8> {
    let upper = name.to_ascii_uppercase();
    match upper.as_str() {
        "SPACE" => return Some(0x20),
        "ENTER" => return Some(0x0D),
        "ESC" => return Some(0x1B),
        "TAB" => return Some(0x09),
        _ => {}
    }

    let bytes = upper.as_bytes();
    if bytes.len() == 1 && bytes[0].is_ascii_alphanumeric() {
        return Some(bytes[0]);
    }
    if let Some(hex) = upper.strip_prefix("0X") {
        return u8::from_str_radix(hex, 16).ok().filter(|vk| *vk != 0);
    }
    if let Some(n) = upper.strip_prefix('F') {
        return n
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=24).contains(n))
            .map(|n| 0x6F + n);
    }
    None
}
