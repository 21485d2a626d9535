//! 设置项定义：元素名称、类型与默认值

use std::marker::PhantomData;

use crate::document::Document;

use super::enums::{HideAnimation, NamedEnum, OsdPosition};

/// 一个设置项
pub struct Key<T: SettingValue> {
    pub name: &'static str,
    pub default: T::Default,
    _marker: PhantomData<T>,
}

impl<T: SettingValue> Key<T> {
    pub const fn new(name: &'static str, default: T::Default) -> Self {
        Self {
            name,
            default,
            _marker: PhantomData,
        }
    }
}

/// 能读写到文档元素的值类型
pub trait SettingValue: Sized {
    /// 默认值需要能放进 `const` 中
    type Default: Copy;

    fn read(doc: &Document, key: &Key<Self>) -> Self;
    fn write(doc: &mut Document, key: &Key<Self>, value: Self);
}

impl SettingValue for bool {
    type Default = bool;

    fn read(doc: &Document, key: &Key<Self>) -> Self {
        doc.get_bool(key.name, key.default)
    }

    fn write(doc: &mut Document, key: &Key<Self>, value: Self) {
        doc.set_bool(key.name, value);
    }
}

impl SettingValue for i32 {
    type Default = i32;

    fn read(doc: &Document, key: &Key<Self>) -> Self {
        doc.get_int(key.name, key.default)
    }

    fn write(doc: &mut Document, key: &Key<Self>, value: Self) {
        doc.set_int(key.name, value);
    }
}

/// 文本项：缺失、为空或只含空白时返回默认值
impl SettingValue for String {
    type Default = &'static str;

    fn read(doc: &Document, key: &Key<Self>) -> Self {
        let text = doc.get_text(key.name);
        if text.trim().is_empty() {
            key.default.to_string()
        } else {
            text
        }
    }

    fn write(doc: &mut Document, key: &Key<Self>, value: Self) {
        doc.set_text(key.name, value);
    }
}

macro_rules! named_enum_value {
    ($ty:ty) => {
        impl SettingValue for $ty {
            type Default = $ty;

            fn read(doc: &Document, key: &Key<Self>) -> Self {
                <$ty>::from_name(&doc.get_text(key.name)).unwrap_or(key.default)
            }

            fn write(doc: &mut Document, key: &Key<Self>, value: Self) {
                doc.set_text(key.name, value.name());
            }
        }
    };
}

named_enum_value!(OsdPosition);
named_enum_value!(HideAnimation);

pub const AUDIO_DEVICE: Key<String> = Key::new("audioDeviceID", "");
pub const LANGUAGE: Key<String> = Key::new("language", "English");
pub const ON_TOP: Key<bool> = Key::new("onTop", false);
pub const HIDE_FULLSCREEN: Key<bool> = Key::new("hideFullscreen", false);
pub const MONITOR: Key<String> = Key::new("monitor", "");
pub const OSD_EDGE_OFFSET: Key<i32> = Key::new("osdEdgeOffset", 140);
pub const OSD_POSITION: Key<OsdPosition> = Key::new("osdPosition", OsdPosition::Bottom);
pub const OSD_X: Key<i32> = Key::new("osdX", 0);
pub const OSD_Y: Key<i32> = Key::new("osdY", 0);
pub const HIDE_ANIMATION: Key<HideAnimation> = Key::new("hideAnimation", HideAnimation::Fade);
pub const HIDE_DELAY: Key<i32> = Key::new("hideDelay", 800);
pub const HIDE_SPEED: Key<i32> = Key::new("hideSpeed", 765);
pub const NOTIFY_ICON: Key<bool> = Key::new("notifyIcon", true);
pub const SOUND_EFFECTS: Key<bool> = Key::new("soundEffects", true);
pub const SKIN: Key<String> = Key::new("skin", "Classic");

/// 快捷键容器元素
pub const HOTKEYS: &str = "hotkeys";
pub const HOTKEY: &str = "hotkey";
pub const HOTKEY_ACTION: &str = "action";
pub const HOTKEY_COMBINATION: &str = "combination";
pub const HOTKEY_ARG: &str = "arg";
