//! 以名称保存的枚举设置

use serde::Serialize;

/// 枚举与名称的双向映射，名称匹配不区分大小写
pub trait NamedEnum: Copy + 'static {
    /// 按名称表顺序排列的全部取值
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }
}

/// OSD 在屏幕上的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OsdPosition {
    Top,
    Left,
    Right,
    Bottom,
    Center,
    #[serde(rename = "Top-left")]
    TopLeft,
    #[serde(rename = "Top-right")]
    TopRight,
    #[serde(rename = "Bottom-left")]
    BottomLeft,
    #[serde(rename = "Bottom-right")]
    BottomRight,
    Custom,
}

impl NamedEnum for OsdPosition {
    const ALL: &'static [Self] = &[
        OsdPosition::Top,
        OsdPosition::Left,
        OsdPosition::Right,
        OsdPosition::Bottom,
        OsdPosition::Center,
        OsdPosition::TopLeft,
        OsdPosition::TopRight,
        OsdPosition::BottomLeft,
        OsdPosition::BottomRight,
        OsdPosition::Custom,
    ];

    fn name(self) -> &'static str {
        match self {
            OsdPosition::Top => "Top",
            OsdPosition::Left => "Left",
            OsdPosition::Right => "Right",
            OsdPosition::Bottom => "Bottom",
            OsdPosition::Center => "Center",
            OsdPosition::TopLeft => "Top-left",
            OsdPosition::TopRight => "Top-right",
            OsdPosition::BottomLeft => "Bottom-left",
            OsdPosition::BottomRight => "Bottom-right",
            OsdPosition::Custom => "Custom",
        }
    }
}

/// OSD 隐藏动画
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HideAnimation {
    None,
    Fade,
}

impl NamedEnum for HideAnimation {
    const ALL: &'static [Self] = &[HideAnimation::None, HideAnimation::Fade];

    fn name(self) -> &'static str {
        match self {
            HideAnimation::None => "None",
            HideAnimation::Fade => "Fade",
        }
    }
}
