//! OSD 应用模块
//!
//! 快捷键管理与版本更新

pub mod shortcut;
pub mod updater;
