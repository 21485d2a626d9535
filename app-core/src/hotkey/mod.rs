//! 快捷键模型
//!
//! 按键组合编码、动作名称表以及按动作区分的参数校验规则

pub mod action;
pub mod combination;
pub mod entry;

pub use action::{ActionKind, ArgKind, ArgRules};
pub use combination::KeyCombination;
pub use entry::HotkeyEntry;
