//! 快捷键模块
//!
//! 运行时的快捷键注册表与命令分发

pub mod command;
pub mod manager;

pub use command::{HotkeyCommand, MediaKey, VolumeUnit};
pub use manager::HotkeyManager;
