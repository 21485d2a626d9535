//! OSD 应用入口
//!
//! 组装设置、运行时状态与快捷键管理器

mod modules;
mod state;

use std::sync::Arc;

use anyhow::Result;
use app_core::{LogReporter, Settings, SettingsPaths};
use tracing_subscriber::EnvFilter;

pub use app_core::{AppError as OsdError, ErrorCode};
pub use modules::shortcut::{HotkeyCommand, HotkeyManager, MediaKey, VolumeUnit};
pub use modules::updater::{UpdateError, Updater, Version, VersionSource};
pub use state::AppState;

/// 初始化应用（日志级别由 RUST_LOG 控制，默认 info）
pub fn init_app() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

/// 运行应用
pub fn run() -> Result<()> {
    init_app()?;

    let paths = SettingsPaths::detect();
    let mut settings = Settings::new(paths, Arc::new(LogReporter));
    settings.load();
    tracing::info!(
        "Settings file: {} (portable: {})",
        settings.file().display(),
        settings.paths().is_portable()
    );

    let language = settings.language_name();
    let strings = settings.translator().len();
    tracing::info!("Language: {} ({} translated strings)", language, strings);

    let state = AppState::new(settings.into_shared());
    state.reload_hotkeys();
    state.hotkeys.start();

    // release 构建没有控制台，快照同时写入日志
    let snapshot = snapshot_json(&state)?;
    tracing::info!("Settings snapshot: {}", snapshot);
    println!("{}", snapshot);

    state.hotkeys.stop();
    Ok(())
}

/// 当前设置的 JSON 快照
pub fn snapshot_json(state: &AppState) -> Result<String> {
    let snapshot = state.with_settings(Settings::snapshot);
    Ok(serde_json::to_string_pretty(&snapshot)?)
}
