// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

pub mod app;
pub mod catalog;
pub mod config;
pub mod export;
pub mod feedback;
pub mod scoring;
pub mod session;
pub mod views;

#[cfg(feature = "desktop")]
mod commands;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppState};

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global `tracing` subscriber. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    if let Err(e) = try_run() {
        tracing::error!(error = %e, "winter narratives stopped");
        std::process::exit(1);
    }
}

#[cfg(feature = "desktop")]
pub fn try_run() -> anyhow::Result<()> {
    use crate::commands::*;

    init_tracing();
    let config = config::AppConfig::load_default()?;
    let state = AppState::initialize(config)?;

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            navigation,
            start_view,
            introspection_view,
            select_answer,
            clear_answer,
            acknowledge_answers,
            story_view,
            download_story,
            analysis_view,
            mode_panel,
            submit_feedback,
            footer
        ])
        .run(tauri::generate_context!())?;
    Ok(())
}
