mod constants;
mod error;
mod path_utils;
mod settings;
mod state;

pub mod cache;
pub mod host;
pub mod thumbnail;
pub mod types;

#[cfg(feature = "desktop")]
mod commands;

pub use cache::{CacheStore, SessionCatalog};
pub use constants::{ARCHIVE_EXTENSION, CACHE_DIR_NAME, PREVIEW_ENTRY_NAME, PREVIEW_MARKER};
pub use error::{BrowserError, Result};
pub use host::{HostEnvironment, HostPlatform, MaterialHost, MaterialRoots};
pub use path_utils::path_to_uri;
pub use settings::SettingsStore;
pub use state::MaterialBrowser;
pub use thumbnail::scan_materials;
pub use types::{CatalogSnapshot, MaterialRecord, Settings};

#[cfg(feature = "desktop")]
use tauri::{plugin::TauriPlugin, Manager, RunEvent, Runtime};

/// UI 側から使う Tauri プラグイン
#[cfg(feature = "desktop")]
pub fn plugin<R: Runtime>(browser: MaterialBrowser) -> TauriPlugin<R> {
    tauri::plugin::Builder::new("material-browser")
        .invoke_handler(tauri::generate_handler![
            commands::materials::scan_materials,
            commands::materials::get_materials,
            commands::materials::clear_thumbnail_cache,
            commands::settings::get_settings,
            commands::settings::save_settings,
        ])
        .setup(move |app, _api| {
            app.manage(commands::BrowserState::new(browser));
            Ok(())
        })
        .on_event(|app, event| {
            if let RunEvent::Exit = event {
                if let Some(state) = app.try_state::<commands::BrowserState>() {
                    if let Err(e) = state.0.shutdown() {
                        tracing::warn!("キャッシュ削除エラー: {}", e);
                    }
                }
            }
        })
        .build()
}
