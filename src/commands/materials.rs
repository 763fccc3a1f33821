use std::sync::Arc;
use tauri::State;
use crate::types::CatalogSnapshot;
use super::BrowserState;

// SKM を走査してカタログを作り直す
#[tauri::command]
pub async fn scan_materials(state: State<'_, BrowserState>) -> Result<CatalogSnapshot, String> {
    let browser = Arc::clone(&state.0);

    tokio::task::spawn_blocking(move || {
        browser
            .scan()
            .map(|snapshot| (*snapshot).clone())
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| e.to_string())?
}

#[tauri::command]
pub fn get_materials(state: State<'_, BrowserState>) -> CatalogSnapshot {
    (*state.0.catalog()).clone()
}

#[tauri::command]
pub fn clear_thumbnail_cache(state: State<'_, BrowserState>) -> Result<(), String> {
    state.0.clear_cache().map_err(|e| e.to_string())
}
