use tauri::State;
use crate::types::Settings;
use super::BrowserState;

#[tauri::command]
pub fn get_settings(state: State<'_, BrowserState>) -> Result<Settings, String> {
    state.0.settings().read().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn save_settings(state: State<'_, BrowserState>, settings: Settings) -> Result<(), String> {
    state.0.settings().write(&settings).map_err(|e| e.to_string())
}
