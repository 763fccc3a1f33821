pub mod materials;
pub mod settings;

use std::sync::Arc;
use crate::state::MaterialBrowser;

// Tauri に管理させる共有状態（ブロッキングプールへ持ち出せるよう Arc で包む）
pub struct BrowserState(pub Arc<MaterialBrowser>);

impl BrowserState {
    pub fn new(browser: MaterialBrowser) -> Self {
        Self(Arc::new(browser))
    }
}
