// プラグインコマンド（permissions/default.toml と一致させる）
#[cfg(feature = "desktop")]
const COMMANDS: &[&str] = &[
    "scan_materials",
    "get_materials",
    "clear_thumbnail_cache",
    "get_settings",
    "save_settings",
];

fn main() {
    // コマンドごとの allow-/deny- 権限を生成
    #[cfg(feature = "desktop")]
    tauri_plugin::Builder::new(COMMANDS).build();
}
