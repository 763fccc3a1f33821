use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ユーザー設定（settings.json）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub zoom_value: i64,
    pub display_name: bool,
    pub display_source: bool,
    pub display_only_model: bool,
    pub custom_skm_path: String,
    pub type_filter_value: String,
    /// 未知のキーは書き戻し時に失わないよう保持
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
