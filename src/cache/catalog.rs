use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use chrono::Utc;
use crate::types::{CatalogSnapshot, MaterialRecord};

// セッション中のカタログ。読み手にはスナップショットごと渡す。
#[derive(Debug, Default)]
pub struct SessionCatalog {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl SessionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn records(&self) -> Vec<MaterialRecord> {
        self.snapshot().records.clone()
    }

    pub fn find(&self, source_path: &Path) -> Option<MaterialRecord> {
        self.snapshot().find(source_path).cloned()
    }

    /// スキャン結果で丸ごと置き換える
    pub fn replace(&self, records: Vec<MaterialRecord>) -> Arc<CatalogSnapshot> {
        let snapshot = Arc::new(CatalogSnapshot {
            records,
            indexed_at: Some(Utc::now()),
        });
        self.publish(Arc::clone(&snapshot));
        snapshot
    }

    pub fn clear(&self) {
        self.publish(Arc::new(CatalogSnapshot::default()));
    }

    fn publish(&self, snapshot: Arc<CatalogSnapshot>) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = snapshot;
    }
}
