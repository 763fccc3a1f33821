use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;
use crate::cache::{CacheStore, SessionCatalog};
use crate::error::{BrowserError, Result};
use crate::host::{material_roots, HostEnvironment, MaterialHost};
use crate::settings::SettingsStore;
use crate::thumbnail::scan_materials;
use crate::types::{CatalogSnapshot, MaterialRecord};

/// マテリアルブラウザの状態（カタログ・キャッシュ・設定を保持）。
///
/// スキャンは `scan_lock` で直列化し、カタログはスナップショット単位で公開する。
#[derive(Debug)]
pub struct MaterialBrowser {
    host: HostEnvironment,
    cache: CacheStore,
    catalog: SessionCatalog,
    settings: SettingsStore,
    scan_lock: Mutex<()>,
}

impl MaterialBrowser {
    pub fn new(host: HostEnvironment, cache: CacheStore, settings: SettingsStore) -> Self {
        Self {
            host,
            cache,
            catalog: SessionCatalog::new(),
            settings,
            scan_lock: Mutex::new(()),
        }
    }

    pub fn host(&self) -> &HostEnvironment {
        &self.host
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// 両ルートを走査してカタログを作り直す。
    ///
    /// キャッシュは消さないので、前回のサムネイルと同名になるものは登録されない。
    /// 作り直したい場合は [`MaterialBrowser::rescan_clean`] を使う。
    pub fn scan(&self) -> Result<Arc<CatalogSnapshot>> {
        let _guard = self.scan_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.scan_locked()
    }

    pub fn rescan_clean(&self) -> Result<Arc<CatalogSnapshot>> {
        let _guard = self.scan_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.cache.remove_all()?;
        self.scan_locked()
    }

    fn scan_locked(&self) -> Result<Arc<CatalogSnapshot>> {
        self.catalog.clear();

        let roots = material_roots(&self.host)?;
        let mut records = scan_materials(&roots, &self.cache)?;

        // 走査順はファイルシステム依存なのでパスの自然順にそろえる
        records.sort_by(|a, b| {
            natord::compare(
                &a.source_path().to_string_lossy(),
                &b.source_path().to_string_lossy(),
            )
        });

        Ok(self.catalog.replace(records))
    }

    pub fn catalog(&self) -> Arc<CatalogSnapshot> {
        self.catalog.snapshot()
    }

    pub fn records(&self) -> Vec<MaterialRecord> {
        self.catalog.records()
    }

    /// サムネイルキャッシュを削除し、カタログも空にする
    pub fn clear_cache(&self) -> Result<()> {
        let _guard = self.scan_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.catalog.clear();
        self.cache.remove_all()
    }

    // 終了時の後片付け
    pub fn shutdown(&self) -> Result<()> {
        info!("サムネイルキャッシュを削除して終了");
        self.clear_cache()
    }

    /// カタログ内のマテリアルをホストに読み込ませ、ペイントツールを有効にする
    pub fn select<H: MaterialHost>(&self, host: &mut H, source_path: &Path) -> Result<MaterialRecord> {
        let record = self
            .catalog
            .find(source_path)
            .ok_or_else(|| BrowserError::UnknownMaterial(source_path.to_path_buf()))?;

        let material = host.load_material(record.source_path())?;
        host.make_current(material)?;
        host.activate_paint_tool()?;

        Ok(record)
    }
}
