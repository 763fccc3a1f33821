use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::bail;
use material_browser_lib::host::{custom_root, stock_root};
use material_browser_lib::{
    BrowserError, CacheStore, HostEnvironment, MaterialBrowser, MaterialHost, SettingsStore,
    PREVIEW_ENTRY_NAME,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn write_skm(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    writer
        .start_file(PREVIEW_ENTRY_NAME, SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"\x89PNG").unwrap();
    writer.finish().unwrap();
}

fn windows_host(temp: &TempDir) -> HostEnvironment {
    HostEnvironment {
        platform: "platform_win".to_string(),
        major_version: 22,
        applications_dir: temp.path().join("Applications"),
        home_dir: Some(temp.path().join("home")),
        program_data_dir: Some(temp.path().join("ProgramData")),
        app_data_dir: Some(temp.path().join("AppData").join("Roaming")),
    }
}

fn browser(temp: &TempDir, host: HostEnvironment) -> MaterialBrowser {
    MaterialBrowser::new(
        host,
        CacheStore::new(temp.path().join("tmp")),
        SettingsStore::at(temp.path().join("settings.json")),
    )
}

#[derive(Default)]
struct RecordingHost {
    calls: Vec<String>,
    fail_load: bool,
}

impl MaterialHost for RecordingHost {
    type Material = PathBuf;

    fn load_material(&mut self, path: &Path) -> anyhow::Result<PathBuf> {
        if self.fail_load {
            bail!("model is read-only");
        }
        self.calls.push(format!("load {}", path.display()));
        Ok(path.to_path_buf())
    }

    fn make_current(&mut self, material: PathBuf) -> anyhow::Result<()> {
        self.calls.push(format!("current {}", material.display()));
        Ok(())
    }

    fn activate_paint_tool(&mut self) -> anyhow::Result<()> {
        self.calls.push("paint".to_string());
        Ok(())
    }
}

#[test]
fn scan_publishes_sorted_catalog() {
    let temp = TempDir::new().unwrap();
    let host = windows_host(&temp);
    let stock = stock_root(&host).unwrap();
    let custom = custom_root(&host).unwrap();
    write_skm(&stock.join("Wood").join("Oak 10.skm"));
    write_skm(&stock.join("Wood").join("Oak 2.skm"));
    write_skm(&custom.join("Brick.skm"));

    let browser = browser(&temp, host);
    assert!(browser.catalog().indexed_at.is_none());

    let snapshot = browser.scan().unwrap();
    assert!(snapshot.indexed_at.is_some());

    let names: Vec<&str> = snapshot.records.iter().map(|r| r.display_name()).collect();
    // AppData < ProgramData、Oak 2 < Oak 10（自然順）
    assert_eq!(names, vec!["Brick", "Oak 2", "Oak 10"]);
    assert_eq!(browser.records().len(), 3);
}

#[test]
fn unsupported_platform_fails_scan_and_leaves_catalog_empty() {
    let temp = TempDir::new().unwrap();
    let mut host = windows_host(&temp);
    write_skm(&custom_root(&host).unwrap().join("Brick.skm"));

    host.platform = "platform_linux".to_string();
    let browser = browser(&temp, host);

    let err = browser.scan().unwrap_err();
    assert!(matches!(err, BrowserError::UnsupportedPlatform(_)));
    assert!(browser.catalog().is_empty());
}

#[test]
fn rescan_clean_recovers_stale_cache() {
    let temp = TempDir::new().unwrap();
    let host = windows_host(&temp);
    write_skm(&custom_root(&host).unwrap().join("Brick.skm"));
    let browser = browser(&temp, host);

    assert_eq!(browser.scan().unwrap().len(), 1);
    // キャッシュを残したままだと同名のサムネイルは登録されない
    assert_eq!(browser.scan().unwrap().len(), 0);
    assert_eq!(browser.rescan_clean().unwrap().len(), 1);
}

#[test]
fn clear_cache_empties_catalog_and_directory() {
    let temp = TempDir::new().unwrap();
    let host = windows_host(&temp);
    write_skm(&custom_root(&host).unwrap().join("Brick.skm"));
    let browser = browser(&temp, host);
    browser.scan().unwrap();

    browser.clear_cache().unwrap();

    assert!(browser.catalog().is_empty());
    assert!(!browser.cache().cache_path().exists());
    // 2 回目も成功する
    browser.shutdown().unwrap();
}

#[test]
fn select_hands_material_to_host() {
    let temp = TempDir::new().unwrap();
    let host = windows_host(&temp);
    let brick = custom_root(&host).unwrap().join("Brick.skm");
    write_skm(&brick);
    let browser = browser(&temp, host);
    browser.scan().unwrap();

    let mut sketchup = RecordingHost::default();
    let record = browser.select(&mut sketchup, &brick).unwrap();

    assert_eq!(record.display_name(), "Brick");
    assert_eq!(
        sketchup.calls,
        vec![
            format!("load {}", brick.display()),
            format!("current {}", brick.display()),
            "paint".to_string(),
        ]
    );
}

#[test]
fn select_rejects_paths_outside_catalog() {
    let temp = TempDir::new().unwrap();
    let browser = browser(&temp, windows_host(&temp));
    browser.scan().unwrap();

    let mut sketchup = RecordingHost::default();
    let err = browser
        .select(&mut sketchup, Path::new("/elsewhere/Brick.skm"))
        .unwrap_err();

    assert!(matches!(err, BrowserError::UnknownMaterial(_)));
    assert!(sketchup.calls.is_empty());
}

#[test]
fn host_failure_is_propagated() {
    let temp = TempDir::new().unwrap();
    let host = windows_host(&temp);
    let brick = custom_root(&host).unwrap().join("Brick.skm");
    write_skm(&brick);
    let browser = browser(&temp, host);
    browser.scan().unwrap();

    let mut sketchup = RecordingHost {
        fail_load: true,
        ..RecordingHost::default()
    };
    let err = browser.select(&mut sketchup, &brick).unwrap_err();
    assert!(matches!(err, BrowserError::Host(_)));
}

#[test]
fn settings_round_trip_through_browser() {
    let temp = TempDir::new().unwrap();
    let browser = browser(&temp, windows_host(&temp));

    let mut settings = material_browser_lib::Settings::default();
    settings.zoom_value = 5;
    settings.display_only_model = true;
    browser.settings().write(&settings).unwrap();

    assert_eq!(browser.settings().read().unwrap(), settings);
}
