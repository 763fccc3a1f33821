use std::path::{Path, PathBuf};
use crate::constants::YEAR_PREFIX;
use crate::error::{BrowserError, Result};
use super::{HostEnvironment, HostPlatform};

/// 解決済みの 2 つのマテリアルルート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRoots {
    pub platform: HostPlatform,
    pub stock: PathBuf,
    pub custom: PathBuf,
}

impl MaterialRoots {
    pub fn new(platform: HostPlatform, stock: impl Into<PathBuf>, custom: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            stock: stock.into(),
            custom: custom.into(),
        }
    }
}

// メジャーバージョンの前に "20" を付けるだけの文字列規則。
// 100 以上のバージョンでは "20100" のような不正な年になるが、そのまま再現する。
pub fn year_version(major_version: u32) -> String {
    format!("{}{}", YEAR_PREFIX, major_version)
}

fn product_dir(major_version: u32) -> String {
    format!("SketchUp {}", year_version(major_version))
}

fn require<'a>(dir: &'a Option<PathBuf>, name: &'static str) -> Result<&'a Path> {
    dir.as_deref().ok_or(BrowserError::MissingHostDirectory(name))
}

// ホスト同梱のマテリアル
pub fn stock_root(env: &HostEnvironment) -> Result<PathBuf> {
    let product = product_dir(env.major_version);

    let path = match env.platform()? {
        HostPlatform::MacOs => env
            .applications_dir
            .join(product)
            .join("SketchUp.app")
            .join("Contents")
            .join("Resources")
            .join("Content")
            .join("Materials"),
        HostPlatform::Windows => require(&env.program_data_dir, "PROGRAMDATA")?
            .join("SketchUp")
            .join(product)
            .join("SketchUp")
            .join("Materials"),
    };

    Ok(path)
}

// ユーザーごとのマテリアル
pub fn custom_root(env: &HostEnvironment) -> Result<PathBuf> {
    let product = product_dir(env.major_version);

    let path = match env.platform()? {
        HostPlatform::MacOs => require(&env.home_dir, "HOME")?
            .join("Library")
            .join("Application Support")
            .join(product)
            .join("SketchUp")
            .join("Materials"),
        HostPlatform::Windows => require(&env.app_data_dir, "APPDATA")?
            .join("SketchUp")
            .join(product)
            .join("SketchUp")
            .join("Materials"),
    };

    Ok(path)
}

pub fn material_roots(env: &HostEnvironment) -> Result<MaterialRoots> {
    Ok(MaterialRoots {
        platform: env.platform()?,
        stock: stock_root(env)?,
        custom: custom_root(env)?,
    })
}
