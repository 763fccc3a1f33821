mod bridge;
pub mod roots;

pub use self::bridge::MaterialHost;
pub use self::roots::{custom_root, material_roots, stock_root, year_version, MaterialRoots};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use crate::error::BrowserError;

/// ホストが動作しているプラットフォーム
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    MacOs,
    Windows,
}

impl HostPlatform {
    /// ホスト API が返す識別子
    pub fn identifier(self) -> &'static str {
        match self {
            HostPlatform::MacOs => "platform_osx",
            HostPlatform::Windows => "platform_win",
        }
    }

    /// ビルド対象の OS から推定（未対応 OS では None）
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "macos") {
            Some(HostPlatform::MacOs)
        } else if cfg!(target_os = "windows") {
            Some(HostPlatform::Windows)
        } else {
            None
        }
    }
}

impl FromStr for HostPlatform {
    type Err = BrowserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "platform_osx" | "macos" => Ok(HostPlatform::MacOs),
            "platform_win" | "windows" => Ok(HostPlatform::Windows),
            other => Err(BrowserError::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// ホストから受け取る情報と、ルート計算に使う基準ディレクトリ。
///
/// プラットフォーム識別子はホストが渡した文字列のまま保持し、
/// パス計算のたびに検証する（未対応の値は設定エラー）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    pub platform: String,
    pub major_version: u32,
    /// macOS のアプリケーションフォルダ
    pub applications_dir: PathBuf,
    pub home_dir: Option<PathBuf>,
    /// Windows の %PROGRAMDATA%
    pub program_data_dir: Option<PathBuf>,
    /// Windows の %APPDATA%（ローミング）
    pub app_data_dir: Option<PathBuf>,
}

impl HostEnvironment {
    pub fn new(platform: impl Into<String>, major_version: u32) -> Self {
        Self {
            platform: platform.into(),
            major_version,
            applications_dir: PathBuf::from("/Applications"),
            home_dir: dirs::home_dir(),
            program_data_dir: std::env::var_os("PROGRAMDATA").map(PathBuf::from),
            app_data_dir: std::env::var_os("APPDATA")
                .map(PathBuf::from)
                .or_else(dirs::data_dir),
        }
    }

    /// 実行中の OS からプラットフォームを決める（ホストが識別子を渡さない場合）
    pub fn detect(major_version: u32) -> Result<Self, BrowserError> {
        let platform = HostPlatform::current()
            .ok_or_else(|| BrowserError::UnsupportedPlatform(std::env::consts::OS.to_string()))?;
        Ok(Self::new(platform.identifier(), major_version))
    }

    pub fn platform(&self) -> Result<HostPlatform, BrowserError> {
        self.platform.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_identifiers() {
        assert_eq!("platform_osx".parse::<HostPlatform>().unwrap(), HostPlatform::MacOs);
        assert_eq!("platform_win".parse::<HostPlatform>().unwrap(), HostPlatform::Windows);
        assert_eq!(HostPlatform::Windows.to_string(), "platform_win");
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "platform_linux".parse::<HostPlatform>().unwrap_err();
        assert!(matches!(err, BrowserError::UnsupportedPlatform(ref id) if id == "platform_linux"));
    }

    #[test]
    fn detect_follows_build_target() {
        let detected = HostEnvironment::detect(24);
        match HostPlatform::current() {
            Some(platform) => {
                let env = detected.unwrap();
                assert_eq!(env.platform().unwrap(), platform);
                assert_eq!(env.major_version, 24);
            }
            None => assert!(matches!(detected, Err(BrowserError::UnsupportedPlatform(_)))),
        }
    }

    #[test]
    fn environment_keeps_raw_identifier() {
        let env = HostEnvironment::new("beos", 21);
        assert_eq!(env.platform, "beos");
        assert!(env.platform().is_err());
    }
}
