//! Request-startup pipeline.
//!
//! Works out where SciClope is installed, which version is running and
//! whether the site has been configured yet. The resulting [`Site`] is built
//! once at process start and handed to the HTTP layer.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::installer::{FingerprintError, fingerprint};

/// Version of the running software.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overrides the detected installation path.
pub const INSTALL_PATH_ENV: &str = "SCICLOPE_PATH";

/// Overrides the server configuration file location.
pub const CONFIG_ENV: &str = "SCICLOPE_CONFIG";

/// Site settings file written by a finished installation.
pub const SETTINGS_FILE_NAME: &str = "LocalSettings.toml";

/// Detect the installation path: `SCICLOPE_PATH` when set, `fallback`
/// otherwise.
pub fn detect_install_path(fallback: &Path) -> PathBuf {
    install_path_from(env::var_os(INSTALL_PATH_ENV), fallback)
}

fn install_path_from(value: Option<OsString>, fallback: &Path) -> PathBuf {
    match value.filter(|v| !v.is_empty()) {
        Some(path) => PathBuf::from(path),
        None => fallback.to_path_buf(),
    }
}

/// Whether the site settings file can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsStatus {
    /// The settings file exists and is readable.
    Configured,
    /// Something exists at the settings path but cannot be read as a file.
    Unreadable,
    /// There is no settings file.
    Missing,
}

impl SettingsStatus {
    pub fn exists(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

/// A SciClope installation as seen by the running process.
#[derive(Debug, Clone)]
pub struct Site {
    pub install_path: PathBuf,
    pub version: String,
    /// Key for this installation's installer state.
    pub fingerprint: String,
    pub settings_file: PathBuf,
    /// Always mark session cookies `Secure`, even for plain HTTP requests.
    pub secure_cookies: bool,
}

impl Site {
    pub fn new(install_path: PathBuf, version: impl Into<String>) -> Result<Self, FingerprintError> {
        let version = version.into();
        let fingerprint = fingerprint(&install_path, &version)?;
        let settings_file = install_path.join(SETTINGS_FILE_NAME);
        Ok(Self {
            install_path,
            version,
            fingerprint,
            settings_file,
            secure_cookies: false,
        })
    }

    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    /// Check the settings file on disk.
    pub async fn settings_status(&self) -> SettingsStatus {
        let metadata = match tokio::fs::metadata(&self.settings_file).await {
            Ok(metadata) => metadata,
            Err(_) => return SettingsStatus::Missing,
        };
        if !metadata.is_file() {
            debug!(path = %self.settings_file.display(), "settings path is not a file");
            return SettingsStatus::Unreadable;
        }
        match tokio::fs::File::open(&self.settings_file).await {
            Ok(_) => SettingsStatus::Configured,
            Err(e) => {
                debug!(
                    path = %self.settings_file.display(),
                    error = %e,
                    "settings file is not readable"
                );
                SettingsStatus::Unreadable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_path_from_env_value() {
        let fallback = Path::new("/opt/sciclope");
        assert_eq!(
            install_path_from(Some(OsString::from("/srv/site")), fallback),
            PathBuf::from("/srv/site")
        );
        assert_eq!(install_path_from(None, fallback), fallback);
        assert_eq!(install_path_from(Some(OsString::new()), fallback), fallback);
    }

    #[test]
    fn test_site_fingerprint_is_stable() {
        let a = Site::new(PathBuf::from("/srv/site"), "1.0.0").unwrap();
        let b = Site::new(PathBuf::from("/srv/site"), "1.0.0").unwrap();
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_eq!(a.settings_file, PathBuf::from("/srv/site").join(SETTINGS_FILE_NAME));
    }

    #[tokio::test]
    async fn test_settings_status() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path().to_path_buf(), "1.0.0").unwrap();
        assert_eq!(site.settings_status().await, SettingsStatus::Missing);
        assert!(!site.settings_status().await.exists());

        std::fs::write(&site.settings_file, "name = \"test\"\n").unwrap();
        assert_eq!(site.settings_status().await, SettingsStatus::Configured);
    }

    #[tokio::test]
    async fn test_settings_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path().to_path_buf(), "1.0.0").unwrap();
        std::fs::create_dir(&site.settings_file).unwrap();

        let status = site.settings_status().await;
        assert_eq!(status, SettingsStatus::Unreadable);
        assert!(status.exists());
    }
}
