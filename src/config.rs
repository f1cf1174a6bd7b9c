//! Client configuration.
//!
//! Read once at startup from a YAML file (TOML and JSON work too, the
//! format follows the file extension):
//!
//! ```yaml
//! exchange_url: https://mail.example.com/Microsoft-Server-ActiveSync
//! username: alice
//! password: secret
//! device_id: easync0001
//! calendar_folder_type: "8"
//! ```

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EasError, EasResult};

/// Where the binary looks for its configuration.
pub const DEFAULT_CONFIG_PATH: &str = "example-config.yaml";

#[derive(Clone, Deserialize)]
pub struct Config {
    /// ActiveSync endpoint, e.g. `https://host/Microsoft-Server-ActiveSync`
    pub exchange_url: String,
    pub username: String,
    pub password: String,
    pub device_id: String,
    /// Folder type marker that identifies calendar folders in a FolderSync response
    pub calendar_folder_type: String,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> EasResult<Self> {
        let path = path.as_ref();

        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()
            .map_err(|e| {
                EasError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;

        let config: Config = settings.try_deserialize().map_err(|e| {
            EasError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), url = %config.exchange_url, "loaded config");

        Ok(config)
    }

    /// Get credentials as (username, password) tuple for HTTP basic auth
    pub fn credentials(&self) -> (&str, &str) {
        (&self.username, &self.password)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("exchange_url", &self.exchange_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("device_id", &self.device_id)
            .field("calendar_folder_type", &self.calendar_folder_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "config.yaml",
            "exchange_url: \"https://mail.example.com/Microsoft-Server-ActiveSync\"\n\
             username: \"alice\"\n\
             password: \"s3cret\"\n\
             device_id: \"dev-42\"\n\
             calendar_folder_type: \"8\"\n",
        );

        let config = Config::load(&path).unwrap();

        assert_eq!(
            config.exchange_url,
            "https://mail.example.com/Microsoft-Server-ActiveSync"
        );
        assert_eq!(config.username, "alice");
        assert_eq!(config.password, "s3cret");
        assert_eq!(config.device_id, "dev-42");
        assert_eq!(config.calendar_folder_type, "8");
    }

    #[test]
    fn test_load_toml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "config.toml",
            r#"
exchange_url = "https://mail.example.com/eas"
username = "bob"
password = "hunter2"
device_id = "phone"
calendar_folder_type = "13"
"#,
        );

        let config = Config::load(&path).unwrap();

        assert_eq!(config.username, "bob");
        assert_eq!(config.calendar_folder_type, "13");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, EasError::Config(_)), "got {err:?}");
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "config.yaml", "username: \"alice\"\n");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, EasError::Config(_)), "got {err:?}");
    }

    #[test]
    fn test_debug_hides_password() {
        let config = Config {
            exchange_url: "https://mail.example.com".into(),
            username: "alice".into(),
            password: "s3cret".into(),
            device_id: "dev".into(),
            calendar_folder_type: "8".into(),
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("s3cret"));
        assert_eq!(config.credentials(), ("alice", "s3cret"));
    }
}
