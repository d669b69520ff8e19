use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{GeoError, Result};

pub const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const FIND_PLACE_URL: &str = "https://maps.googleapis.com/maps/api/place/findplacefromtext/json";

/// Environment variable that overrides the API key from any config file
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

fn default_geocode_url() -> String {
    GEOCODE_URL.to_string()
}

fn default_find_place_url() -> String {
    FIND_PLACE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Read-only settings shared by every lookup.
///
/// Built once at startup and handed to [`GeoClient`](crate::api::GeoClient);
/// a per-call override is a cloned config with one field replaced.
#[derive(Deserialize, Clone, PartialEq)]
pub struct GeocoderConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,
    #[serde(default = "default_find_place_url")]
    pub find_place_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            geocode_url: default_geocode_url(),
            find_place_url: default_find_place_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Keep the key out of logs
impl fmt::Debug for GeocoderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("GeocoderConfig")
            .field("api_key", &key)
            .field("geocode_url", &self.geocode_url)
            .field("find_place_url", &self.find_place_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeocoderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_geocode_url(mut self, url: impl Into<String>) -> Self {
        self.geocode_url = url.into();
        self
    }

    pub fn with_find_place_url(mut self, url: impl Into<String>) -> Self {
        self.find_place_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Fails when no usable API key is configured or the timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(GeoError::Configuration(format!(
                "missing API key: set `api_key` in the config file or {}",
                API_KEY_ENV
            )));
        }
        if self.timeout_secs == 0 {
            return Err(GeoError::Configuration(
                "`timeout_secs` must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Read a config file at an explicit path
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GeoError::Configuration(format!("failed to read config file {:?}: {}", path, e))
        })?;
        toml::from_str(&contents).map_err(|e| {
            GeoError::Configuration(format!("failed to parse config file {:?}: {}", path, e))
        })
    }

    /// Search the default locations and return the first config that parses
    pub fn load() -> Option<Self> {
        let paths = get_config_paths();
        log::debug!("Searching for config in {:?}", paths);
        Self::load_from(&paths)
    }

    fn load_from(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::from_path(path) {
                Ok(config) => {
                    log::debug!("Loaded config from {:?}", path);
                    return Some(config);
                }
                Err(e) => log::warn!("Skipping config file: {}", e),
            }
        }
        None
    }

    /// Replace the API key with `key` when it is set and not blank
    pub fn with_key_override(self, key: Option<String>) -> Self {
        match key {
            Some(k) if !k.trim().is_empty() => self.with_api_key(k),
            _ => self,
        }
    }

    /// Build the process-wide configuration.
    ///
    /// An explicit path must exist and parse; otherwise the default locations
    /// are searched, falling back to built-in defaults. The API key from the
    /// environment wins over the file.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_path(path)?,
            None => Self::load().unwrap_or_default(),
        };
        Ok(config.with_key_override(std::env::var(API_KEY_ENV).ok()))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("gmaps-lookup.toml"));
    paths.push(PathBuf::from(".gmaps-lookup.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("gmaps-lookup").join("config.toml"));
        paths.push(config_dir.join("gmaps-lookup.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".gmaps-lookup.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config: GeocoderConfig = toml::from_str(r#"api_key = "abc""#).unwrap();

        assert_eq!(config.api_key, "abc");
        assert_eq!(config.geocode_url, GEOCODE_URL);
        assert_eq!(config.find_place_url, FIND_PLACE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        assert!(matches!(
            GeocoderConfig::default().validate(),
            Err(GeoError::Configuration(_))
        ));
        assert!(GeocoderConfig::new("   ").validate().is_err());
        assert!(GeocoderConfig::new("abc").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = GeocoderConfig::new("abc").with_timeout_secs(0);
        assert!(matches!(
            config.validate(),
            Err(GeoError::Configuration(_))
        ));

        let from_file: GeocoderConfig = toml::from_str("api_key = \"abc\"\ntimeout_secs = 0").unwrap();
        assert!(from_file.validate().is_err());
    }

    #[test]
    fn test_default_search_paths() {
        let paths = get_config_paths();
        assert_eq!(paths[0], PathBuf::from("gmaps-lookup.toml"));
        assert_eq!(paths[1], PathBuf::from(".gmaps-lookup.toml"));
        assert!(paths.iter().all(|p| {
            p.to_string_lossy().contains("gmaps-lookup")
        }));
    }

    #[test]
    fn test_key_override() {
        let config = GeocoderConfig::new("from-file");

        assert_eq!(
            config.clone().with_key_override(Some("from-env".into())).api_key,
            "from-env"
        );
        assert_eq!(
            config.clone().with_key_override(Some("".into())).api_key,
            "from-file"
        );
        assert_eq!(config.with_key_override(None).api_key, "from-file");
    }

    #[test]
    fn test_from_path_reads_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gmaps-lookup.toml");
        fs::write(
            &path,
            "api_key = \"k\"\ngeocode_url = \"http://localhost/geocode\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = GeocoderConfig::from_path(&path).unwrap();
        assert_eq!(config.geocode_url, "http://localhost/geocode");
        assert_eq!(config.find_place_url, FIND_PLACE_URL);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_from_path_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            GeocoderConfig::from_path(&missing),
            Err(GeoError::Configuration(_))
        ));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "api_key = ").unwrap();
        assert!(matches!(
            GeocoderConfig::from_path(&broken),
            Err(GeoError::Configuration(_))
        ));
    }

    #[test]
    fn test_load_skips_unparsable_files() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        fs::write(&broken, "timeout_secs = \"soon\"").unwrap();
        fs::write(&good, "api_key = \"good\"").unwrap();

        let paths = vec![dir.path().join("absent.toml"), broken, good];
        let config = GeocoderConfig::load_from(&paths).unwrap();
        assert_eq!(config.api_key, "good");
    }

    #[test]
    fn test_debug_hides_key() {
        let rendered = format!("{:?}", GeocoderConfig::new("secret-key"));
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
