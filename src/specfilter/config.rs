use crate::error::{Result, SpecError};
use crate::model::{Continent, Country, Language};
use crate::spec::Combinator;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

static DEFAULT_COUNTRIES: Lazy<Vec<Country>> = Lazy::new(|| {
    vec![
        Country::new("England", Continent::Europe, Language::English),
        Country::new("Germany", Continent::Europe, Language::German),
        Country::new("Egypt", Continent::Africa, Language::Arabic),
        Country::new("Austria", Continent::Europe, Language::German),
    ]
});

/// Configuration for specfilter, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterConfig {
    /// How `filter` joins its terms when `--any` is not given
    #[serde(default)]
    pub combinator: Combinator,

    /// The countries the binary filters over
    #[serde(default = "default_countries")]
    pub countries: Vec<Country>,
}

fn default_countries() -> Vec<Country> {
    DEFAULT_COUNTRIES.clone()
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            combinator: Combinator::default(),
            countries: default_countries(),
        }
    }
}

impl FilterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SpecError::Io)?;
        let config: FilterConfig =
            serde_json::from_str(&content).map_err(SpecError::Serialization)?;
        tracing::debug!(
            path = %config_path.display(),
            countries = config.countries.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SpecError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SpecError::Serialization)?;
        fs::write(config_path, content).map_err(SpecError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sample_countries() {
        let config = FilterConfig::default();
        assert_eq!(config.combinator, Combinator::All);
        let names: Vec<_> = config.countries.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["England", "Germany", "Egypt", "Austria"]);
    }

    #[test]
    fn load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = FilterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, FilterConfig::default());
    }

    #[test]
    fn save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");

        let config = FilterConfig {
            combinator: Combinator::Any,
            countries: vec![Country::new("Japan", Continent::Asia, Language::English)],
        };
        config.save(&nested).unwrap();

        let loaded = FilterConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"combinator":"any"}"#).unwrap();

        let loaded = FilterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.combinator, Combinator::Any);
        assert_eq!(loaded.countries, FilterConfig::default().countries);
    }

    #[test]
    fn malformed_file_is_serialization_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();

        assert!(matches!(
            FilterConfig::load(temp_dir.path()),
            Err(SpecError::Serialization(_))
        ));
    }
}
