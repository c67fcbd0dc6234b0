//! Schedule scraper configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::month::{DEFAULT_BASE_URL, MonthSpec};

const LOCAL_CONFIG_FILE: &str = "prodsched.toml";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Configuration loaded from prodsched.toml
///
/// `base_url` and `output_dir` can be overridden with `PRODSCHED_BASE_URL`
/// and `PRODSCHED_OUTPUT_DIR`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScheduleConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Months to fetch, oldest first
    #[serde(default)]
    pub months: Vec<MonthSpec>,
}

impl ScheduleConfig {
    /// Load from `path`, or from the first default location that exists.
    pub fn load(path: Option<&Path>) -> ScheduleResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            return Err(ScheduleError::Config(format!(
                "Config file {} not found",
                path.display()
            )));
        }

        tracing::info!("Loading config from {}", path.display());
        Self::build(File::from(path).format(FileFormat::Toml))
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> ScheduleResult<Self> {
        Self::build(File::from_str(content, FileFormat::Toml))
    }

    fn build<S>(source: S) -> ScheduleResult<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config: ScheduleConfig = Config::builder()
            .add_source(source)
            .add_source(Environment::with_prefix("PRODSCHED"))
            .build()
            .map_err(|e| ScheduleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ScheduleError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// `./prodsched.toml` if present, else `<config dir>/prodsched/config.toml`.
    pub fn default_path() -> ScheduleResult<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Ok(local);
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join("prodsched");

        Ok(config_dir.join("config.toml"))
    }

    /// Write the config as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> ScheduleResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ScheduleError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    fn validate(&self) -> ScheduleResult<()> {
        if self.months.is_empty() {
            return Err(ScheduleError::Config("No months configured".into()));
        }
        self.months.iter().try_for_each(MonthSpec::validate)
    }

    /// Output directory with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::UrlStyle;

    #[test]
    fn test_from_toml_with_defaults() {
        let config = ScheduleConfig::from_toml(
            r#"
            [[months]]
            year = 2013
            label = "january"
            number = 1
            style = "a"

            [[months]]
            year = 2018
            label = "03"
            number = 3
            style = "c"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(
            config.months,
            vec![
                MonthSpec::new(2013, "january", 1, UrlStyle::A),
                MonthSpec::new(2018, "03", 3, UrlStyle::C),
            ]
        );
    }

    #[test]
    fn test_from_toml_rejects_bad_month() {
        let err = ScheduleConfig::from_toml(
            r#"
            [[months]]
            year = 2013
            label = "x"
            number = 0
            style = "b"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ScheduleError::Config(_)));
    }

    #[test]
    fn test_from_toml_requires_months() {
        let err = ScheduleConfig::from_toml(r#"output_dir = "public""#).unwrap_err();
        assert!(matches!(err, ScheduleError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = ScheduleConfig::load(Some(&tmp.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ScheduleError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("prodsched.toml");
        std::fs::write(
            &path,
            "base_url = \"http://localhost/schedule\"\noutput_dir = \"out\"\n\n[[months]]\nyear = 2014\nlabel = \"june\"\nnumber = 6\nstyle = \"b\"\n",
        )
        .unwrap();

        let config = ScheduleConfig::load(Some(&path)).unwrap();
        assert_eq!(config.base_url, "http://localhost/schedule");
        assert_eq!(config.output_path(), PathBuf::from("out"));
        assert_eq!(
            config.months[0].page_url(&config.base_url),
            "http://localhost/schedule/2014/june.php"
        );
    }

    #[test]
    fn test_save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/prodsched.toml");
        let config = ScheduleConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("public"),
            months: vec![MonthSpec::new(2015, "01", 1, UrlStyle::C)],
        };

        config.save(&path).unwrap();
        let loaded = ScheduleConfig::load(Some(&path)).unwrap();

        assert_eq!(loaded.output_dir, PathBuf::from("public"));
        assert_eq!(loaded.months, config.months);
    }
}
