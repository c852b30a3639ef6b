//! Configuration for uocplay paths and ingestion.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (UOCPLAY_HOME, UOCPLAY_SHOWS, UOCPLAY_FILMS)
//! 2. Config file (.uocplay/config.yaml)
//! 3. Defaults (~/.uocplay)
//!
//! Config file discovery:
//! - Searches current directory and parents for .uocplay/config.yaml
//! - Data paths in the config file are relative to the project root
//!   (the directory holding .uocplay/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub ingest: Option<IngestConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to .uocplay/)
    pub home: Option<String>,
    /// Show records file (relative to project root)
    pub shows: Option<String>,
    /// Film records file (relative to project root)
    pub films: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    pub delimiter: Option<char>,
    pub skip_header: Option<bool>,
    pub strict: Option<bool>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to uocplay home
    pub home: PathBuf,
    /// Default show records file
    pub shows_file: PathBuf,
    /// Default film records file
    pub films_file: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Record parsing settings
    pub ingest: IngestSettings,
}

/// How record files are read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSettings {
    /// Field separator
    pub delimiter: char,
    /// Ignore the first non-empty line
    pub skip_header: bool,
    /// Abort the load on the first bad record instead of skipping it
    pub strict: bool,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            delimiter: ';',
            skip_header: false,
            strict: false,
        }
    }
}

impl IngestSettings {
    fn from_config(config: Option<&IngestConfig>) -> Self {
        let defaults = Self::default();
        match config {
            Some(c) => Self {
                delimiter: c.delimiter.unwrap_or(defaults.delimiter),
                skip_header: c.skip_header.unwrap_or(defaults.skip_header),
                strict: c.strict.unwrap_or(defaults.strict),
            },
            None => defaults,
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".uocplay").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to a base directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Environment variable as a path, if set
fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key).ok().map(PathBuf::from)
}

/// Resolve configuration from an optional config file
fn resolve(config_file: Option<PathBuf>, default_home: PathBuf) -> Result<ResolvedConfig> {
    let (home, shows_file, films_file, ingest) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        let uocplay_dir = config_path.parent().unwrap_or(Path::new("."));
        let base_dir = uocplay_dir.parent().unwrap_or(Path::new("."));

        let home = env_path("UOCPLAY_HOME")
            .or_else(|| config.paths.home.as_deref().map(|h| resolve_path(uocplay_dir, h)))
            .unwrap_or(default_home);

        let shows_file = env_path("UOCPLAY_SHOWS")
            .or_else(|| config.paths.shows.as_deref().map(|p| resolve_path(base_dir, p)))
            .unwrap_or_else(|| home.join("shows.csv"));

        let films_file = env_path("UOCPLAY_FILMS")
            .or_else(|| config.paths.films.as_deref().map(|p| resolve_path(base_dir, p)))
            .unwrap_or_else(|| home.join("films.csv"));

        let ingest = IngestSettings::from_config(config.ingest.as_ref());

        (home, shows_file, films_file, ingest)
    } else {
        let home = env_path("UOCPLAY_HOME").unwrap_or(default_home);
        let shows_file = env_path("UOCPLAY_SHOWS").unwrap_or_else(|| home.join("shows.csv"));
        let films_file = env_path("UOCPLAY_FILMS").unwrap_or_else(|| home.join("films.csv"));

        (home, shows_file, films_file, IngestSettings::default())
    };

    Ok(ResolvedConfig {
        home,
        shows_file,
        films_file,
        config_file,
        ingest,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".uocplay");

    resolve(find_config_file(), default_home)
}

/// Ingest settings from a config file, defaults when there is none
fn ingest_settings_at(config_file: Option<&Path>) -> Result<IngestSettings> {
    match config_file {
        Some(path) => {
            let config = load_config_file(path)?;
            Ok(IngestSettings::from_config(config.ingest.as_ref()))
        }
        None => Ok(IngestSettings::default()),
    }
}

/// Ingest settings without resolving the data paths.
///
/// Does not need a home directory, unlike [`config`].
pub fn ingest_settings() -> Result<IngestSettings> {
    ingest_settings_at(find_config_file().as_deref())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let uocplay_dir = temp.path().join(".uocplay");
        std::fs::create_dir_all(&uocplay_dir).unwrap();

        let config_path = uocplay_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
paths:
  home: ./
  shows: data/shows.csv
ingest:
  delimiter: ","
  skip_header: true
"#
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.paths.home, Some("./".to_string()));
        assert_eq!(config.paths.shows, Some("data/shows.csv".to_string()));
        assert!(config.paths.films.is_none());

        let ingest = config.ingest.unwrap();
        assert_eq!(ingest.delimiter, Some(','));
        assert_eq!(ingest.skip_header, Some(true));
        assert!(ingest.strict.is_none());
    }

    #[test]
    fn test_ingest_settings_defaults() {
        let settings = IngestSettings::from_config(None);
        assert_eq!(settings, IngestSettings::default());
        assert_eq!(settings.delimiter, ';');

        let partial = IngestConfig {
            delimiter: None,
            skip_header: None,
            strict: Some(true),
        };
        let settings = IngestSettings::from_config(Some(&partial));
        assert_eq!(settings.delimiter, ';');
        assert!(settings.strict);
    }

    #[test]
    fn test_resolve_relative_to_project_root() {
        let temp = TempDir::new().unwrap();
        let uocplay_dir = temp.path().join(".uocplay");
        std::fs::create_dir_all(&uocplay_dir).unwrap();

        let config_path = uocplay_dir.join("config.yaml");
        std::fs::write(
            &config_path,
            "version: \"1.0\"\npaths:\n  films: /absolute/films.csv\n",
        )
        .unwrap();

        let default_home = PathBuf::from("/nonexistent/.uocplay");
        let resolved = resolve(Some(config_path.clone()), default_home.clone()).unwrap();

        // Environment overrides take precedence when set
        if std::env::var("UOCPLAY_FILMS").is_err() {
            assert_eq!(resolved.films_file, PathBuf::from("/absolute/films.csv"));
        }
        if std::env::var("UOCPLAY_HOME").is_err() && std::env::var("UOCPLAY_SHOWS").is_err() {
            assert_eq!(resolved.home, default_home);
            assert_eq!(resolved.shows_file, default_home.join("shows.csv"));
        }
        assert_eq!(resolved.config_file, Some(config_path));
        assert_eq!(resolved.ingest, IngestSettings::default());
    }

    #[test]
    fn test_ingest_settings_without_home() {
        assert_eq!(ingest_settings_at(None).unwrap(), IngestSettings::default());

        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yaml");
        std::fs::write(&config_path, "version: \"1.0\"\ningest:\n  strict: true\n").unwrap();

        let settings = ingest_settings_at(Some(&config_path)).unwrap();
        assert!(settings.strict);
        assert_eq!(settings.delimiter, ';');

        std::fs::write(&config_path, "version: [").unwrap();
        assert!(ingest_settings_at(Some(&config_path)).is_err());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/subdir")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }
}
