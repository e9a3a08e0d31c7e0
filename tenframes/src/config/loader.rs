//! Configuration loader
//!
//! Reads a worksheet YAML file, enforces a size limit and deserializes it
//! into [`WorksheetConfig`]. Missing fields take their defaults; unknown
//! fields are rejected. Semantic checks live in
//! [`validation`](super::validation).

use std::path::Path;

use tenframes_core::config::WorksheetConfig;
use tenframes_core::error::ConfigError;
use tracing::debug;

/// Largest accepted configuration file, in bytes.
pub const DEFAULT_MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    max_config_size: u64,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ConfigLoader {
    /// Creates a loader with an explicit size limit.
    #[must_use]
    pub const fn new(max_config_size: u64) -> Self {
        Self { max_config_size }
    }

    /// Creates a loader whose size limit honours `TENFRAMES_MAX_CONFIG_SIZE`.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(env_or("TENFRAMES_MAX_CONFIG_SIZE", DEFAULT_MAX_CONFIG_SIZE))
    }

    /// Loads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if the file does not exist,
    /// [`ConfigError::TooLarge`] if it exceeds the size limit,
    /// [`ConfigError::Read`] for other I/O failures and
    /// [`ConfigError::ParseError`] for malformed YAML.
    pub fn load(&self, path: &Path) -> Result<WorksheetConfig, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|e| read_error(path, e))?;
        if metadata.len() > self.max_config_size {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit: self.max_config_size,
            });
        }

        let text = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "read configuration");
        self.load_from_str(&text, path)
    }

    /// Parses configuration text; `origin` is used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooLarge`] if the text exceeds the size limit
    /// and [`ConfigError::ParseError`] for malformed YAML.
    pub fn load_from_str(&self, yaml: &str, origin: &Path) -> Result<WorksheetConfig, ConfigError> {
        let size = yaml.len() as u64;
        if size > self.max_config_size {
            return Err(ConfigError::TooLarge {
                path: origin.to_path_buf(),
                size,
                limit: self.max_config_size,
            });
        }

        // An empty or comment-only file parses as null; treat it as "all defaults".
        if yaml.lines().all(|l| {
            let l = l.trim();
            l.is_empty() || l.starts_with('#')
        }) {
            return Ok(WorksheetConfig::default());
        }

        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            path: origin.to_path_buf(),
            line: e.location().map(|loc| loc.line()),
            message: e.to_string(),
        })
    }
}

fn read_error(path: &Path, source: std::io::Error) -> ConfigError {
    if source.kind() == std::io::ErrorKind::NotFound {
        ConfigError::MissingFile {
            path: path.to_path_buf(),
        }
    } else {
        ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tenframes_core::config::PaperSize;

    fn origin() -> PathBuf {
        PathBuf::from("worksheet.yaml")
    }

    #[test]
    fn test_load_from_str() {
        let yaml = r"
pages: 4
heading: Count the dots
style:
  paper: a5
";
        let config = ConfigLoader::new(1024).load_from_str(yaml, &origin()).unwrap();
        assert_eq!(config.pages, 4);
        assert_eq!(config.heading, "Count the dots");
        assert_eq!(config.style.paper, PaperSize::A5);
    }

    #[test]
    fn test_empty_file_is_default() {
        let loader = ConfigLoader::new(1024);
        assert_eq!(
            loader.load_from_str("", &origin()).unwrap(),
            WorksheetConfig::default()
        );
        assert_eq!(
            loader.load_from_str("# nothing here\n\n", &origin()).unwrap(),
            WorksheetConfig::default()
        );
    }

    #[test]
    fn test_parse_error_has_line() {
        let yaml = "pages: 3\nstyle:\n  paper: [a4\n";
        let err = ConfigLoader::new(1024)
            .load_from_str(yaml, &origin())
            .unwrap_err();
        match err {
            ConfigError::ParseError { path, line, .. } => {
                assert_eq!(path, origin());
                assert!(line.is_some());
            }
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = ConfigLoader::new(1024)
            .load_from_str("frames_per_page: 12\n", &origin())
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("frames_per_page"));
    }

    #[test]
    fn test_size_limit() {
        let err = ConfigLoader::new(8)
            .load_from_str("pages: 10\nseed: 1\n", &origin())
            .unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge { limit: 8, .. }));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed: 99\noutput:\n  echo: false").unwrap();

        let config = ConfigLoader::new(1024).load(file.path()).unwrap();
        assert_eq!(config.seed, Some(99));
        assert!(!config.output.echo);
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::new(1024)
            .load(Path::new("/nonexistent/tenframes/worksheet.yaml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }

    #[test]
    fn test_oversized_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "heading: {}", "x".repeat(64)).unwrap();

        let err = ConfigLoader::new(16).load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge { .. }));
    }
}
