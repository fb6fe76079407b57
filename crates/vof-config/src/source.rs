//! Where a configuration root comes from.
//!
//! Models re-read their coefficients through a [`ConfigSource`] every time
//! they are reconfigured, so a source may return a different root on each
//! call (an edited file, a replaced in-memory document).

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::dictionary::Dictionary;
use crate::error::ConfigResult;

/// Provider of the current configuration root.
pub trait ConfigSource: Send + Sync {
    /// Human readable description for logs and diagnostics.
    fn describe(&self) -> String;

    /// Load the current root. Parse failures are returned unchanged.
    fn load(&self) -> ConfigResult<Dictionary>;
}

/// A dictionary is a fixed source of itself.
impl ConfigSource for Dictionary {
    fn describe(&self) -> String {
        "in-memory dictionary".to_string()
    }

    fn load(&self) -> ConfigResult<Dictionary> {
        Ok(self.clone())
    }
}

/// In-memory root that the host can swap for live reconfiguration.
#[derive(Debug, Default)]
pub struct MemorySource {
    root: RwLock<Dictionary>,
}

impl MemorySource {
    pub fn new(root: Dictionary) -> Self {
        Self {
            root: RwLock::new(root),
        }
    }

    /// Replace the root; subsequent loads observe the new document.
    pub fn replace(&self, root: Dictionary) {
        let mut guard = self.root.write().unwrap_or_else(|e| e.into_inner());
        *guard = root;
    }
}

impl ConfigSource for MemorySource {
    fn describe(&self) -> String {
        "in-memory source".to_string()
    }

    fn load(&self) -> ConfigResult<Dictionary> {
        let guard = self.root.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }
}

/// On-disk document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// `.json` selects JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// A file re-read from disk on every load.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: ConfigFormat,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = ConfigFormat::from_path(&path);
        Self { path, format }
    }

    pub fn with_format(mut self, format: ConfigFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> ConfigResult<Dictionary> {
        tracing::debug!(path = %self.path.display(), format = ?self.format, "reading configuration");
        let content = std::fs::read_to_string(&self.path)?;
        match self.format {
            ConfigFormat::Yaml => Dictionary::from_yaml_str(&content),
            ConfigFormat::Json => Dictionary::from_json_str(&content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("case/transport.json")),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("case/transport.JSON")),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("case/transport.yaml")),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("case/transportProperties")),
            ConfigFormat::Yaml
        );
    }

    #[test]
    fn memory_source_observes_replacement() {
        let source = MemorySource::new(Dictionary::from_yaml_str("a: 1").unwrap());
        assert_eq!(source.load().unwrap().lookup::<i64>("a").unwrap(), 1);

        source.replace(Dictionary::from_yaml_str("a: 2").unwrap());
        assert_eq!(source.load().unwrap().lookup::<i64>("a").unwrap(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = FileSource::new("/nonexistent/vof/transport.yaml");
        let err = source.load().unwrap_err();
        assert!(matches!(err, crate::ConfigError::Io(_)));
    }
}
