//! vof-config: nested configuration dictionaries for interface models.
//!
//! A configuration root is a nested key→value document (YAML or JSON). Model
//! specific parameters live in sibling sub-dictionaries such as
//! `smoothedCoeffs`, looked up on demand and allowed to be absent.
//!
//! # Example
//!
//! ```
//! use vof_config::Dictionary;
//!
//! let root = Dictionary::from_yaml_str(
//!     "curvatureModel: smoothed\nsmoothedCoeffs:\n  nSmooth: 3\n",
//! )
//! .unwrap();
//!
//! let model: String = root.lookup("curvatureModel").unwrap();
//! assert_eq!(model, "smoothed");
//!
//! let coeffs = root.optional_sub_dict("smoothedCoeffs").unwrap();
//! assert_eq!(coeffs.lookup_or("nSmooth", 2_u32).unwrap(), 3);
//! assert!(root.optional_sub_dict("standardCoeffs").unwrap().is_empty());
//! ```

pub mod dictionary;
pub mod error;
pub mod source;

use std::path::Path;

pub use dictionary::Dictionary;
pub use error::{ConfigError, ConfigResult};
pub use source::{ConfigFormat, ConfigSource, FileSource, MemorySource};

pub fn load_yaml(path: &Path) -> ConfigResult<Dictionary> {
    let content = std::fs::read_to_string(path)?;
    Dictionary::from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, dict: &Dictionary) -> ConfigResult<()> {
    let content = dict.to_yaml_string()?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ConfigResult<Dictionary> {
    let content = std::fs::read_to_string(path)?;
    Dictionary::from_json_str(&content)
}

pub fn save_json(path: &Path, dict: &Dictionary) -> ConfigResult<()> {
    let content = serde_json::to_string_pretty(dict)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a dictionary, picking the parser from the file extension.
pub fn load(path: &Path) -> ConfigResult<Dictionary> {
    match ConfigFormat::from_path(path) {
        ConfigFormat::Yaml => load_yaml(path),
        ConfigFormat::Json => load_json(path),
    }
}
