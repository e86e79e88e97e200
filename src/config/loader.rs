//! Defaults loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::GenerationDefaults;

/// Loads and provides access to the generation defaults profile.
///
/// # Example
///
/// ```no_run
/// use timesynth::config::DefaultsLoader;
///
/// let loader = DefaultsLoader::load("./config/defaults.yaml")?;
/// assert!(!loader.defaults().projects.is_empty());
/// # Ok::<(), timesynth::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultsLoader {
    defaults: GenerationDefaults,
}

impl DefaultsLoader {
    /// Creates a loader carrying the built-in defaults profile.
    pub fn built_in() -> Self {
        Self::default()
    }

    /// Loads a defaults profile from a YAML file.
    ///
    /// Returns an error when the file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|_| EngineError::DefaultsNotFound {
            path: path.display().to_string(),
        })?;
        let defaults =
            serde_yaml::from_str(&contents).map_err(|err| EngineError::DefaultsParseError {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
        Ok(Self { defaults })
    }

    /// Returns the loaded defaults profile.
    pub fn defaults(&self) -> &GenerationDefaults {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_matches_default_profile() {
        assert_eq!(
            *DefaultsLoader::built_in().defaults(),
            GenerationDefaults::default()
        );
    }

    #[test]
    fn test_load_shipped_defaults_file() {
        let loader = DefaultsLoader::load("./config/defaults.yaml").unwrap();
        assert_eq!(*loader.defaults(), GenerationDefaults::default());
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let err = DefaultsLoader::load("./config/nope.yaml").unwrap_err();
        assert!(matches!(err, EngineError::DefaultsNotFound { .. }));
    }

    #[test]
    fn test_invalid_yaml_reports_parse_error() {
        let dir = std::env::temp_dir().join("timesynth-loader-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.yaml");
        fs::write(&path, "num_employees: [not a number").unwrap();

        let err = DefaultsLoader::load(&path).unwrap_err();
        assert!(matches!(err, EngineError::DefaultsParseError { .. }));
    }
}
