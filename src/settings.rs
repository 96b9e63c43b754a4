use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "ILOCATOR_CONFIG";

const SEARCH_PATHS: [&str; 2] = ["config/ilocator.toml", "./ilocator.toml"];

/// Settings for a [`BasicContainer`](crate::BasicContainer).
///
/// Read from the `[container]` table of a TOML document, so they can live
/// next to the hosting application's own configuration. Every field is
/// optional.
///
/// # Examples
///
/// ```
/// use ilocator::ContainerSettings;
///
/// let settings = ContainerSettings::from_str(r#"
///     [container]
///     name = "app"
///     trace_register = true
/// "#).unwrap();
///
/// assert_eq!(settings.name, "app");
/// assert!(settings.trace_missing);
/// assert!(settings.trace_register);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSettings {
    /// Label used in log records.
    pub name: String,
    /// Log a debug record when an unregistered capability is resolved.
    pub trace_missing: bool,
    /// Log a debug record on every registration.
    pub trace_register: bool,
}

impl Default for ContainerSettings {
    fn default() -> Self {
        ContainerSettings {
            name: String::from("default"),
            trace_missing: true,
            trace_register: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default)]
    container: ContainerSettings,
}

impl ContainerSettings {
    /// Parse settings from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, anyhow::Error> {
        let document: Document = toml::from_str(s)
            .map_err(|e| anyhow::anyhow!("Failed to parse container settings: {}", e))?;
        Ok(document.container)
    }

    /// Parse settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(fname: P) -> Result<Self, anyhow::Error> {
        let path = fname.as_ref();
        if !path.exists() {
            return Err(anyhow::anyhow!("File {} does not exist", path.display()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    /// Load settings from the first candidate file that exists.
    ///
    /// Candidates are `$ILOCATOR_CONFIG`, then `config/ilocator.toml`, then
    /// `./ilocator.toml`. A candidate that exists but cannot be read or
    /// parsed is skipped with a warning. Falls back to the defaults.
    ///
    /// Opt-in only: containers never call this implicitly, and
    /// `BasicContainer::new()` always starts from the defaults.
    pub fn load() -> Self {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let candidates = explicit
            .into_iter()
            .chain(SEARCH_PATHS.iter().map(PathBuf::from));
        Self::load_from(candidates)
    }

    fn load_from<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(settings) => {
                    log::debug!("Loaded container settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Skipping container settings: {}", e),
            }
        }
        Self::default()
    }
}
