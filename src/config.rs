//! Runtime configuration.
//!
//! Values come from the process environment, after loading a `.env` file if
//! one is present. Command-line flags override them.
use std::path::PathBuf;

/// Directory holding `*FormFlow.json` documents.
pub const DATA_DIR_VAR: &str = "FORMFLOW_DATA_DIR";
/// Name of the form loaded at startup.
pub const DEFAULT_FORM_VAR: &str = "FORMFLOW_DEFAULT_FORM";

const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    pub data_dir: PathBuf,
    pub default_form: Option<String>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            default_form: None,
        }
    }
}

impl FlowConfig {
    /// Reads the configuration from `.env` and the environment.
    pub fn from_env() -> Self {
        // A missing .env file is the common case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Blank
    /// values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            data_dir: read(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            default_form: read(DEFAULT_FORM_VAR),
        }
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_default_form(mut self, name: impl Into<String>) -> Self {
        self.default_form = Some(name.into());
        self
    }
}
