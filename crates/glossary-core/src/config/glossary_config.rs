//! Top-level glossary configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    BaselineConfig, ConsolidationConfig, ObservabilityConfig, OutputConfig, SourcesConfig,
    ValidationConfig,
};
use crate::constants::ELLIPSIS;
use crate::errors::ConfigError;

/// Project config file name looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "glossary.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GLOSSARY_*`)
/// 3. Explicit config file, or `glossary.toml` in the project root
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlossaryConfig {
    pub sources: SourcesConfig,
    pub baseline: BaselineConfig,
    pub output: OutputConfig,
    pub consolidation: ConsolidationConfig,
    pub validation: ValidationConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub sources_dir: Option<String>,
    pub baseline_path: Option<String>,
    pub no_baseline: bool,
    pub output_path: Option<String>,
    pub overwrite: Option<bool>,
    pub organization: Option<String>,
    pub log_level: Option<String>,
}

impl GlossaryConfig {
    /// Load configuration with layered resolution.
    ///
    /// `config_file`, when given, must exist. Otherwise `glossary.toml` in `root`
    /// is used if present.
    pub fn load(
        root: &Path,
        config_file: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => {
                let project = root.join(PROJECT_CONFIG_FILE);
                if project.exists() {
                    Self::from_file(&project)?
                } else {
                    Self::default()
                }
            }
        };

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &GlossaryConfig) -> Result<(), ConfigError> {
        let threshold = config.consolidation.sentence_overlap_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ValidationFailed {
                field: "consolidation.sentence_overlap_threshold".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if config.validation.max_acronym_len == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "validation.max_acronym_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.validation.max_name_len == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "validation.max_name_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.validation.max_description_len <= ELLIPSIS.len() {
            return Err(ConfigError::ValidationFailed {
                field: "validation.max_description_len".to_string(),
                message: format!("must be greater than {}", ELLIPSIS.len()),
            });
        }
        if config.consolidation.default_category.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "consolidation.default_category".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve a configured path against the project root.
    pub fn resolve(root: &Path, configured: &str) -> PathBuf {
        let path = Path::new(configured);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GLOSSARY_SOURCES_DIR`, `GLOSSARY_OUTPUT_PATH`, etc.
    fn apply_env_overrides(config: &mut GlossaryConfig) {
        if let Ok(val) = std::env::var("GLOSSARY_SOURCES_DIR") {
            config.sources.dir = val;
        }
        if let Ok(val) = std::env::var("GLOSSARY_BASELINE_PATH") {
            config.baseline.path = val;
        }
        if let Ok(val) = std::env::var("GLOSSARY_BASELINE_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                config.baseline.enabled = v;
            }
        }
        if let Ok(val) = std::env::var("GLOSSARY_OUTPUT_PATH") {
            config.output.path = val;
        }
        if let Ok(val) = std::env::var("GLOSSARY_OUTPUT_OVERWRITE") {
            if let Ok(v) = val.parse::<bool>() {
                config.output.overwrite = v;
            }
        }
        if let Ok(val) = std::env::var("GLOSSARY_ORGANIZATION") {
            config.consolidation.organization = val;
        }
        if let Ok(val) = std::env::var("GLOSSARY_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GlossaryConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.sources_dir {
            config.sources.dir = v.clone();
        }
        if let Some(ref v) = cli.baseline_path {
            config.baseline.path = v.clone();
            config.baseline.enabled = true;
        }
        if cli.no_baseline {
            config.baseline.enabled = false;
        }
        if let Some(ref v) = cli.output_path {
            config.output.path = v.clone();
        }
        if let Some(v) = cli.overwrite {
            config.output.overwrite = v;
        }
        if let Some(ref v) = cli.organization {
            config.consolidation.organization = v.clone();
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
