//! Configuration for every subsystem, TOML-backed with compiled defaults.

pub mod consolidation_config;
pub mod defaults;
pub mod glossary_config;
pub mod io_config;
pub mod observability_config;
pub mod validation_config;

pub use consolidation_config::ConsolidationConfig;
pub use glossary_config::{CliOverrides, GlossaryConfig};
pub use io_config::{BaselineConfig, OutputConfig, SourcesConfig};
pub use observability_config::ObservabilityConfig;
pub use validation_config::ValidationConfig;
