//! Error handling for the glossary workspace.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod glossary_error;
pub mod sink_error;
pub mod source_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::GlossaryErrorCode;
pub use glossary_error::{GlossaryError, GlossaryResult};
pub use sink_error::SinkError;
pub use source_error::SourceReadError;
pub use validation_error::ValidationError;
