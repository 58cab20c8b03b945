//! Stable, machine-readable error codes surfaced to operator tooling.

pub const SOURCE_IO: &str = "SOURCE_IO";
pub const SOURCE_PARSE: &str = "SOURCE_PARSE";
pub const SOURCE_NOT_ARRAY: &str = "SOURCE_NOT_ARRAY";
pub const SOURCE_INVALID_RECORD: &str = "SOURCE_INVALID_RECORD";
pub const VALIDATION_MISSING_FIELD: &str = "VALIDATION_MISSING_FIELD";
pub const VALIDATION_FIELD_TOO_LONG: &str = "VALIDATION_FIELD_TOO_LONG";
pub const VALIDATION_DUPLICATE_ACRONYM: &str = "VALIDATION_DUPLICATE_ACRONYM";
pub const CONFIG_FILE_NOT_FOUND: &str = "CONFIG_FILE_NOT_FOUND";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const SINK_IO: &str = "SINK_IO";
pub const SINK_SERIALIZE: &str = "SINK_SERIALIZE";
pub const SINK_ALREADY_EXISTS: &str = "SINK_ALREADY_EXISTS";

/// Implemented by every error enum in the workspace.
pub trait GlossaryErrorCode {
    fn error_code(&self) -> &'static str;
}
