//! Output sinks for the canonical glossary.

pub mod json_sink;
pub mod memory_sink;

pub use json_sink::{write_atomic, write_json_atomic, JsonFileSink};
pub use memory_sink::MemorySink;
