//! # glossary-consolidation
//!
//! 7-phase consolidation pipeline: aggregation → grouping → concept clustering →
//! field synthesis → disambiguation → validation → assembly.
//! Diagnostics are collected into a `ConsolidationReport` alongside the output.

pub mod algorithms;
pub mod engine;
pub mod monitoring;
pub mod pipeline;

pub use engine::ConsolidationEngine;
pub use pipeline::{ConsolidationOutput, PipelineInput};
