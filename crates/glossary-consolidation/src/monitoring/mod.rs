//! Run diagnostics: category breakdown, change tracking, and the consolidation report.

pub mod breakdown;
pub mod changes;
pub mod report_builder;

pub use breakdown::category_breakdown;
pub use changes::compute_changes;
pub use report_builder::{build_report, RunStats};
