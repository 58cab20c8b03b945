//! Source and baseline loaders reading JSON files from disk.

pub mod baseline_loader;
pub mod directory_loader;

pub use baseline_loader::JsonBaselineLoader;
pub use directory_loader::DirectorySourceLoader;
