//! Shared types, error model, and configuration for titlepatch.
//!
//! This crate is the foundation depended on by the other titlepatch crates.
//! It provides:
//! - [`TitlePatchError`] — the unified error type
//! - Run result types ([`FileOutcome`], [`PatchReport`], [`FileEntry`])
//! - Configuration ([`AppConfig`], [`PatchOptions`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DEFAULT_EXTENSION, DEFAULT_TARGET_DIR, DefaultsConfig, PatchOptions, config_dir,
    config_file_path, init_config, init_config_at, load_config, load_config_from,
};
pub use error::{Result, TitlePatchError};
pub use types::{FileEntry, FileOutcome, PatchReport};
