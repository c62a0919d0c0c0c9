//! Directory pass for titlepatch.
//!
//! Ties file enumeration ([`scan`]) and the pure header logic from
//! `titlepatch-markdown` into the end-to-end [`patch_directory`] workflow.

pub mod pipeline;
pub mod scan;

pub use pipeline::{ProgressReporter, SilentProgress, patch_directory};
