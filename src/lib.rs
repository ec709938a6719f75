//! Configuration loading for the stencil code-generation pipeline
//!
//! This crate turns a hierarchical configuration document (global input and
//! output directories, named commands, entries with input paths, free-form
//! parameters and rendered outputs) into a validated, strongly-typed
//! [`Config`], or fails with one precise diagnostic naming the offending key
//! and the exact type mismatch. Loading is fail-fast and single-pass; the
//! first structural problem aborts the load.

pub mod config;
pub mod entry;
pub mod error;
pub mod loader;
pub mod template;
pub mod validation;
pub mod value;

// Re-export main types
pub use config::Config;
pub use entry::EntrySpec;
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use template::{OutputSpec, TemplateRef};
pub use validation::Validatable;
