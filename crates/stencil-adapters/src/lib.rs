//! Infrastructure adapters for Stencil.
//!
//! This crate implements the ports defined in `stencil_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod confirm;
pub mod filesystem;
pub mod template_source;

// Re-export commonly used adapters
pub use confirm::{AlwaysConfirm, PresetConfirmation, StdinConfirmation};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_source::{BuiltinTemplateSource, DirTemplateSource};
