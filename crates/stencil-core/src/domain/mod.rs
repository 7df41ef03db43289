//! Core domain layer for Stencil.
//!
//! Pure business logic with no I/O: the template/placeholder model, target
//! file descriptors, and the placeholder rendering engine. Filesystem and
//! console concerns are reached only through the ports in
//! `crate::application::ports`.

pub mod language;
pub mod render;
pub mod target;
pub mod template;

pub use language::Language;
pub use render::{Placeholders, UnknownTokens, render};
pub use target::{Mode, TargetFile};
pub use template::{Template, TemplateKey};
