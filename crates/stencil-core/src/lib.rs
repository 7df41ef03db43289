//! Stencil Core - domain and application layers.
//!
//! This crate contains everything the scaffolding tool knows that is not
//! I/O: the template and placeholder model, the overwrite-guard policy, the
//! per-command composition logic, and the ports (traits) that the
//! infrastructure crate (`stencil-adapters`) implements.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stencil-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            Scaffolder                   │
//! │  (main_file / package_init /            │
//! │   debugger_config / package_create)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Ports (Traits)                   │
//! │ (TemplateSource, Filesystem,            │
//! │  Confirmation)                          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stencil-adapters (Infrastructure)    │
//! │ (DirTemplateSource, LocalFilesystem,    │
//! │  StdinConfirmation, test doubles)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stencil_core::{
//!     application::{MainFileOptions, Scaffolder},
//!     domain::Language,
//! };
//!
//! // Adapters are injected; see stencil-adapters for implementations.
//! # fn demo(source: Box<dyn stencil_core::application::ports::TemplateSource>,
//! #         fs: Box<dyn stencil_core::application::ports::Filesystem>,
//! #         confirm: Box<dyn stencil_core::application::ports::Confirmation>)
//! #         -> stencil_core::error::StencilResult<()> {
//! let scaffolder = Scaffolder::new(Language::Python, ".", source, fs, confirm);
//! let report = scaffolder.main_file(&MainFileOptions {
//!     name: "app".into(),
//!     src_dir: Some("lib".into()),
//! })?;
//! println!("wrote {} file(s)", report.written.len());
//! # Ok(())
//! # }
//! ```

// Domain layer (pure, no I/O)
pub mod domain;

// Application layer (orchestration, ports)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CommandArgs, DebuggerOptions, MainFileOptions, PackageOptions, ScaffoldReport, Scaffolder,
        ports::{Confirmation, Filesystem, TemplateSource},
    };
    pub use crate::domain::{
        Language, Mode, Placeholders, TargetFile, Template, TemplateKey, UnknownTokens,
    };
    pub use crate::error::{StencilError, StencilResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
