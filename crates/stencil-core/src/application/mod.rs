//! Application layer: ports and the scaffolding orchestrator.

pub mod dispatch;
pub mod guard;
pub mod ports;
pub mod scaffold;

pub use dispatch::CommandArgs;
pub use guard::{OverwriteGuard, WriteDecision};
pub use scaffold::{
    DebuggerOptions, MainFileOptions, PackageOptions, ScaffoldReport, Scaffolder,
};
