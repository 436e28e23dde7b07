//! Command implementations for toggler-cli

pub mod apply;
pub mod process;
pub mod run;

pub use apply::{Summary, WriteMode};
pub use process::run_process;
pub use run::{run_list_targets, run_targets};
