//! Command-line workflow shared by the binary and integration tests

pub mod orchestration;

pub use orchestration::{run_resolve_workflow, ResolveWorkflowArgs};
