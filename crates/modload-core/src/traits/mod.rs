//! Capability traits at the seams of the pipeline: module resolution and
//! failure diagnostics. Both are injected, never hard-wired.

pub mod resolver;
pub mod sink;

pub use resolver::{LoadOutcome, ModuleResolver};
pub use sink::{CollectingSink, DiagnosticSink, LoadFailure, TracingSink};
