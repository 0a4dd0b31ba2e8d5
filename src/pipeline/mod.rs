// file: src/pipeline/mod.rs
// description: request level summary pipeline exports
// reference: internal module structure

pub mod orchestrator;

pub use orchestrator::{SummaryOutcome, SummaryRequest, SummaryService};
