//! Application layer - Use cases and orchestration

pub mod rewrite;

pub use rewrite::{FileOutcome, FileRecord, RewriteReport, RewriteService};
