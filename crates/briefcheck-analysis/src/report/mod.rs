//! Final report assembly.

pub mod aggregator;

pub use aggregator::{build_report, ReportExt};
