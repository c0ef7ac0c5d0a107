//! Service layer containing filtering orchestration.

mod adapter;
mod engine;
mod filter_service;

pub use adapter::{Format, FormatAdapter};
pub use engine::FilterEngine;
pub use filter_service::{FilterService, RunSummary};
