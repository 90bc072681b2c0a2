//! Common types shared by the document-backed aggregates

pub mod timestamp;

// Re-exports
pub use timestamp::DocTimestamp;
