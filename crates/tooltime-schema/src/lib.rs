//! Shared value types for `ToolTime`.
//!
//! Money, tool codes and tool types are used by both the pricing engine and
//! the CLI, so they live here with little more than `serde` underneath.

pub mod money;
pub mod types;

// Re-exports
pub use money::Cents;
pub use types::*;
