//! Common types and utilities shared across btreekit.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`BTreeConfig`]
//! - Error types
//! - Identifiers and sizing ([`NodeId`], [`BranchingFactor`])

mod branching;
pub mod config;
pub mod error;
mod node_id;

pub use branching::BranchingFactor;
pub use config::{BTreeConfig, SearchStrategy};
pub use error::{Error, Result};
pub use node_id::NodeId;
