//! Error types for btreekit.

use thiserror::Error;

use crate::common::NodeId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All recoverable errors in btreekit.
///
/// Lookups and inserts never fail: a broken precondition inside the tree is a
/// bug and panics. The only reportable conditions are a bad construction
/// parameter and a structural check that found a broken invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The branching factor is below the minimum of 2.
    ///
    /// With `B = 1` a non-root node would have to hold zero keys.
    #[error("Invalid branching factor: {0} (must be >= 2)")]
    InvalidBranchingFactor(usize),

    /// [`BTree::validate`](crate::BTree::validate) found a broken invariant.
    #[error("Invariant violated at {node}: {reason}")]
    InvariantViolation {
        /// The node where the violation was detected.
        node: NodeId,
        /// Human readable description.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invariant(node: NodeId, reason: impl Into<String>) -> Self {
        Error::InvariantViolation {
            node,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidBranchingFactor(1);
        assert_eq!(format!("{}", err), "Invalid branching factor: 1 (must be >= 2)");

        let err = Error::invariant(NodeId::new(3), "keys out of order");
        assert_eq!(
            format!("{}", err),
            "Invariant violated at Node(3): keys out of order"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_std_error(_: &dyn std::error::Error) {}
        takes_std_error(&Error::InvalidBranchingFactor(0));
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
