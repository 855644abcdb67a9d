//! Construction Errors
//!
//! The cache has exactly one failure mode, and it is only reachable at
//! construction time: asking for a zero-entry cache. Every other operation
//! is total; a miss or an absent key is a normal outcome reported through
//! `Option` or a `bool`, not an error.

use thiserror::Error;

/// Errors returned when building a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested entry limit was zero.
    #[error("limit must be positive")]
    InvalidLimit,
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::format;

    #[test]
    fn test_invalid_limit_display() {
        assert_eq!(format!("{}", Error::InvalidLimit), "limit must be positive");
    }
}
