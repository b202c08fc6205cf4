use std::fmt;

/// A frontier container was accessed while empty.
///
/// Correct algorithm usage never triggers this: the search loops test
/// emptiness before removing. It is surfaced as an error (not a panic) so
/// a contract violation propagates to the caller instead of being
/// swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainer;

impl fmt::Display for EmptyContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container accessed while empty")
    }
}

impl std::error::Error for EmptyContainer {}
