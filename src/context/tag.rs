//! Tags distinguishing contexts, carried by each [Lit](crate::structures::literal::Lit).
//!
//! Tags are issued from a process wide counter, and so are unique for the life of a process.
//! This counter is the only state shared between contexts.

use std::sync::atomic::{AtomicU64, Ordering};

/// The next tag to issue.
static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

/// A tag identifying a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextTag(u64);

impl ContextTag {
    /// The tag of the constant literals, valid in every context.
    pub const UNIVERSAL: ContextTag = ContextTag(0);

    /// A tag distinct from every other tag issued.
    pub fn fresh() -> Self {
        ContextTag(NEXT_TAG.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ContextTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
