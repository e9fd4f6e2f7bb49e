//! Generic structures, not tied to the solver.

pub mod index_heap;
pub mod luby;
pub mod random;
