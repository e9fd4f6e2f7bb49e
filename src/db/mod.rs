//! Databases for holding information relevant to a solve.
//!
//! - [The clause database](crate::db::clause)
//!   + A collection of clauses, each indexed by a clause key. \
//!     From an external perspective there are two important kinds of clause:
//!     * Original clauses, added to the context by a client (directly, or through some encoding). \
//!       The collection of original clauses is the formula whose satisfiability may be determined.
//!     * Addition clauses, learnt during a solve. \
//!       Every addition clause is a consequence of the original clauses, and so may be kept between solves.
//! - [The atom database](crate::db::atom)
//!   + Properties of atoms: the valuation, decision levels, reasons, saved phases, and activity.
//!   + The [trail] of assignments.
//! - [Watch lists](crate::db::watches)
//!   + For each literal, the clauses watching the literal.

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;
pub mod watches;

/// The index of a decision level.
pub type LevelIndex = u32;
