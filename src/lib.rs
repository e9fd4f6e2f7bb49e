//! An incremental conflict-driven clause-learning engine for determining the satisfiability of boolean formulas.
//!
//! burrow_sat accepts a growing formula in conjunctive normal form, together with gates and at-most-one constraints encoded as clauses, and decides the satisfiability of the formula under optional assumptions which hold for a single solve.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! - Literals are issued by a context with [fresh_literal](context::GenericContext::fresh_literal), and carry the tag of the context which issued them, alongside the constant literals [TRUE](structures::literal::Lit::TRUE) and [FALSE](structures::literal::Lit::FALSE) shared by every context.
//! - Clauses are added with [add_clause](context::GenericContext::add_clause), and higher level constructs through the [encoders].
//! - A [solve](procedures::solve) determines satisfiability, after which the value of a literal may be read from the model found.
//! - A context releases its resources on [dispose](context::GenericContext::dispose), and a [pool] manages contexts by key.
//!
//! Internally, a solve is viewed in terms of a handful of databases:
//! - A formula is stored in a clause database.
//! - A valuation (and the trail of assignments) is stored in an atom database.
//! - Watches from literals to clauses are stored in a watch database.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Example
//!
//! ```rust
//! # use burrow_sat::context::Context;
//! # use burrow_sat::structures::literal::Lit;
//! let mut context = Context::default();
//! let [a, b, c, d] = [0; 4].map(|_| context.fresh_literal().unwrap());
//!
//! assert!(context.add_clause(&[a]).is_ok());
//! assert!(context.add_clause(&[a, -b]).is_ok());
//! assert!(context.add_clause(&[-a, b, c]).is_ok());
//! assert!(context.add_clause(&[-a, b, c, -d]).is_ok());
//! assert_eq!(context.solve(&[]), Ok(true));
//!
//! assert!(context.add_clause(&[a, -b, -c, d]).is_ok());
//! assert_eq!(context.solve(&[]), Ok(true));
//!
//! assert_eq!(context.literals().unwrap().len(), 5);
//! assert_eq!(context.solve(&[Lit::TRUE, Lit::FALSE]), Ok(false));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, with a variety of targets to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the clause database](crate::db::clause) can be filtered with `RUST_LOG=clause_db …` or,
//! - Logs of reductions can be found with `RUST_LOG=reduction=debug …`

#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod encoders;
pub mod pool;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;

#[doc(hidden)]
pub mod resolution_buffer;

/// The name and version of the engine, e.g. `burrow_sat-0.1.0`.
pub fn engine_version() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION"))
}
