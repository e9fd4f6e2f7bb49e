//! Abstract structures: atoms, literals, clauses, and valuations.
//!
//! Each structure is given as a trait with a canonical implementation, with the exception of atoms which are given as a type.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
