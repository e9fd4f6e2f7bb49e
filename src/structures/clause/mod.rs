//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use burrow_sat::structures::literal::{CLiteral, Literal};
//! # use burrow_sat::structures::clause::Clause;
//! let clause = vec![CLiteral::new(3, true), CLiteral::new(1, false), CLiteral::new(2, true)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "3 -1 2 0");
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::structures::literal::CLiteral;

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        if zero {
            the_string += "0";
        } else {
            the_string.pop();
        }
        the_string
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        self.as_slice().as_dimacs(zero)
    }

    fn size(&self) -> usize {
        self.len()
    }
}
