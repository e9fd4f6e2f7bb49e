//! Literals are atoms paired with a (boolean) polarity.
//!
//! Internally, a literal is anything with methods for returning an atom and a polarity, and the canonical representation is [CLiteral].
//!
//! ```rust
//! # use burrow_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(-literal, CLiteral::new(79, false));
//! ```
//!
//! Literals given to (and returned from) a context are wrapped as a [Lit], which pairs a canonical literal with the tag of the context the literal belongs to.
//! See [lit] for details.

mod lit;
pub use lit::Lit;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in integer form, with sign indicating polarity.
    fn as_int(&self) -> i64;
}

/// The canonical representation of a literal, as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CLiteral {
    atom: Atom,
    polarity: bool,
}

impl CLiteral {
    /// A literal, usable in const contexts.
    pub const fn fresh(atom: Atom, polarity: bool) -> Self {
        CLiteral { atom, polarity }
    }
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral { atom, polarity }
    }

    fn negate(&self) -> Self {
        CLiteral {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn as_int(&self) -> i64 {
        match self.polarity {
            true => self.atom as i64,
            false => -(self.atom as i64),
        }
    }
}

impl std::ops::Neg for CLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Ordered by atom and then polarity, with negative polarity first.
impl PartialOrd for CLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.atom
            .cmp(&other.atom)
            .then(self.polarity.cmp(&other.polarity))
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}
