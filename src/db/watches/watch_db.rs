//! The watch lists of a single atom.

use crate::{db::ClauseKey, structures::literal::CLiteral};

/// A binary clause watching some literal, together with the other literal of the clause.
///
/// As the other literal is stored with the watch, propagation of a binary clause never requires access to the clause database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryWatch {
    pub other: CLiteral,
    pub key: ClauseKey,
}

/// Watch lists of an atom, split by polarity of the watched literal and length of the watching clause.
#[derive(Default)]
pub struct WatchDB {
    pub positive_binary: Vec<BinaryWatch>,
    pub negative_binary: Vec<BinaryWatch>,
    pub positive_long: Vec<ClauseKey>,
    pub negative_long: Vec<ClauseKey>,
}
