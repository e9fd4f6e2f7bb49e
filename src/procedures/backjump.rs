//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) level to some previous (lower) level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and [analysis](crate::procedures::analysis) produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions from level *l* down to level *l - i* are undone.
//!
//! A backjump to level zero is also made after each solve, so the permanent state of a context is only ever the assignments of level zero.
//! As assumptions are made on levels above zero, this is what keeps assumptions from outliving the solve they were made for.
//!
//! Passing a target level greater than the current level is safe, and nothing will happen.
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backjumping.

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        if target < self.atom_db.level() {
            log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.atom_db.level());
            self.atom_db.backjump(target);
        }
    }

    /// Resets all decisions (and assumptions) and consequences of those choices.
    pub fn clear_decisions(&mut self) {
        self.backjump(0);
    }
}
