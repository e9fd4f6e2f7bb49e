//! Assumptions
//!
//! # Overview
//!
//! Assumptions are given to a [solve](crate::procedures::solve), and hold for that solve only.
//!
//! Each assumption is made on a fresh level above zero, before any decision, and in the order given:
//! - If an assumption is already true on the current valuation, an empty level is opened in its place, so the level of each assumption matches its index.
//! - If an assumption has no value, the assumption is assigned on a fresh level, as a decision would be.
//! - If an assumption is false, the formula is unsatisfiable under the assumptions, and the assumptions responsible are found with [analyze_final](GenericContext::analyze_final).
//!
//! As every level above zero is cleared at the end of a solve, assumptions never alter the permanent state of a context.
//! Still, clauses learnt while assumptions are in place are consequences of the formula alone, and are kept.

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Notes the assumptions responsible for `assumption` being false on the current valuation, including `assumption`.
    ///
    /// The reasons of the negation of `assumption` are followed back through the trail, and each assignment without a reason found on some level above zero is an assumption.
    pub fn analyze_final(&mut self, assumption: CLiteral) {
        self.failed_assumptions.clear();
        self.failed_assumptions.push(assumption);

        if let None | Some(0) = self.atom_db.level_of(assumption.atom()) {
            log::trace!(target: targets::ANALYSIS, "{assumption} is false on level zero");
            return;
        }

        self.resolution_buffer.refresh(self.atom_db.count());
        self.resolution_buffer.mark(assumption.atom());

        let start = self
            .atom_db
            .trail
            .level_indicies
            .first()
            .copied()
            .unwrap_or(0);

        for index in (start..self.atom_db.trail.literals.len()).rev() {
            let literal = self.atom_db.trail.literals[index];
            let atom = literal.atom();
            if !self.resolution_buffer.is_seen(atom) {
                continue;
            }

            match self.atom_db.reason_of(atom) {
                // Levels of assumptions precede any decision, so this is an assumption.
                None => self.failed_assumptions.push(literal),

                Some(key) => {
                    let Ok(reason) = self.clause_db.get(&key) else {
                        log::error!(target: targets::ANALYSIS, "Missing reason {key} for {literal}");
                        continue;
                    };
                    for other in reason {
                        let other_atom = other.atom();
                        if other_atom != atom
                            && !self.resolution_buffer.is_seen(other_atom)
                            && self.atom_db.level_of(other_atom).is_some_and(|level| level > 0)
                        {
                            self.resolution_buffer.mark(other_atom);
                        }
                    }
                }
            }
        }

        self.resolution_buffer.clear();
        log::debug!(target: targets::ANALYSIS, "{} failed assumptions", self.failed_assumptions.len());
    }
}
