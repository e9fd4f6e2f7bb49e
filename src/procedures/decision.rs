/*!
Methods for choosing the value of an atom.

# Overview

The core decision procedure is straightforward:
- Search through all atoms in the context for an atom which is not assigned a value, and assign either true or false.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.

# Heuristics

## Activity

Atoms are selected by activity, and the [atom database](crate::db::atom) stores atoms without a value on a max activity heap for quick access to the most active atom without a value.
As atoms are only returned to the heap on a backjump, some atoms popped from the heap may have a value, and are skipped.

## Phase saving

If phase saving is enabled and a chosen atom was previously valued *v* the atom is again valued *v*.
An atom always has a 'previous' value, initialised randomly via [Config::polarity_lean](crate::config::Config::polarity_lean).

## Randomness

With probability [random_decision_bias](crate::config::Config::random_decision_bias) an atom without a value is chosen at random.
*/

use rand::{seq::IteratorRandom, Rng};

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// A literal to assign on a fresh level.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Chooses an atom without a value and a value for the atom.
    ///
    /// The decision is not assigned.
    pub fn make_decision(&mut self) -> DecisionOk {
        // Takes ownership of rng to satisfy the borrow checker.
        let mut rng = std::mem::take(&mut self.rng);
        let chosen_atom = self.atom_without_value(&mut rng);
        self.rng = rng;

        match chosen_atom {
            Some(chosen_atom) => {
                self.counters.total_decisions += 1;

                let decision = match self.config.phase_saving.value {
                    true => CLiteral::new(chosen_atom, self.atom_db.previous_value_of(chosen_atom)),
                    false => {
                        let random_value = self.rng.random_bool(self.config.polarity_lean.value);
                        CLiteral::new(chosen_atom, random_value)
                    }
                };
                log::trace!(target: targets::DECISION, "Decision {decision}");

                DecisionOk::Literal(decision)
            }
            None => DecisionOk::Exhausted,
        }
    }

    /// An atom which has no value on the current valuation, either by random decision or by most activity.
    pub fn atom_without_value(&mut self, rng: &mut impl Rng) -> Option<Atom> {
        match rng.random_bool(self.config.random_decision_bias.value) {
            true => self.atom_db.valuation().unvalued_atoms().choose(rng),
            false => {
                while let Some(atom) = self.atom_db.heap_pop_most_active() {
                    if self.atom_db.value_of(atom).is_none() {
                        return Some(atom);
                    }
                }
                self.atom_db.valuation().unvalued_atoms().next()
            }
        }
    }
}
