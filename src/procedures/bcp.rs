/*!
Boolean constraint propagation.

# Overview

Propagation of a literal *l* inspects each clause watching -*l*, as those clauses may now assert some literal, or conflict with the valuation.

- For binary clauses, the other literal of the clause is stored with the watch:
  + If the other literal is true, nothing happens.
  + If the other literal has no value, it is asserted.
  + If the other literal is false, the clause conflicts with the valuation.
- For long clauses, the watches of the clause are revised with [update_watch](crate::db::clause::db_clause::DBClause::update_watch):
  + If some other literal is not false, it replaces -*l* as a watched literal.
  + Otherwise, the other watched literal is asserted, or the clause conflicts with the valuation.

Binary clauses are inspected first, as a conflict from a binary clause is found without access to the clause database.

A conflict is returned as an [error](BCPError::Conflict), with the key of the conflicting clause.

[propagate](GenericContext::propagate) applies BCP to every assignment on the trail which has not been propagated, until either every assignment has been propagated or a conflict is found.

# Watch lists

Long watch lists are taken from the watch database during BCP, and restored after.
Keys to removed clauses are dropped from the list when found.
*/

use crate::{
    context::GenericContext,
    db::clause::db_clause::WatchStatus,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::BCPError,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates every assignment on the trail which has not been propagated.
    pub fn propagate(&mut self) -> Result<(), BCPError> {
        while let Some(literal) = self.atom_db.trail.next_to_propagate() {
            self.bcp(literal)?;
        }
        Ok(())
    }

    /// Propagates `literal`, which has been assigned.
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), BCPError> {
        // Binary clauses.
        for index in 0..self.watches.watchers_binary(&literal).len() {
            let watch = self.watches.watchers_binary(&literal)[index];

            match self.atom_db.value_of_literal(&watch.other) {
                Some(true) => {}
                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Conflict on {literal} with {}", watch.key);
                    return Err(BCPError::Conflict(watch.key));
                }
                None => {
                    self.atom_db.assign(watch.other, Some(watch.key));
                }
            }
        }

        // Long clauses.
        let false_literal = literal.negate();
        let mut list = std::mem::take(self.watches.watchers_long(&literal));
        let mut kept = 0;
        let mut result = Ok(());

        let mut index = 0;
        while index < list.len() {
            let key = list[index];
            index += 1;

            let Ok(clause) = self.clause_db.get_long_mut(&key) else {
                log::trace!(target: targets::PROPAGATION, "Dropped watch of {key}");
                continue;
            };

            match clause.update_watch(false_literal, &self.atom_db) {
                WatchStatus::Satisfied => {
                    list[kept] = key;
                    kept += 1;
                }

                WatchStatus::Moved(watched) => {
                    if watched.atom() == literal.atom() {
                        result = Err(BCPError::CorruptWatch);
                        list[kept] = key;
                        kept += 1;
                        break;
                    }
                    self.watches.watch_long(&watched, key);
                }

                WatchStatus::Asserts(asserted) => {
                    list[kept] = key;
                    kept += 1;
                    self.atom_db.assign(asserted, Some(key));
                }

                WatchStatus::Conflict => {
                    list[kept] = key;
                    kept += 1;
                    log::trace!(target: targets::PROPAGATION, "Conflict on {literal} with {key}");
                    result = Err(BCPError::Conflict(key));
                    break;
                }
            }
        }

        // Keys after an early break are kept as is.
        while index < list.len() {
            list[kept] = list[index];
            kept += 1;
            index += 1;
        }
        list.truncate(kept);

        *self.watches.watchers_long(&literal) = list;
        result
    }
}
