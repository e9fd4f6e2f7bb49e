/*!
Analysis of a conflict, to learn a clause.

# Overview

Given a clause which conflicts with the valuation, analysis applies resolution between the clause and the reasons of its literals (in reverse order of assignment) until the resolvent contains exactly one literal from the current level.
This is the *first unique implication point* (1-UIP) clause.

Each resolution step is on a literal of the current level, so only the count of current level literals in the resolvent needs to be tracked, with any literal from a lower level noted as part of the learnt clause as it is found.
Literals on level zero are omitted, as these are false on every valuation.

The learnt clause is returned with the asserted (negated UIP) literal at index 0, and a literal from the highest remaining level at index 1, ready to be watched.
The level of the literal at index 1 is the non-chronological [backjump](crate::procedures::backjump) level of the clause.

# Minimization

With [MinimizationCriteria::Recursive](crate::config::MinimizationCriteria::Recursive), a literal is removed from the learnt clause if the literal is implied by the other literals of the clause.
That is, if each literal of the reason for the (negated) literal is either in the clause, on level zero, or recursively implied.

Levels are abstracted to a bitset, so a search which would reach a level without a literal in the clause is abandoned early.
See [Minimizing Learned Clauses](https://doi.org/10.1007/978-3-642-02777-2_23) for details.

# VSIDS

Atoms are bumped as determined by the [VSIDS](crate::config::vsids::VSIDS) variant, and addition clauses used during resolution have their activity bumped.
*/

use crate::{
    config::{vsids::VSIDS, MinimizationCriteria, LBD},
    context::GenericContext,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{AnalysisError, ErrorKind},
};

/// A clause learnt from a conflict.
pub struct Learnt {
    /// The clause, with the asserted literal at index 0, and a literal of the backjump level at index 1 (if any).
    pub clause: CClause,

    /// The level to backjump to before asserting the clause.
    pub level: LevelIndex,

    /// The LBD of the clause.
    pub lbd: LBD,
}

/// An abstraction of a level to a bit, for quick (approximate) set membership.
fn abstract_level(level: LevelIndex) -> u32 {
    1 << (level & 31)
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Learns a clause from `conflict`, a clause which conflicts with the valuation on a level above zero.
    pub fn conflict_analysis(&mut self, conflict: ClauseKey) -> Result<Learnt, ErrorKind> {
        let current_level = self.atom_db.level();
        let vsids = self.config.vsids_variant.value;

        self.resolution_buffer.refresh(self.atom_db.count());

        // Index 0 is reserved for the asserted literal.
        let mut clause: CClause = vec![CLiteral::new(0, true)];
        let mut used_keys = vec![conflict];

        let mut unresolved: usize = 0;
        let mut key = conflict;
        let mut pivot: Option<CLiteral> = None;
        let mut trail_index = self.atom_db.trail.literals.len();

        loop {
            let reason = self.clause_db.get(&key)?;

            for literal in reason {
                if pivot.is_some_and(|pivot| pivot.atom() == literal.atom()) {
                    continue;
                }
                let atom = literal.atom();
                let Some(level) = self.atom_db.level_of(atom) else {
                    log::error!(target: targets::ANALYSIS, "{literal} of {key} has no value");
                    return Err(AnalysisError::NoAssertion.into());
                };

                if self.resolution_buffer.is_seen(atom) || level == 0 {
                    continue;
                }

                self.resolution_buffer.mark(atom);
                if vsids == VSIDS::MiniSAT {
                    self.atom_db.bump_activity(atom);
                }

                if level >= current_level {
                    unresolved += 1;
                } else {
                    clause.push(*literal);
                }
            }

            // The next literal to resolve on, from the trail.
            let next = loop {
                if trail_index == 0 {
                    log::error!(target: targets::ANALYSIS, "Exhausted the trail during analysis");
                    return Err(AnalysisError::NoAssertion.into());
                }
                trail_index -= 1;
                let candidate = self.atom_db.trail.literals[trail_index];
                if self.resolution_buffer.is_seen(candidate.atom()) {
                    break candidate;
                }
            };

            self.resolution_buffer.seen[next.atom() as usize] = false;
            unresolved = unresolved.saturating_sub(1);
            pivot = Some(next);

            if unresolved == 0 {
                break;
            }

            match self.atom_db.reason_of(next.atom()) {
                Some(reason) => {
                    key = reason;
                    used_keys.push(reason);
                }
                None => {
                    log::error!(target: targets::ANALYSIS, "Resolution stalled at {next}");
                    return Err(AnalysisError::NoAssertion.into());
                }
            }
        }

        let Some(uip) = pivot else {
            return Err(AnalysisError::EmptyResolution.into());
        };
        clause[0] = uip.negate();

        if self.config.minimization.value == MinimizationCriteria::Recursive {
            self.minimize(&mut clause);
        }

        if vsids == VSIDS::Chaff {
            for literal in &clause {
                self.atom_db.bump_activity(literal.atom());
            }
        }

        for key in &used_keys {
            self.clause_db.bump_activity(key);
        }

        self.resolution_buffer.clear();

        // A literal of the highest remaining level to index 1.
        let mut level = 0;
        for index in 1..clause.len() {
            let literal_level = self.atom_db.level_of(clause[index].atom()).unwrap_or(0);
            if literal_level > level {
                level = literal_level;
                clause.swap(1, index);
            }
        }

        let lbd = self.lbd(&clause);
        log::trace!(target: targets::ANALYSIS, "Learnt {} literals, backjump to {level}", clause.len());

        Ok(Learnt { clause, level, lbd })
    }

    /// Removes literals implied by the rest of the clause, from index 1.
    fn minimize(&mut self, clause: &mut CClause) {
        let levels = clause[1..].iter().fold(0, |levels, literal| {
            levels | abstract_level(self.atom_db.level_of(literal.atom()).unwrap_or(0))
        });

        let mut kept = 1;
        for index in 1..clause.len() {
            let literal = clause[index];
            let redundant = self.atom_db.reason_of(literal.atom()).is_some()
                && self.literal_redundant(literal, levels);
            if !redundant {
                clause[kept] = literal;
                kept += 1;
            }
        }

        if kept < clause.len() {
            log::trace!(target: targets::ANALYSIS, "Minimized {} literals", clause.len() - kept);
        }
        clause.truncate(kept);
    }

    /// Whether `literal` (from a learnt clause, with a reason) is implied by the other literals of the clause.
    fn literal_redundant(&mut self, literal: CLiteral, levels: u32) -> bool {
        let checkpoint = self.resolution_buffer.to_clear.len();
        self.resolution_buffer.stack.clear();
        self.resolution_buffer.stack.push(literal);

        while let Some(top) = self.resolution_buffer.stack.pop() {
            let Some(key) = self.atom_db.reason_of(top.atom()) else {
                self.resolution_buffer.clear_from(checkpoint);
                return false;
            };
            let Ok(reason) = self.clause_db.get(&key) else {
                self.resolution_buffer.clear_from(checkpoint);
                return false;
            };

            for other in reason {
                let atom = other.atom();
                if atom == top.atom() || self.resolution_buffer.is_seen(atom) {
                    continue;
                }
                let level = self.atom_db.level_of(atom).unwrap_or(0);
                if level == 0 {
                    continue;
                }

                if self.atom_db.reason_of(atom).is_some() && abstract_level(level) & levels != 0 {
                    self.resolution_buffer.mark(atom);
                    self.resolution_buffer.stack.push(*other);
                } else {
                    self.resolution_buffer.clear_from(checkpoint);
                    return false;
                }
            }
        }

        true
    }

    /// The count of distinct levels among the literals of `clause`, saturating at the maximum [LBD].
    pub fn lbd(&self, clause: &[CLiteral]) -> LBD {
        let mut levels = clause
            .iter()
            .filter_map(|literal| self.atom_db.level_of(literal.atom()))
            .collect::<Vec<_>>();
        levels.sort_unstable();
        levels.dedup();
        LBD::try_from(levels.len()).unwrap_or(LBD::MAX)
    }
}
