//! Determines the satisfiability of the formula in a context, under some assumptions.
//!
//! # Overview
//!
//! Solving follows the conflict-driven clause-learning algorithm:
//!
//! ```none
//!           +---------------------------+
//!   +-------| assume, or make_decision  |
//!   |       +---------------------------+
//!   |               ⌃
//!   |               | if there is no conflict, and the valuation is partial
//!   |               |
//!   |               |              +-----> satisfiable, if the valuation is complete
//!   ⌄   +--------------------+     |
//! --+-->|     propagate      |-----+
//!   ⌃   +--------------------+     |
//!   |               |              +-----> unsatisfiable, on a conflict at level zero, or a false assumption
//!   |               |
//!   |               | on a conflict, analyse and learn a clause
//!   |               ⌄
//!   |           +----------+
//!   +-----------| backjump |
//!               +----------+
//! ```
//!
//! Around this loop:
//! - On each iteration the [terminate callback](crate::context::callbacks) and the time limit are checked, and a solve which is stopped reports [Unknown](Report::Unknown).
//! - After each conflict the conflict limit is checked, and a restart (with a reduction of learnt clauses) is made if due.
//!
//! At the end of a solve, every level above zero is cleared.
//! So, the permanent state of the context is the formula, any clauses learnt, and any assignments made on level zero.
//!
//! # Results
//!
//! - A satisfiable solve stores a snapshot of the valuation, available through [value](GenericContext::value) until the formula is revised.
//! - An unsatisfiable solve notes the [failed assumptions](GenericContext::failed_assumptions), if any.
//!   If the conflict did not depend on any assumption, the formula is noted as inconsistent, and each later solve is unsatisfiable without search.
//!
//! # Example
//!
//! ```rust
//! # use burrow_sat::context::Context;
//! # use burrow_sat::reports::Report;
//! let mut the_context = Context::default();
//! let p = the_context.fresh_literal().unwrap();
//! let q = the_context.fresh_literal().unwrap();
//!
//! assert!(the_context.add_clause(&[-p, q]).is_ok());
//! assert!(the_context.add_clause(&[p, -q]).is_ok());
//!
//! assert_eq!(the_context.solve_given(&[p]), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value(q), Ok(true));
//!
//! assert_eq!(the_context.solve_given(&[p, -q]), Ok(Report::Unsatisfiable));
//! assert_eq!(the_context.failed_assumptions().unwrap().len(), 2);
//!
//! assert_eq!(the_context.solve_given(&[]), Ok(Report::Satisfiable));
//! ```
//!
//! # Literature
//!
//! The loop follows [An Extensible SAT-solver](https://doi.org/10.1007/978-3-540-24605-3_37), including the treatment of assumptions.

use crate::{
    context::{ContextState, GenericContext},
    db::clause::ClauseSource,
    misc::log::targets::{self},
    procedures::{analysis::Learnt, decision::DecisionOk},
    reports::Report,
    structures::literal::{CLiteral, Lit},
    types::err::{BCPError, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula, with each of `assumptions` made for this solve only.
    ///
    /// Ok(true) if satisfiable, and Ok(false) if unsatisfiable.
    /// A solve stopped by a callback or limit is an [Interrupted](ErrorKind::Interrupted) error.
    pub fn solve(&mut self, assumptions: &[Lit]) -> Result<bool, ErrorKind> {
        match self.solve_given(assumptions)? {
            Report::Satisfiable => Ok(true),
            Report::Unsatisfiable => Ok(false),
            Report::Unknown => Err(ErrorKind::Interrupted),
        }
    }

    /// Determines the satisfiability of the formula, with each of `assumptions` made for this solve only, as a [Report].
    pub fn solve_given(&mut self, assumptions: &[Lit]) -> Result<Report, ErrorKind> {
        self.ensure_usable()?;
        let assumptions = self.canonical_literals(assumptions)?;

        self.model = None;
        self.failed_assumptions.clear();
        self.counters.solves += 1;
        self.counters.solve_conflicts = 0;

        log::debug!(target: targets::CONTEXT, "Solve {} of context {} with {} assumptions", self.counters.solves, self.tag, assumptions.len());

        if self.inconsistent {
            self.state = ContextState::Unsatisfiable;
            return Ok(Report::Unsatisfiable);
        }

        self.state = ContextState::Solving;
        self.clear_decisions();
        self.resolution_buffer.refresh(self.atom_db.count());

        let result = self.search(&assumptions);
        self.clear_decisions();

        match result {
            Ok(state) => {
                self.state = state;
                log::debug!(target: targets::CONTEXT, "Solve {}: {}", self.counters.solves, self.state);
                Ok(self.report())
            }
            Err(e) => {
                self.state = ContextState::Unknown;
                self.note_error(&e);
                Err(e)
            }
        }
    }

    /// The CDCL loop, returning the state a context should take on completion.
    fn search(&mut self, assumptions: &[CLiteral]) -> Result<ContextState, ErrorKind> {
        let total_time = std::time::Instant::now();

        loop {
            self.counters.total_iterations += 1;
            self.counters.time = total_time.elapsed();

            if self.check_callback_terminate() || self.time_limit_interrupt() {
                log::info!(target: targets::CONTEXT, "Solve stopped after {:?}", self.counters.time);
                return Ok(ContextState::Unknown);
            }

            match self.propagate() {
                Ok(()) => {}

                Err(BCPError::Conflict(key)) => {
                    self.counters.total_conflicts += 1;
                    self.counters.solve_conflicts += 1;
                    self.counters.fresh_conflicts += 1;

                    if self.atom_db.level() == 0 {
                        log::info!(target: targets::CONTEXT, "Conflict on level zero, context {} is inconsistent", self.tag);
                        self.inconsistent = true;
                        return Ok(ContextState::Unsatisfiable);
                    }

                    let learnt = self.conflict_analysis(key)?;
                    self.backjump(learnt.level);
                    self.assert_learnt(learnt)?;

                    self.atom_db.exponent_activity();
                    self.clause_db.exponent_activity();

                    if self.conflict_limit_interrupt() {
                        log::info!(target: targets::CONTEXT, "Conflict limit reached");
                        return Ok(ContextState::Unknown);
                    }

                    if self.config.restart.value && self.luby_fresh_conflict_interrupt() {
                        self.restart();
                    }

                    continue;
                }

                Err(e) => return Err(e.into()),
            }

            // Assumptions, each on a level matching its index.
            let mut decision = None;
            while let Some(assumption) = assumptions.get(self.atom_db.level() as usize) {
                match self.atom_db.value_of_literal(assumption) {
                    Some(true) => self.atom_db.open_level(),
                    Some(false) => {
                        self.analyze_final(*assumption);
                        return Ok(ContextState::Unsatisfiable);
                    }
                    None => {
                        decision = Some(*assumption);
                        break;
                    }
                }
            }

            let decision = match decision {
                Some(assumption) => assumption,
                None => match self.make_decision() {
                    DecisionOk::Literal(literal) => literal,
                    DecisionOk::Exhausted => {
                        self.model = Some(
                            self.atom_db
                                .valuation_canonical()
                                .iter()
                                .map(|value| value.unwrap_or(false))
                                .collect(),
                        );
                        return Ok(ContextState::Satisfiable);
                    }
                },
            };

            self.atom_db.open_level();
            self.atom_db.assign(decision, None);
        }
    }

    /// Stores a learnt clause, and asserts its first literal.
    ///
    /// A unit clause is asserted without being stored.
    fn assert_learnt(&mut self, learnt: Learnt) -> Result<(), ErrorKind> {
        let asserted = learnt.clause[0];
        match learnt.clause.len() {
            1 => {
                self.atom_db.assign(asserted, None);
            }
            _ => {
                let key = self.clause_db.store(
                    learnt.clause,
                    ClauseSource::Addition,
                    learnt.lbd,
                    &mut self.watches,
                )?;
                self.atom_db.assign(asserted, Some(key));
            }
        }
        Ok(())
    }
}
