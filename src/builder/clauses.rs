use crate::{
    context::GenericContext,
    db::{atom::AtomValue, clause::ClauseSource},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::{Lit, Literal},
    },
    types::err::ErrorKind,
};

/// Ok results of adding a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored.
    Added,

    /// The clause was (or simplified to) a single literal, which was asserted.
    Unit,

    /// The clause contained some literal and its negation, and was discarded.
    Tautology,

    /// The clause was satisfied on level zero, and was discarded.
    Satisfied,

    /// The clause was (or simplified to) the empty clause, and the formula is unsatisfiable.
    Falsified,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds a clause (the disjunction of `lits`) to the formula.
    ///
    /// The empty clause, or a clause each of whose literals is false on level zero, makes the formula permanently unsatisfiable.
    ///
    /// Invalidates any model, as the formula is revised.
    pub fn add_clause(&mut self, lits: &[Lit]) -> Result<ClauseOk, ErrorKind> {
        self.ensure_usable()?;
        let clause = self.canonical_literals(lits)?;
        self.note_revision();

        let result = self.add_clause_canonical(clause);
        if let Err(e) = &result {
            self.note_error(e);
        }
        result
    }

    /// Simplifies and stores a clause, as described in [builder](crate::builder).
    pub(crate) fn add_clause_canonical(&mut self, mut clause: CClause) -> Result<ClauseOk, ErrorKind> {
        if self.atom_db.level() != 0 {
            self.clear_decisions();
        }

        clause.sort_unstable();
        clause.dedup();

        if clause.windows(2).any(|pair| pair[0].atom() == pair[1].atom()) {
            log::trace!(target: targets::CLAUSE_DB, "Tautology: {}", clause.as_dimacs(false));
            return Ok(ClauseOk::Tautology);
        }

        if clause
            .iter()
            .any(|literal| self.atom_db.value_of_literal(literal) == Some(true))
        {
            return Ok(ClauseOk::Satisfied);
        }

        clause.retain(|literal| self.atom_db.value_of_literal(literal).is_none());

        match clause.len() {
            0 => {
                log::info!(target: targets::CLAUSE_DB, "Empty clause added to context {}", self.tag);
                self.inconsistent = true;
                Ok(ClauseOk::Falsified)
            }

            1 => match self.atom_db.assign(clause[0], None) {
                AtomValue::NotSet => Ok(ClauseOk::Unit),
                AtomValue::Same => Ok(ClauseOk::Satisfied),
                AtomValue::Different => {
                    self.inconsistent = true;
                    Ok(ClauseOk::Falsified)
                }
            },

            _ => {
                self.clause_db
                    .store(clause, ClauseSource::Original, 0, &mut self.watches)?;
                Ok(ClauseOk::Added)
            }
        }
    }
}
