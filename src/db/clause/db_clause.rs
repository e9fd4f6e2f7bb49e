//! A long clause as stored in the clause database.
//!
//! The literals at index 0 and 1 are the watched literals of the clause.
//! When a watched literal becomes false, [update_watch](DBClause::update_watch) searches the remaining literals for a replacement.

use crate::{
    db::{atom::AtomDB, ClauseKey},
    structures::{clause::CClause, literal::CLiteral},
};

/// A clause with its key.
#[derive(Debug)]
pub struct DBClause {
    key: ClauseKey,
    clause: CClause,
}

/// The result of revising the watches of a clause after a watched literal became false.
#[derive(Debug, PartialEq, Eq)]
pub enum WatchStatus {
    /// The other watched literal is true, so the clause is satisfied.
    Satisfied,

    /// The false literal has been replaced with the given (non-false) literal.
    Moved(CLiteral),

    /// No replacement exists, and the other watched literal has no value.
    Asserts(CLiteral),

    /// No replacement exists, and every literal is false.
    Conflict,
}

impl DBClause {
    pub fn new(key: ClauseKey, clause: CClause) -> Self {
        DBClause { key, clause }
    }

    pub fn key(&self) -> ClauseKey {
        self.key
    }

    pub fn clause(&self) -> &[CLiteral] {
        &self.clause
    }

    /// Revises the watches of the clause on `false_literal` (a watched literal of the clause) becoming false.
    ///
    /// After revision the false literal is at index 1, unless replaced.
    pub fn update_watch(&mut self, false_literal: CLiteral, atom_db: &AtomDB) -> WatchStatus {
        if self.clause[0] == false_literal {
            self.clause.swap(0, 1);
        }

        if atom_db.value_of_literal(&self.clause[0]) == Some(true) {
            return WatchStatus::Satisfied;
        }

        for index in 2..self.clause.len() {
            if atom_db.value_of_literal(&self.clause[index]) != Some(false) {
                self.clause.swap(1, index);
                return WatchStatus::Moved(self.clause[1]);
            }
        }

        match atom_db.value_of_literal(&self.clause[0]) {
            None => WatchStatus::Asserts(self.clause[0]),
            Some(_) => WatchStatus::Conflict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, structures::literal::Literal};

    #[test]
    fn watch_updates() {
        let mut atom_db = AtomDB::new(&Config::default());
        let atoms = (0..4)
            .map(|_| atom_db.fresh_atom(true).unwrap())
            .collect::<Vec<_>>();
        let literals = atoms
            .iter()
            .map(|atom| CLiteral::new(*atom, true))
            .collect::<Vec<_>>();

        let mut clause = DBClause::new(ClauseKey::Original(0), literals.clone());

        atom_db.open_level();
        atom_db.assign(-literals[0], None);
        assert_eq!(
            clause.update_watch(literals[0], &atom_db),
            WatchStatus::Moved(literals[2])
        );

        atom_db.assign(-literals[2], None);
        assert_eq!(
            clause.update_watch(literals[2], &atom_db),
            WatchStatus::Moved(literals[3])
        );

        atom_db.assign(-literals[3], None);
        assert_eq!(
            clause.update_watch(literals[3], &atom_db),
            WatchStatus::Asserts(literals[1])
        );

        atom_db.assign(literals[1], None);
        assert_eq!(
            clause.update_watch(literals[3], &atom_db),
            WatchStatus::Satisfied
        );
    }
}
