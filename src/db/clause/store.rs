use crate::{
    config::LBD,
    db::{
        clause::{activity_lbd::ActivityLBD, db_clause::DBClause, ClauseDB, ClauseSource},
        watches::{watch_db::BinaryWatch, Watches},
        ClauseKey, FormulaIndex,
    },
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
    types::err::ClauseDBError,
};

impl ClauseDB {
    /// Stores a clause with an automatically generated key, and watches the clause.
    ///
    /// The literals at index 0 and 1 of the clause are watched, and so for a sound watch these should be chosen with care:
    /// - For a clause added on level zero, any two literals without a value.
    /// - For a learnt clause, the asserted literal and a literal of the highest level among the rest.
    ///
    /// Unit and empty clauses are not stored, see [TooShort](ClauseDBError::TooShort).
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
        lbd: LBD,
        watches: &mut Watches,
    ) -> Result<ClauseKey, ClauseDBError> {
        match clause.size() {
            0 | 1 => {
                log::error!(target: targets::CLAUSE_DB, "Attempt to store a clause of {} literals", clause.size());
                Err(ClauseDBError::TooShort)
            }

            2 => {
                let key = match source {
                    ClauseSource::Original => {
                        ClauseKey::OriginalBinary(Self::fresh_index(self.binary_original.len())?)
                    }
                    ClauseSource::Addition => {
                        ClauseKey::AdditionBinary(Self::fresh_index(self.binary_addition.len())?)
                    }
                };

                watches.watch_binary(&clause[0], BinaryWatch { other: clause[1], key });
                watches.watch_binary(&clause[1], BinaryWatch { other: clause[0], key });

                log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_dimacs(false));
                match source {
                    ClauseSource::Original => self.binary_original.push(clause),
                    ClauseSource::Addition => self.binary_addition.push(clause),
                }
                Ok(key)
            }

            _ => match source {
                ClauseSource::Original => {
                    let key = ClauseKey::Original(Self::fresh_index(self.original.len())?);

                    watches.watch_long(&clause[0], key);
                    watches.watch_long(&clause[1], key);

                    log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_dimacs(false));
                    self.original.push(DBClause::new(key, clause));
                    Ok(key)
                }

                ClauseSource::Addition => {
                    let key = match self.empty_keys.pop() {
                        Some(key) => key,
                        None => ClauseKey::Addition(Self::fresh_index(self.addition.len())?, 0),
                    };
                    let index = key.index();

                    watches.watch_long(&clause[0], key);
                    watches.watch_long(&clause[1], key);

                    log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_dimacs(false));
                    let stored = Some(DBClause::new(key, clause));
                    match self.addition.get_mut(index) {
                        Some(slot) => *slot = stored,
                        None => self.addition.push(stored),
                    }

                    self.activity_heap.add(
                        index,
                        ActivityLBD {
                            activity: self.config.bump.value,
                            lbd,
                        },
                    );
                    self.activity_heap.activate(index);
                    self.addition_count += 1;

                    Ok(key)
                }
            },
        }
    }

    /// The next index of a store of the given length, if representable.
    fn fresh_index(length: usize) -> Result<FormulaIndex, ClauseDBError> {
        FormulaIndex::try_from(length).map_err(|_| ClauseDBError::StorageExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        structures::literal::{CLiteral, Literal},
    };

    fn clause_of(atoms: &[u32]) -> CClause {
        atoms.iter().map(|atom| CLiteral::new(*atom, true)).collect()
    }

    #[test]
    fn keys_by_kind() {
        let mut db = ClauseDB::new(&Config::default());
        let mut watches = Watches::default();
        watches.ensure_atom(8);

        let binary = db.store(clause_of(&[1, 2]), ClauseSource::Original, 0, &mut watches);
        let long = db.store(clause_of(&[1, 2, 3]), ClauseSource::Original, 0, &mut watches);
        let learnt = db.store(clause_of(&[4, 5, 6]), ClauseSource::Addition, 3, &mut watches);

        assert_eq!(binary, Ok(ClauseKey::OriginalBinary(0)));
        assert_eq!(long, Ok(ClauseKey::Original(0)));
        assert_eq!(learnt, Ok(ClauseKey::Addition(0, 0)));
        assert_eq!(
            db.store(clause_of(&[1]), ClauseSource::Original, 0, &mut watches),
            Err(ClauseDBError::TooShort)
        );

        assert_eq!(db.original_count(), 2);
        assert_eq!(db.addition_count(), 1);
        assert_eq!(db.lbd_of(&ClauseKey::Addition(0, 0)), Some(3));
    }

    #[test]
    fn reduction_reuses_keys() {
        let mut db = ClauseDB::new(&Config::default());
        let mut watches = Watches::default();
        watches.ensure_atom(16);

        for offset in 0..4 {
            let clause = clause_of(&[offset + 1, offset + 2, offset + 3]);
            db.store(clause, ClauseSource::Addition, 8, &mut watches)
                .unwrap();
        }
        let glue = db
            .store(clause_of(&[10, 11, 12]), ClauseSource::Addition, 2, &mut watches)
            .unwrap();

        db.reduce();
        assert_eq!(db.removable_count(), 3);
        assert!(db.get(&glue).is_ok());

        let reused = db
            .store(clause_of(&[13, 14, 15]), ClauseSource::Addition, 8, &mut watches)
            .unwrap();
        assert!(matches!(reused, ClauseKey::Addition(_, 1)));
        assert!(db.get(&reused).is_ok());
    }
}
