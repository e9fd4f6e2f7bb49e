/*!
Watch lists, for each literal of a context.

A clause *watches* a literal if the clause should be inspected when the literal becomes false.

- A binary clause watches both of its literals.
- A long clause watches the literals at index 0 and 1 of the clause, and revises these as literals become false.

Lists are indexed by the watched literal.
So, on an assignment of some literal *l*, the clauses to inspect are those watching -*l*, found with [watchers_binary](Watches::watchers_binary) and [watchers_long](Watches::watchers_long) on *l*.

Keys of removed clauses are left in watch lists when the clause is removed, and dropped when next found during propagation.
*/

pub mod watch_db;
use watch_db::{BinaryWatch, WatchDB};

use crate::{
    db::ClauseKey,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

#[derive(Default)]
pub struct Watches {
    pub dbs: Vec<WatchDB>,
}

impl Watches {
    /// Ensures a [WatchDB] exists for `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let required = atom as usize + 1;
        if self.dbs.len() < required {
            self.dbs.resize_with(required, WatchDB::default);
        }
    }

    /// Notes a binary clause watching `literal`.
    pub fn watch_binary(&mut self, literal: &CLiteral, watch: BinaryWatch) {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => db.positive_binary.push(watch),
            false => db.negative_binary.push(watch),
        }
    }

    /// Notes a long clause watching `literal`.
    pub fn watch_long(&mut self, literal: &CLiteral, key: ClauseKey) {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => db.positive_long.push(key),
            false => db.negative_long.push(key),
        }
    }

    /// The binary clauses to inspect on the assignment of `literal`.
    pub fn watchers_binary(&self, literal: &CLiteral) -> &[BinaryWatch] {
        let db = &self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => &db.negative_binary,
            false => &db.positive_binary,
        }
    }

    /// The long clauses to inspect on the assignment of `literal`.
    pub fn watchers_long(&mut self, literal: &CLiteral) -> &mut Vec<ClauseKey> {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => &mut db.negative_long,
            false => &mut db.positive_long,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watchers_are_negations() {
        let mut watches = Watches::default();
        watches.ensure_atom(2);

        let p = CLiteral::new(1, true);
        let q = CLiteral::new(2, false);
        let key = ClauseKey::OriginalBinary(0);

        watches.watch_binary(&p, BinaryWatch { other: q, key });
        watches.watch_long(&q, ClauseKey::Original(3));

        assert!(watches.watchers_binary(&p).is_empty());
        assert_eq!(watches.watchers_binary(&-p), &[BinaryWatch { other: q, key }]);
        assert_eq!(watches.watchers_long(&-q), &vec![ClauseKey::Original(3)]);
        assert!(watches.watchers_long(&q).is_empty());
    }
}
