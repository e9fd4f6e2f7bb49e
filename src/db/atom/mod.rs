/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) [valuation](Valuation) and the previous value of each atom, for phase saving.
- The level on which each atom was valued, and the clause (if any) which asserted the value.
- An [IndexHeap] recording the activty of atoms, where any atom without a value is 'active' on the heap.
- The [trail] of assignments.

The reserved top atom is created with the database, and valued true on level zero.
*/

pub mod activity;

use crate::{
    config::{dbs::AtomDBConfig, Activity, Config},
    db::{trail::Trail, ClauseKey, LevelIndex},
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX, TOP_ATOM},
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::AtomDBError,
};

/// The atom database.
pub struct AtomDB {
    /// A current (often partial) [valuation](Valuation).
    valuation: CValuation,

    /// The previous value of each atom (or some initial value).
    previous_valuation: Vec<bool>,

    /// The level on which each atom was valued, if valued.
    levels: Vec<Option<LevelIndex>>,

    /// The clause which asserted the value of each atom, if valued by propagation.
    reasons: Vec<Option<ClauseKey>>,

    /// An [IndexHeap] recording the activty of atoms, where any atom without a value is 'active' on the heap.
    activity_heap: IndexHeap<Activity>,

    /// The trail of assignments.
    pub trail: Trail,

    /// A local configuration, typically derived from the configuration of a context.
    pub config: AtomDBConfig,
}

#[derive(Debug, PartialEq, Eq)]
/// The status of the valuation of an atom, relative to some literal.
pub enum AtomValue {
    /// The atom had no value.
    NotSet,

    /// The value of the atom is the same as the polarity of the literal.
    Same,

    /// The value of the atom is not the same as the polarity of the literal.
    Different,
}

impl AtomDB {
    /// A new [AtomDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        let mut db = AtomDB {
            valuation: Vec::default(),
            previous_valuation: Vec::default(),
            levels: Vec::default(),
            reasons: Vec::default(),
            activity_heap: IndexHeap::default(),
            trail: Trail::default(),
            config: config.atom_db.clone(),
        };

        db.valuation.push(None);
        db.previous_valuation.push(true);
        db.levels.push(None);
        db.reasons.push(None);
        db.activity_heap.add(TOP_ATOM as usize, 0.0);
        db.assign(CLiteral::new(TOP_ATOM, true), None);
        db
    }

    /// A count of atoms in the [AtomDB], including the top atom.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation, as some structure which implements the valuation trait.
    pub fn valuation(&self) -> &impl Valuation {
        &self.valuation
    }

    /// The current valuation, as a canonical [CValuation].
    pub fn valuation_canonical(&self) -> &CValuation {
        &self.valuation
    }

    /// A fresh atom, with the given initial phase.
    ///
    /// On Ok the atom is part of the language of the database, and is active on the activity heap.
    pub fn fresh_atom(&mut self, previous_value: bool) -> Result<Atom, AtomDBError> {
        let atom = match Atom::try_from(self.valuation.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(AtomDBError::AtomsExhausted),
        };

        self.activity_heap.add(atom as usize, 0.0);
        self.activity_heap.activate(atom as usize);

        self.valuation.push(None);
        self.previous_valuation.push(previous_value);
        self.levels.push(None);
        self.reasons.push(None);

        Ok(atom)
    }

    /// The value of `atom`, if valued.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// Whether `literal` is true, false, or has no value.
    pub fn value_of_literal(&self, literal: &CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// The previous value of `atom` (or some initial value, if never valued).
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_valuation[atom as usize]
    }

    /// The level on which `atom` was valued, if valued.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels[atom as usize]
    }

    /// The clause which asserted the value of `atom`, if valued by propagation above level zero.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.reasons[atom as usize]
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.trail.level()
    }

    /// Opens a fresh level on the trail, e.g. to make a decision.
    pub fn open_level(&mut self) {
        self.trail.open_level();
    }

    /// Values the atom of `literal` with the polarity of `literal` on the current level, if the atom has no value.
    ///
    /// A valued atom is left as is, and the result notes whether the value agrees with the literal.
    pub fn assign(&mut self, literal: CLiteral, reason: Option<ClauseKey>) -> AtomValue {
        let atom = literal.atom() as usize;
        match self.valuation[atom] {
            None => {
                let level = self.trail.level();
                log::trace!(target: targets::VALUATION, "Assigned {literal} at level {level}");
                self.valuation[atom] = Some(literal.polarity());
                self.levels[atom] = Some(level);
                self.reasons[atom] = match level {
                    0 => None,
                    _ => reason,
                };
                self.trail.store_assignment(literal);
                AtomValue::NotSet
            }
            Some(value) if value == literal.polarity() => AtomValue::Same,
            Some(_) => AtomValue::Different,
        }
    }

    /// Removes every level above `level`, clearing the value of each atom on a removed level.
    ///
    /// The cleared values are saved as the previous values of the atoms, and the atoms are returned to the activity heap.
    pub fn backjump(&mut self, level: LevelIndex) {
        for literal in self.trail.forget_levels_above(level) {
            let atom = literal.atom() as usize;
            self.valuation[atom] = None;
            self.levels[atom] = None;
            self.reasons[atom] = None;
            self.previous_valuation[atom] = literal.polarity();
            self.activity_heap.activate(atom);
        }
    }
}
