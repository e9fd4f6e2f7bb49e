/*!
A database of clause related things.

Clauses are distinguished by source and by length:
- *Original* clauses are added to a context by a client, and are never removed.
- *Addition* clauses are learnt during a solve, and long addition clauses may be removed during a [reduction](ClauseDB::reduce).

And:
- *Binary* clauses are propagated directly from their watches, and are stored only for use during analysis.
- *Long* clauses (of three or more literals) are stored as [DBClause]s, which revise their watched literals during propagation.

Unit clauses are not stored, as a unit clause is an assignment on level zero of the trail.

Long addition clauses are stored with an activity and [LBD] on an [IndexHeap], ordered so the least useful clause is at the top of the heap.
*/

pub mod activity_lbd;
pub mod db_clause;
mod get;
mod store;

use activity_lbd::ActivityLBD;
use db_clause::DBClause;

use crate::{
    config::{dbs::ClauseDBConfig, Activity, Config, LBD},
    db::ClauseKey,
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::clause::CClause,
};

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// Added by a client of a context.
    Original,

    /// Learnt during a solve.
    Addition,
}

/// The clause database.
pub struct ClauseDB {
    /// Long original clauses.
    original: Vec<DBClause>,

    /// Binary original clauses.
    binary_original: Vec<CClause>,

    /// Binary addition clauses.
    binary_addition: Vec<CClause>,

    /// Long addition clauses, where any clause may be removed.
    addition: Vec<Option<DBClause>>,

    /// Keys to removed addition clauses, retokened for reuse.
    empty_keys: Vec<ClauseKey>,

    /// Activity and LBD of long addition clauses, indexed by the index of the key of each clause.
    activity_heap: IndexHeap<ActivityLBD>,

    /// A count of stored long addition clauses.
    addition_count: usize,

    /// A local configuration, typically derived from the configuration of a context.
    pub config: ClauseDBConfig,
}

/// The factor activities are scaled by, when some activity grows too large.
const RESCALE: Activity = 1e-100;

impl ClauseDB {
    /// A new [ClauseDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            original: Vec::default(),
            binary_original: Vec::default(),
            binary_addition: Vec::default(),
            addition: Vec::default(),
            empty_keys: Vec::default(),
            activity_heap: IndexHeap::default(),
            addition_count: 0,
            config: config.clause_db.clone(),
        }
    }

    /// A count of stored original clauses.
    pub fn original_count(&self) -> usize {
        self.original.len() + self.binary_original.len()
    }

    /// A count of stored addition clauses.
    pub fn addition_count(&self) -> usize {
        self.addition_count + self.binary_addition.len()
    }

    /// A count of stored long addition clauses, i.e. those which may be removed.
    pub fn removable_count(&self) -> usize {
        self.addition_count
    }

    /// Bumps the activity of a long addition clause.
    ///
    /// Any other key is ignored.
    pub fn bump_activity(&mut self, key: &ClauseKey) {
        let ClauseKey::Addition(index, _) = key else {
            return;
        };
        let index = *index as usize;
        if !self.activity_heap.is_active(index) {
            return;
        }

        let bumped = self.activity_heap.value_at(index).activity + self.config.bump.value;
        if bumped > self.config.bump.max {
            self.rescore_activity();
        }
        let mut value = *self.activity_heap.value_at(index);
        value.activity += self.config.bump.value;
        self.activity_heap.revalue(index, value);
        self.activity_heap.heapify_if_active(index);
    }

    /// Increase the activity bump applied to clauses by a factor, to decay the relative activity of every clause.
    pub fn exponent_activity(&mut self) {
        let factor = 1.0 / (1.0 - self.config.decay.value);
        self.config.bump.value *= factor;
        if self.config.bump.value > self.config.bump.max {
            self.rescore_activity();
        }
    }

    fn rescore_activity(&mut self) {
        self.activity_heap.apply_to_all(|value| ActivityLBD {
            activity: value.activity * RESCALE,
            lbd: value.lbd,
        });
        self.config.bump.value *= RESCALE;
        self.activity_heap.heapify();
    }

    /// Removes (roughly) half of the long addition clauses, preferring those with high LBD and low activity.
    ///
    /// Clauses with an LBD within the [bound](ClauseDBConfig::lbd_bound) are kept.
    ///
    /// Keys of removed clauses remain in watch lists, and so should only be made when no removed clause is the reason for an assignment above level zero.
    pub fn reduce(&mut self) {
        let target = self.addition_count / 2;
        let mut removed = 0;
        let mut protected = Vec::default();

        while removed < target {
            let Some(index) = self.activity_heap.pop_max() else {
                break;
            };

            if self.activity_heap.value_at(index).lbd <= self.config.lbd_bound.value {
                protected.push(index);
                continue;
            }

            if let Some(clause) = self.addition[index].take() {
                self.addition_count -= 1;
                removed += 1;
                match clause.key().retoken() {
                    Ok(key) => self.empty_keys.push(key),
                    Err(_) => {
                        log::trace!(target: targets::REDUCTION, "Index {index} retired");
                    }
                }
            }
        }

        for index in protected {
            self.activity_heap.activate(index);
        }

        log::debug!(target: targets::REDUCTION, "Removed {removed} of {target} targeted clauses");
    }

    /// The LBD of a long addition clause, if stored.
    pub fn lbd_of(&self, key: &ClauseKey) -> Option<LBD> {
        match key {
            ClauseKey::Addition(index, _) if self.get(key).is_ok() => {
                Some(self.activity_heap.value_at(*index as usize).lbd)
            }
            _ => None,
        }
    }
}
