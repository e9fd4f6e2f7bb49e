//! Configuration of databases, typically derived from the configuration of a context.

use super::{Activity, ConfigOption, LBD};

/// Configuration for the atom database.
#[derive(Clone, Debug)]
pub struct AtomDBConfig {
    /// The activity with which the next atom bumped will be bumped by, dynamically adjusted.
    pub bump: ConfigOption<Activity>,

    /// The decay to the activity of a atom each conflict.
    pub decay: ConfigOption<Activity>,
}

impl Default for AtomDBConfig {
    fn default() -> Self {
        AtomDBConfig {
            bump: ConfigOption {
                name: "atom_bump",
                min: Activity::MIN_POSITIVE,
                max: (2.0 as Activity).powi(512),
                value: 1.0,
            },

            decay: ConfigOption {
                name: "atom_decay",
                min: 0.0,
                max: 0.5,
                value: 50.0 * 1e-3,
            },
        }
    }
}

/// Configuration for the clause database.
#[derive(Clone, Debug)]
pub struct ClauseDBConfig {
    /// The activity with which the next clause bumped will be bumped by, dynamically adjusted.
    pub bump: ConfigOption<Activity>,

    /// The decay to the activity of a clause each conflict.
    pub decay: ConfigOption<Activity>,

    /// Any clauses with lbd within the lbd bound (lbd ≤ bound) will not be removed from the clause database.
    pub lbd_bound: ConfigOption<LBD>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            bump: ConfigOption {
                name: "clause_bump",
                min: Activity::MIN_POSITIVE,
                max: (2.0 as Activity).powi(512),
                value: 1.0,
            },

            decay: ConfigOption {
                name: "clause_decay",
                min: 0.0,
                max: 0.5,
                value: 1e-3,
            },

            lbd_bound: ConfigOption {
                name: "lbd_bound",
                min: LBD::MIN,
                max: LBD::MAX,
                value: 2,
            },
        }
    }
}
