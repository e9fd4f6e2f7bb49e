/*!
Configuration of a context.

All configuration for a context is contained within a [Config], which is fixed when the context is created.
Some structures (e.g. the databases) clone the parts of the configuration relevant to them.

A configuration may be built from defaults and revised directly, or read from `--name=value` options with [Config::from_args].

```rust
# use burrow_sat::config::{Config, AMOEncoding};
let config = Config::from_args(&["--amo_encoding=Sequential --restart=false", "--seed=7"]).unwrap();

assert_eq!(config.amo_encoding.value, AMOEncoding::Sequential);
assert!(!config.restart.value);
assert_eq!(config.seed.value, 7);
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
use dbs::{AtomDBConfig, ClauseDBConfig};

mod amo;
pub use amo::AMOEncoding;

mod minimization_criteria;
pub use minimization_criteria::MinimizationCriteria;

mod parse;

pub mod vsids;
use vsids::VSIDS;

use crate::generic::luby::LubyRepresentation;

/// Representation of the activity of atoms and clauses.
pub type Activity = f64;

/// Literal block distance, a.k.a 'glue'.
///
/// See [On the Glucose SAT Solver](https://dx.doi.org/10.1142/S0218213018400018) for an overview of LBD.
pub type LBD = u8;

/// Representation for the probability of choosing `true`.
pub type PolarityLean = f64;

/// Representation for the probability of making a random decision.
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of the atom database.
    pub atom_db: AtomDBConfig,

    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// Which at-most-one encoding to use.
    pub amo_encoding: ConfigOption<AMOEncoding>,

    /// The longest constraint given the pairwise encoding, when the encoding is adaptive.
    pub amo_pairwise_limit: ConfigOption<usize>,

    /// The maximum number of conflicts in a single solve, with zero for no limit.
    pub conflict_limit: ConfigOption<u64>,

    /// The `u` value to multiply the luby sequence by when determining whether to perform a restart.
    pub luby_u: ConfigOption<LubyRepresentation>,

    /// Which minimization to apply to learnt clauses.
    pub minimization: ConfigOption<MinimizationCriteria>,

    /// Default to the last set value of a atom when choosing a value for the atom, otherwise decide with [polarity_lean](Config::polarity_lean).
    pub phase_saving: ConfigOption<bool>,

    /// The probability of assigning positive polarity to a atom when freely choosing a atom.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of choosing a random atom, rather than the most active atom, when making a decision.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// Permit reduction of learnt clauses.
    pub reduction: ConfigOption<bool>,

    /// Reduce learnt clauses every `reduction_interval` restarts.
    pub reduction_interval: ConfigOption<u32>,

    /// Permit (scheduled) restarts.
    pub restart: ConfigOption<bool>,

    /// The seed for the source of randomness of a context.
    pub seed: ConfigOption<u64>,

    /// The time limit for a single solve, with zero for no limit.
    pub time_limit: ConfigOption<std::time::Duration>,

    /// Which VSIDS variant to use during resolution based analysis.
    pub vsids_variant: ConfigOption<VSIDS>,
}

impl Default for Config {
    /// The default configuration is (roughly) tuned for quick, deterministic, results on small incremental problems.
    fn default() -> Self {
        Config {
            atom_db: AtomDBConfig::default(),
            clause_db: ClauseDBConfig::default(),

            amo_encoding: ConfigOption {
                name: "amo_encoding",
                min: AMOEncoding::MIN,
                max: AMOEncoding::MAX,
                value: AMOEncoding::Adaptive,
            },

            amo_pairwise_limit: ConfigOption {
                name: "amo_pairwise_limit",
                min: 2,
                max: usize::MAX,
                value: 6,
            },

            conflict_limit: ConfigOption {
                name: "conflict_limit",
                min: 0,
                max: u64::MAX,
                value: 0,
            },

            luby_u: ConfigOption {
                name: "luby_u",
                min: 1,
                max: LubyRepresentation::MAX,
                value: 128,
            },

            minimization: ConfigOption {
                name: "minimization",
                min: MinimizationCriteria::MIN,
                max: MinimizationCriteria::MAX,
                value: MinimizationCriteria::Recursive,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                value: true,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            reduction: ConfigOption {
                name: "reduction",
                min: false,
                max: true,
                value: true,
            },

            reduction_interval: ConfigOption {
                name: "reduction_interval",
                min: 1,
                max: u32::MAX,
                value: 2,
            },

            restart: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                value: true,
            },

            seed: ConfigOption {
                name: "seed",
                min: 0,
                max: u64::MAX,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::from_secs(0),
                max: std::time::Duration::MAX,
                value: std::time::Duration::from_secs(0),
            },

            vsids_variant: ConfigOption {
                name: "vsids",
                min: VSIDS::MIN,
                max: VSIDS::MAX,
                value: VSIDS::MiniSAT,
            },
        }
    }
}
