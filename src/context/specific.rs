use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, watches::Watches},
    generic::random::MinimalPCG32,
    misc::log::targets::{self},
    resolution_buffer::ResolutionBuffer,
    types::err::ErrorKind,
};

use rand::SeedableRng;

use super::{ContextState, ContextTag, Counters, GenericContext};

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        let mut watches = Watches::default();
        watches.ensure_atom(0);

        let tag = ContextTag::fresh();
        log::debug!(target: targets::CONTEXT, "Context {tag} created");

        Self {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::new(&config),
            resolution_buffer: ResolutionBuffer::default(),
            watches,

            rng: MinimalPCG32::seed_from_u64(config.seed.value),
            config,

            counters: Counters::default(),
            state: ContextState::Input,

            callback_terminate: None,

            tag,
            client_atoms: Vec::default(),
            model: None,
            failed_assumptions: Vec::default(),
            inconsistent: false,
        }
    }

    /// Creates a context from `--name=value` options, see [Config::from_args].
    ///
    /// ```rust
    /// # use burrow_sat::context::Context;
    /// assert!(Context::from_args(&["--restart=false"]).is_ok());
    /// assert!(Context::from_args(&["--unknown"]).is_err());
    /// ```
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ErrorKind> {
        Ok(Self::from_config(Config::from_args(args)?))
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
