use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, watches::Watches},
    misc::log::targets::{self},
    reports::Report,
    resolution_buffer::ResolutionBuffer,
    structures::{
        atom::{Atom, TOP_ATOM},
        literal::{CLiteral, Lit, Literal},
    },
    types::err::{ErrorKind, LiteralError, StateError},
};

use super::{callbacks::CallbackTerminate, ContextState, ContextTag, Counters};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used in calls to [make_decision](GenericContext::make_decision) to appease the borrow checker, and may be relaxed with a different implementation.
///
/// # Example
///
/// ```rust
/// # use burrow_sat::context::GenericContext;
/// # use burrow_sat::generic::random::MinimalPCG32;
/// # use burrow_sat::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// assert_eq!(context.literals().unwrap().len(), 1);
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub(crate) config: Config,

    /// Counters related to a context/solve.
    pub(crate) counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub(crate) atom_db: AtomDB,

    /// Watch lists for each literal.
    /// See [db::watches](crate::db::watches) for details.
    pub(crate) watches: Watches,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub(crate) clause_db: ClauseDB,

    /// The status of the context.
    pub(crate) state: ContextState,

    /// The source of rng.
    pub(crate) rng: R,

    /// A buffer for conflict analysis.
    pub(crate) resolution_buffer: ResolutionBuffer,

    /// Terminates procedures, if true.
    pub(crate) callback_terminate: Option<Box<CallbackTerminate>>,

    /// The tag carried by each literal of the context.
    pub(crate) tag: ContextTag,

    /// Atoms handed to a client, in order of allocation.
    pub(crate) client_atoms: Vec<Atom>,

    /// A snapshot of the valuation of the most recent satisfiable solve, if still valid.
    pub(crate) model: Option<Vec<bool>>,

    /// The assumptions responsible for the most recent unsatisfiable solve, if any.
    pub(crate) failed_assumptions: Vec<CLiteral>,

    /// Whether the formula is known to be unsatisfiable, regardless of assumptions.
    pub(crate) inconsistent: bool,
}

/// An iterator over the literals of a context, from [literals](GenericContext::literals).
#[derive(Clone)]
pub struct Literals<'a> {
    tag: ContextTag,
    top: bool,
    atoms: std::slice::Iter<'a, Atom>,
}

impl Iterator for Literals<'_> {
    type Item = Lit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.top {
            self.top = false;
            return Some(Lit::TRUE);
        }
        self.atoms
            .next()
            .map(|atom| Lit::new(self.tag, CLiteral::new(*atom, true)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.atoms.len() + usize::from(self.top);
        (size, Some(size))
    }
}

impl ExactSizeIterator for Literals<'_> {}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The state of the context.
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// The tag carried by literals of the context.
    pub fn tag(&self) -> ContextTag {
        self.tag
    }

    /// The configuration of the context.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Counters of the context.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// A count of atoms in the context, including the top atom and any atoms introduced by encodings.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count()
    }

    /// A count of stored original clauses.
    ///
    /// Unit clauses are not stored, nor clauses satisfied or tautological when added.
    pub fn clause_count(&self) -> usize {
        self.clause_db.original_count()
    }

    /// A count of stored learnt clauses.
    pub fn addition_count(&self) -> usize {
        self.clause_db.addition_count()
    }

    /// Ok if the context may be used, and otherwise an error noting why not.
    pub(crate) fn ensure_usable(&self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Disposed => Err(StateError::Disposed.into()),
            ContextState::Failed => Err(StateError::Failed.into()),
            _ => Ok(()),
        }
    }

    /// Notes a revision to the formula, invalidating any model.
    pub(crate) fn note_revision(&mut self) {
        self.model = None;
        self.failed_assumptions.clear();
        self.state = ContextState::Input;
    }

    /// Marks the context as failed, if `error` is a resource error.
    pub(crate) fn note_error(&mut self, error: &ErrorKind) {
        if error.is_resource() {
            log::error!(target: targets::CONTEXT, "Context {} failed: {error}", self.tag);
            self.model = None;
            self.state = ContextState::Failed;
        }
    }

    /// The canonical literal of `lit`, if `lit` is a literal of the context.
    pub(crate) fn canonical_literal(&self, lit: &Lit) -> Result<CLiteral, ErrorKind> {
        if lit.tag() != self.tag && !lit.is_constant() {
            return Err(LiteralError::Foreign.into());
        }
        if lit.atom() as usize >= self.atom_db.count() {
            return Err(LiteralError::UnknownAtom.into());
        }
        Ok(lit.canonical())
    }

    /// The canonical literals of `lits`, if each is a literal of the context.
    pub(crate) fn canonical_literals(&self, lits: &[Lit]) -> Result<Vec<CLiteral>, ErrorKind> {
        lits.iter().map(|lit| self.canonical_literal(lit)).collect()
    }

    /// The client literal of a canonical literal.
    pub(crate) fn client_literal(&self, literal: CLiteral) -> Lit {
        match literal.atom() {
            TOP_ATOM if literal.polarity() => Lit::TRUE,
            TOP_ATOM => Lit::FALSE,
            _ => Lit::new(self.tag, literal),
        }
    }

    /// The value of `lit` on the model of the most recent solve.
    ///
    /// Fails if there is no model, as the most recent solve was not satisfiable or the formula was revised after the solve.
    pub fn value(&self, lit: Lit) -> Result<bool, ErrorKind> {
        self.ensure_usable()?;
        let literal = self.canonical_literal(&lit)?;
        match &self.model {
            Some(model) => match model.get(literal.atom() as usize) {
                Some(value) => Ok(*value == literal.polarity()),
                None => Err(StateError::NoModel.into()),
            },
            None => Err(StateError::NoModel.into()),
        }
    }

    /// The literals of the context: [Lit::TRUE] followed by the positive literal of each atom handed out, in order of allocation.
    ///
    /// Atoms introduced internally by encodings are not included.
    pub fn literals(&self) -> Result<Literals<'_>, ErrorKind> {
        self.ensure_usable()?;
        Ok(Literals {
            tag: self.tag,
            top: true,
            atoms: self.client_atoms.iter(),
        })
    }

    /// The assumptions responsible for the most recent solve being unsatisfiable.
    ///
    /// Empty if the most recent solve was not unsatisfiable, or if the formula is unsatisfiable without assumptions.
    pub fn failed_assumptions(&self) -> Result<Vec<Lit>, ErrorKind> {
        self.ensure_usable()?;
        Ok(self
            .failed_assumptions
            .iter()
            .map(|literal| self.client_literal(*literal))
            .collect())
    }

    /// Whether the formula is known to be unsatisfiable without any assumptions.
    ///
    /// False after disposal, as no formula remains.
    pub fn is_inconsistent(&self) -> bool {
        self.inconsistent
    }

    /// Releases the resources of the context.
    ///
    /// After disposal, every operation on the context fails, including a second disposal.
    pub fn dispose(&mut self) -> Result<(), ErrorKind> {
        if self.state == ContextState::Disposed {
            return Err(StateError::Disposed.into());
        }
        log::debug!(target: targets::CONTEXT, "Disposing context {}", self.tag);

        self.atom_db = AtomDB::new(&self.config);
        self.clause_db = ClauseDB::new(&self.config);
        self.watches = Watches::default();
        self.resolution_buffer = ResolutionBuffer::default();
        self.client_atoms = Vec::default();
        self.model = None;
        self.failed_assumptions = Vec::default();
        self.callback_terminate = None;
        self.inconsistent = false;
        self.state = ContextState::Disposed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        context::{Context, ContextState},
        types::err::{AtomDBError, ClauseDBError, ErrorKind, StateError},
    };

    #[test]
    fn resource_errors_fail_one_context() {
        let mut failed = Context::default();
        let mut live = Context::default();

        let p = failed.fresh_literal().unwrap();
        let q = live.fresh_literal().unwrap();
        assert_eq!(failed.solve(&[p]), Ok(true));

        failed.note_error(&ErrorKind::Interrupted);
        assert_eq!(failed.value(p), Ok(true));

        failed.note_error(&AtomDBError::AtomsExhausted.into());
        assert_eq!(failed.state(), ContextState::Failed);

        let unusable: Result<(), ErrorKind> = Err(StateError::Failed.into());
        assert_eq!(failed.fresh_literal().map(|_| ()), unusable);
        assert_eq!(failed.add_clause(&[p]).map(|_| ()), unusable);
        assert_eq!(failed.solve(&[p]).map(|_| ()), unusable);
        assert_eq!(failed.value(p).map(|_| ()), unusable);
        assert!(failed.literals().is_err());

        assert!(live.add_clause(&[-q]).is_ok());
        assert_eq!(live.solve(&[]), Ok(true));
        assert_eq!(live.value(q), Ok(false));
        assert_eq!(live.solve(&[q]), Ok(false));
        assert_eq!(live.state(), ContextState::Unsatisfiable);

        let mut storage = Context::default();
        storage.note_error(&ClauseDBError::StorageExhausted.into());
        assert_eq!(storage.solve(&[]), Err(ErrorKind::State(StateError::Failed)));
        assert!(storage.dispose().is_ok());
    }

    #[test]
    fn dispose_clears_inconsistency() {
        let mut the_context = Context::default();
        assert!(the_context.add_clause(&[]).is_ok());
        assert_eq!(the_context.solve(&[]), Ok(false));
        assert!(the_context.is_inconsistent());

        assert!(the_context.dispose().is_ok());
        assert!(!the_context.is_inconsistent());
    }
}
