//! Error types used in the library.
//!
//! - Some are contract violations by a caller, e.g. a literal from some other context, or use of a disposed context.
//! - Some are internally expected, e.g. BCP errors are used to control the flow of a solve.
//! - Some are resource errors, after which the context is marked as failed and refuses further use.
//!
//! Names of the error enums for the most part overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::ClauseKey;

/// The primary error type, wrapping the error types of specific parts of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    AtomDB(AtomDBError),
    BCP(BCPError),
    ClauseDB(ClauseDBError),
    Config(ConfigError),
    Literal(LiteralError),
    State(StateError),

    /// A solve stopped before satisfiability was determined.
    Interrupted,
}

impl ErrorKind {
    /// Whether the error exhausted some resource of a context, after which the context is unusable.
    pub fn is_resource(&self) -> bool {
        matches!(
            self,
            Self::AtomDB(AtomDBError::AtomsExhausted)
                | Self::ClauseDB(ClauseDBError::StorageExhausted)
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "Analysis error: {e:?}"),
            Self::AtomDB(e) => write!(f, "Atom database error: {e:?}"),
            Self::BCP(e) => write!(f, "Propagation error: {e:?}"),
            Self::ClauseDB(e) => write!(f, "Clause database error: {e:?}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Literal(e) => write!(f, "{e}"),
            Self::State(e) => write!(f, "{e}"),
            Self::Interrupted => write!(f, "Solve interrupted before a result"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Somehow resolution resolved to an empty clause.
    EmptyResolution,

    /// Resolution reached a literal without a reason before an asserting clause was found.
    NoAssertion,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),

    /// Some corruption in the watched literals of a clause.
    /// This is unexpected.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A learnt clause is missing, likely removed during a reduction.
    Missing,

    /// An invalid key token.
    InvalidKeyToken,

    /// An invalid key index.
    InvalidKeyIndex,

    /// Some attempt was made to store an empty or unit clause as a clause.
    TooShort,

    /// All possible keys have been used for some clause type (binary/long etc).
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when building a configuration from options.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// No option with the given name.
    UnknownOption(String),

    /// The value given to an option could not be read, or is out of bounds.
    InvalidValue { option: &'static str, value: String },

    /// An option was given more than once.
    ConflictingOption(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOption(name) => write!(f, "Unknown option: {name}"),
            Self::InvalidValue { option, value } => {
                write!(f, "Invalid value for {option}: {value}")
            }
            Self::ConflictingOption(name) => write!(f, "Option given more than once: {name}"),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Misuse of a literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LiteralError {
    /// The literal belongs to some other context.
    Foreign,

    /// The atom of the literal is not part of the context.
    UnknownAtom,
}

impl std::fmt::Display for LiteralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Foreign => write!(f, "Literal from another context"),
            Self::UnknownAtom => write!(f, "Literal with an unknown atom"),
        }
    }
}

impl From<LiteralError> for ErrorKind {
    fn from(e: LiteralError) -> Self {
        ErrorKind::Literal(e)
    }
}

/// Requests made of a context in a state which can't satisfy them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// No model is available, as the last solve was not satisfiable or the context was revised since.
    NoModel,

    /// The context has been disposed.
    Disposed,

    /// The context exhausted some resource and is no longer usable.
    Failed,
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoModel => write!(f, "No model available"),
            Self::Disposed => write!(f, "Context has been disposed"),
            Self::Failed => write!(f, "Context failed and is unusable"),
        }
    }
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
