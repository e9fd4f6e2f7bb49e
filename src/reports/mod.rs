/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable, under any assumptions made.
    Satisfiable,

    /// The formula of the context is unsatisfiable, under any assumptions made.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, e.g. as a solve was interrupted.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
            ContextState::Input
            | ContextState::Solving
            | ContextState::Unknown
            | ContextState::Failed
            | ContextState::Disposed => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
