use crate::{misc::log::targets::{self}, types::err::{self}};

/// The index to a clause.
pub type FormulaIndex = u32;

/// The token of a formula index, used to distinguish re-use of the same [FormulaIndex].
pub type FormulaToken = u16;

/// A key to access a clause stored in the clause database.
///
/// Within the clause database clauses are stored in indexed structures, and keys contain the index to the clause together with a token to distinguish reuse of the same index, where relevant.
///
/// There are no keys for unit clauses, as a unit clause is stored as an assignment on the first level of the trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to a binary clause added to the context.
    OriginalBinary(FormulaIndex),

    /// The key to a binary clause learnt during a solve.
    AdditionBinary(FormulaIndex),

    /// The key to a long clause added to the context.
    Original(FormulaIndex),

    /// The key to a long clause learnt during a solve.
    Addition(FormulaIndex, FormulaToken),
}

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        match self {
            Self::OriginalBinary(i) | Self::AdditionBinary(i) | Self::Original(i) => *i as usize,
            Self::Addition(i, _) => *i as usize,
        }
    }

    /// Retokens an addition key to distinguish multiple uses of the same index.
    ///
    /// Returns an error if used on any other key, or if the token limit has been reached.
    pub fn retoken(&self) -> Result<Self, err::ClauseDBError> {
        match self {
            Self::OriginalBinary(_) | Self::AdditionBinary(_) | Self::Original(_) => {
                log::error!(target: targets::CLAUSE_DB, "Only addition keys are retokened: {self}");
                Err(err::ClauseDBError::InvalidKeyToken)
            }

            Self::Addition(index, token) => {
                if *token == FormulaToken::MAX {
                    return Err(err::ClauseDBError::StorageExhausted);
                }
                Ok(ClauseKey::Addition(*index, token + 1))
            }
        }
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OriginalBinary(i) => write!(f, "OriginalBinary({i})"),
            Self::AdditionBinary(i) => write!(f, "AdditionBinary({i})"),
            Self::Original(i) => write!(f, "Original({i})"),
            Self::Addition(i, t) => write!(f, "Addition({i}, {t})"),
        }
    }
}
