use crate::{
    db::{
        clause::{db_clause::DBClause, ClauseDB},
        ClauseKey,
    },
    structures::literal::CLiteral,
    types::err::ClauseDBError,
};

impl ClauseDB {
    /// The literals of the clause with the given key.
    ///
    /// Fails if the key is to a removed clause, or was never issued.
    pub fn get(&self, key: &ClauseKey) -> Result<&[CLiteral], ClauseDBError> {
        match key {
            ClauseKey::OriginalBinary(index) => self
                .binary_original
                .get(*index as usize)
                .map(|clause| clause.as_slice())
                .ok_or(ClauseDBError::InvalidKeyIndex),

            ClauseKey::AdditionBinary(index) => self
                .binary_addition
                .get(*index as usize)
                .map(|clause| clause.as_slice())
                .ok_or(ClauseDBError::InvalidKeyIndex),

            ClauseKey::Original(index) => self
                .original
                .get(*index as usize)
                .map(|clause| clause.clause())
                .ok_or(ClauseDBError::InvalidKeyIndex),

            ClauseKey::Addition(index, _) => match self.addition.get(*index as usize) {
                None => Err(ClauseDBError::InvalidKeyIndex),
                Some(None) => Err(ClauseDBError::Missing),
                Some(Some(clause)) if clause.key() != *key => Err(ClauseDBError::InvalidKeyToken),
                Some(Some(clause)) => Ok(clause.clause()),
            },
        }
    }

    /// The stored long clause with the given key, mutably.
    ///
    /// Fails if the key is not to a long clause, is to a removed clause, or was never issued.
    pub fn get_long_mut(&mut self, key: &ClauseKey) -> Result<&mut DBClause, ClauseDBError> {
        match key {
            ClauseKey::OriginalBinary(_) | ClauseKey::AdditionBinary(_) => {
                Err(ClauseDBError::InvalidKeyIndex)
            }

            ClauseKey::Original(index) => self
                .original
                .get_mut(*index as usize)
                .ok_or(ClauseDBError::InvalidKeyIndex),

            ClauseKey::Addition(index, _) => match self.addition.get_mut(*index as usize) {
                None => Err(ClauseDBError::InvalidKeyIndex),
                Some(None) => Err(ClauseDBError::Missing),
                Some(Some(clause)) if clause.key() != *key => Err(ClauseDBError::InvalidKeyToken),
                Some(Some(clause)) => Ok(clause),
            },
        }
    }
}
