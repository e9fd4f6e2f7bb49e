use std::str::FromStr;

/// Variant minimization criterias to use during resolution-based analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MinimizationCriteria {
    /// No clause minimization.
    None,

    /// Recursively examine the implication graph to determine whether each literal in a learnt clause follows from the other literals of the clause.
    Recursive,
}

impl MinimizationCriteria {
    pub const MIN: MinimizationCriteria = MinimizationCriteria::None;
    pub const MAX: MinimizationCriteria = MinimizationCriteria::Recursive;
}

impl std::fmt::Display for MinimizationCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Recursive => write!(f, "Recursive"),
        }
    }
}

impl FromStr for MinimizationCriteria {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" | "none" => Ok(Self::None),
            "Recursive" | "recursive" => Ok(Self::Recursive),
            _ => Err(()),
        }
    }
}
