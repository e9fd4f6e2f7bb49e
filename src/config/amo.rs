/*!
Encodings of at-most-one constraints as clauses.

- Pairwise: a binary clause ¬*a* ∨ ¬*b* for each pair of literals. Quadratic in clauses, no fresh atoms.
- Sequential: the ladder (or 'sequential counter') encoding of [Sinz](https://doi.org/10.1007/11564751_73). Linear in clauses, with a fresh atom for each literal but the last.
- Adaptive: pairwise for short constraints, sequential otherwise, with the boundary set by [Config::amo_pairwise_limit](crate::config::Config::amo_pairwise_limit).
*/

use std::str::FromStr;

/// Supported at-most-one encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AMOEncoding {
    Pairwise,
    Sequential,
    Adaptive,
}

impl AMOEncoding {
    pub const MIN: AMOEncoding = AMOEncoding::Pairwise;
    pub const MAX: AMOEncoding = AMOEncoding::Adaptive;
}

impl std::fmt::Display for AMOEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pairwise => write!(f, "Pairwise"),
            Self::Sequential => write!(f, "Sequential"),
            Self::Adaptive => write!(f, "Adaptive"),
        }
    }
}

impl FromStr for AMOEncoding {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pairwise" | "pairwise" => Ok(Self::Pairwise),
            "Sequential" | "sequential" => Ok(Self::Sequential),
            "Adaptive" | "adaptive" => Ok(Self::Adaptive),
            _ => Err(()),
        }
    }
}
