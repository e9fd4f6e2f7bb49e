use std::cmp::Ordering;

use crate::config::{Activity, LBD};

/// The activity and LBD of a clause, ordered by usefulness.
///
/// A clause is *greater* than another if it is less useful: a higher LBD, or for equal LBD a lower activity.
/// So, the top of a max heap of clauses is the first candidate for removal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActivityLBD {
    pub activity: Activity,
    pub lbd: LBD,
}

impl PartialOrd for ActivityLBD {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.lbd.cmp(&other.lbd) {
            Ordering::Equal => other.activity.partial_cmp(&self.activity),
            ordering => Some(ordering),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usefulness() {
        let glue = ActivityLBD {
            activity: 1.0,
            lbd: 2,
        };
        let loose = ActivityLBD {
            activity: 8.0,
            lbd: 6,
        };
        let idle = ActivityLBD {
            activity: 0.5,
            lbd: 2,
        };

        assert!(loose > glue);
        assert!(idle > glue);
        assert!(loose > idle);
    }
}
