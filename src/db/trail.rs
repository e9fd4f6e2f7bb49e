/*!
The trail: every assignment made, in order, partitioned into levels.

Level zero holds assignments which follow from the formula alone, and each further level begins with a decision (or an assumption).
The trail also tracks the head of the propagation queue, as every assignment past `q_head` is yet to be propagated.
*/

use crate::structures::literal::CLiteral;

use super::LevelIndex;

#[derive(Default)]
pub struct Trail {
    /// Every assignment, in order of assignment.
    pub literals: Vec<CLiteral>,

    /// Indicies at which a level (above zero) begins.
    pub level_indicies: Vec<usize>,

    /// Location of the first assignment which has not been propagated.
    pub q_head: usize,
}

impl Trail {
    /// Stores an assignment on the top level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Opens a fresh level.
    pub fn open_level(&mut self) {
        self.level_indicies.push(self.literals.len());
    }

    /// Removes levels above the given level index, returning the removed assignments in order of assignment.
    pub fn forget_levels_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        match self.level_indicies.get(level as usize) {
            Some(&start) => {
                self.level_indicies.truncate(level as usize);
                let removed = self.literals.split_off(start);
                self.q_head = std::cmp::min(self.q_head, self.literals.len());
                removed
            }
            None => Vec::default(),
        }
    }

    /// The next assignment to propagate, if any, advancing the head of the queue.
    pub fn next_to_propagate(&mut self) -> Option<CLiteral> {
        let literal = self.literals.get(self.q_head).copied()?;
        self.q_head += 1;
        Some(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn levels() {
        let mut trail = Trail::default();
        trail.store_assignment(CLiteral::new(0, true));
        trail.open_level();
        trail.store_assignment(CLiteral::new(1, true));
        trail.store_assignment(CLiteral::new(2, false));
        trail.open_level();
        trail.store_assignment(CLiteral::new(3, true));

        assert_eq!(trail.level(), 2);
        assert_eq!(trail.level_indicies, vec![1, 3]);

        while trail.next_to_propagate().is_some() {}
        assert_eq!(trail.q_head, 4);

        let removed = trail.forget_levels_above(0);
        assert_eq!(removed.len(), 3);
        assert_eq!(trail.level(), 0);
        assert_eq!(trail.q_head, 1);
        assert!(trail.forget_levels_above(4).is_empty());
    }
}
