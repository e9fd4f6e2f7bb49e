use crate::{config::Activity, db::atom::AtomDB, structures::atom::Atom};

/// The factor activities are scaled by, when some activity grows too large.
const RESCALE: Activity = 1e-100;

/// Methods for inspecting and mutating the activity of atoms.
///
/// The role of these methods is tied to the use of [VSIDS](crate::config::vsids).
impl AtomDB {
    /// Pops the most active atom from the activity heap.
    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }

    /// The acitivty of an atom, regardless of whether it is on the activity heap.
    pub fn activity_of(&self, atom: Atom) -> Activity {
        *self.activity_heap.value_at(atom as usize)
    }

    /// Bumps the activity of an atom and updates its position on the activity heap, if the atom is on the activity heap.
    ///
    /// If the bumped activity would be greater than the maximum allowed activity, the activity of every atom is rescaled first.
    pub fn bump_activity(&mut self, atom: Atom) {
        if self.activity_of(atom) + self.config.bump.value > self.config.bump.max {
            self.rescore_activity();
        }
        self.activity_heap.revalue(
            atom as usize,
            self.activity_of(atom) + self.config.bump.value,
        );
        self.activity_heap.heapify_if_active(atom as usize);
    }

    /// Increase the activity bump applied to atoms by a factor, to decay the relative activity of every atom.
    pub fn exponent_activity(&mut self) {
        let factor = 1.0 / (1.0 - self.config.decay.value);
        self.config.bump.value *= factor;
        if self.config.bump.value > self.config.bump.max {
            self.rescore_activity();
        }
    }

    /// Rescales the activity of all atoms and the activity bump.
    pub fn rescore_activity(&mut self) {
        self.activity_heap.apply_to_all(|v| v * RESCALE);
        self.config.bump.value *= RESCALE;
        self.activity_heap.heapify();
    }
}
