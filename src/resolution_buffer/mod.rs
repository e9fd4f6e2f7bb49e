/*!
Scratch space for conflict analysis.

Analysis marks atoms as *seen* while resolving through the reasons of a conflict, and clause minimization extends the marks while checking whether a literal is implied by the rest of a learnt clause.
The buffer keeps these marks (and the stack used during minimization) between conflicts, so no allocation is required in the common case.

Every mark is cleared at the end of each analysis.
*/

use crate::structures::{atom::Atom, literal::CLiteral};

#[derive(Default)]
pub struct ResolutionBuffer {
    /// Whether each atom has been seen during the current analysis.
    pub seen: Vec<bool>,

    /// Atoms marked as seen, to be cleared.
    pub to_clear: Vec<Atom>,

    /// A stack of literals to examine during minimization.
    pub stack: Vec<CLiteral>,
}

impl ResolutionBuffer {
    /// Ensures a mark exists for each of `atom_count` atoms.
    pub fn refresh(&mut self, atom_count: usize) {
        if self.seen.len() < atom_count {
            self.seen.resize(atom_count, false);
        }
    }

    /// Marks `atom` as seen, noting the mark for clearing.
    pub fn mark(&mut self, atom: Atom) {
        self.seen[atom as usize] = true;
        self.to_clear.push(atom);
    }

    /// Whether `atom` has been seen.
    pub fn is_seen(&self, atom: Atom) -> bool {
        self.seen[atom as usize]
    }

    /// Clears marks made since `to_clear` held `from` atoms.
    pub fn clear_from(&mut self, from: usize) {
        for atom in self.to_clear.drain(from..) {
            self.seen[atom as usize] = false;
        }
    }

    /// Clears every mark.
    pub fn clear(&mut self) {
        self.clear_from(0);
        self.stack.clear();
    }
}
