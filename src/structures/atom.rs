/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either *u* is 0, or *u - 1* is an atom.
So, the atoms of a context are always some contiguous range [0..*m*), and atoms may be used directly as indicies into the structures of a context.

Atom `0` is reserved.
It is valued true when a context is created, and serves as the atom of both [Lit::TRUE](crate::structures::literal::Lit::TRUE) and [Lit::FALSE](crate::structures::literal::Lit::FALSE).

```rust
# use burrow_sat::structures::atom::{Atom, TOP_ATOM};
let atoms = (0..8).collect::<Vec<Atom>>();
assert_eq!(atoms[TOP_ATOM as usize], 0);
```

Atoms are never reused within a context.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom `0` is fixed internally with a value of true.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom.
///
/// Bounded below [Atom::MAX] so a count of atoms always fits in an atom.
pub const ATOM_MAX: Atom = Atom::MAX - 1;
