/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans, where the zero index element is the value of the reserved top atom and each other index is the value of the atom with that index.

```rust
# use burrow_sat::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(false), None];

assert_eq!(valuation.atom_value_pairs().nth(2), Some((2, Some(false))));
assert_eq!(valuation.unvalued_atoms().count(), 2);
```
*/

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// An iterator through all (Atom, Value) pairs, including top.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)>;

    /// An iterator through atoms without a value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)> {
        self.iter()
            .enumerate()
            .map(|(index, value)| (index as Atom, *value))
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.atom_value_pairs()
            .filter_map(|(atom, value)| match value {
                None => Some(atom),
                Some(_) => None,
            })
    }
}
