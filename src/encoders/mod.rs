/*!
Encodings of gates and cardinality constraints as clauses.

# Gates

A gate returns a fresh output literal *o*, together with clauses which fix *o* as equivalent to some function of the inputs.
Both directions of each equivalence are encoded, so a model values *o* as the function of the inputs on the model, and any valuation of the inputs extends to a model of the gate clauses.

The output of a gate is an ordinary literal of the context, and may be used as the input to some other gate, in a clause, or as an assumption.
Any intermediate atoms of an encoding (e.g. for a chain of exclusive ors) are *auxiliary*, and are not listed among the [literals](crate::context::GenericContext::literals) of a context.

Assertions (`assert_and`, etc.) add clauses requiring the function to be true, without a fresh output.

```rust
# use burrow_sat::context::Context;
let mut context = Context::default();
let p = context.fresh_literal().unwrap();
let q = context.fresh_literal().unwrap();

let same = context.xnor(&[p, q]).unwrap();

assert_eq!(context.solve(&[same, p, -q]), Ok(false));
assert_eq!(context.solve(&[same, -p]), Ok(true));
assert_eq!(context.value(q), Ok(false));
```

# Cardinality

[add_at_most_one](crate::context::GenericContext::add_at_most_one) requires at most one of some literals to be true.
See [cardinality] for the encodings available.
*/

pub mod cardinality;
pub mod gates;

use crate::{
    context::GenericContext,
    structures::{clause::CClause, literal::{CLiteral, Lit}},
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Applies `encoding` to the canonical literals of `lits`, marking the context as failed on a resource error.
    pub(crate) fn encode<T>(
        &mut self,
        lits: &[Lit],
        encoding: impl FnOnce(&mut Self, Vec<CLiteral>) -> Result<T, ErrorKind>,
    ) -> Result<T, ErrorKind> {
        self.ensure_usable()?;
        let literals = self.canonical_literals(lits)?;
        self.note_revision();

        let result = encoding(self, literals);
        if let Err(e) = &result {
            self.note_error(e);
        }
        result
    }

    /// Adds a clause of an encoding.
    pub(crate) fn add_encoded_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        self.add_clause_canonical(clause).map(|_| ())
    }
}
