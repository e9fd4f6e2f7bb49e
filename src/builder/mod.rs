/*!
Methods for building the formula of a context: fresh atoms and clauses.

# Atoms

Atoms are allocated in sequence and never reused.
An atom handed to a client (as the atom of a [Lit]) is noted, so the literals of a context may be [enumerated](crate::context::GenericContext::literals).
Atoms introduced by an encoding are *auxiliary*, and are not noted.

# Clauses

Clauses are added on level zero, between solves, and are simplified before being stored:
- Duplicate literals are removed.
- Tautologies (clauses containing a literal and its negation) are discarded.
- Clauses with a literal true on level zero are discarded, as permanently satisfied.
- Literals false on level zero are removed.

If no literal remains the formula is unsatisfiable, and the context is marked as inconsistent.
If one literal remains the literal is asserted on level zero.
Otherwise, the clause is stored in the [clause database](crate::db::clause).

```rust
# use burrow_sat::context::Context;
# use burrow_sat::builder::ClauseOk;
# use burrow_sat::structures::literal::Lit;
let mut context = Context::default();
let p = context.fresh_literal().unwrap();
let q = context.fresh_literal().unwrap();

assert_eq!(context.add_clause(&[p, -p]), Ok(ClauseOk::Tautology));
assert_eq!(context.add_clause(&[p, q, p]), Ok(ClauseOk::Added));
assert_eq!(context.add_clause(&[Lit::FALSE, q]), Ok(ClauseOk::Unit));
assert_eq!(context.add_clause(&[p, q]), Ok(ClauseOk::Satisfied));
assert_eq!(context.add_clause(&[-q]), Ok(ClauseOk::Falsified));
assert!(context.is_inconsistent());
```
*/

mod clauses;
pub use clauses::ClauseOk;

use crate::{
    context::GenericContext,
    structures::{
        atom::Atom,
        literal::{CLiteral, Lit, Literal},
    },
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A fresh atom, ready for use in each database.
    fn fresh_atom_internal(&mut self) -> Result<Atom, ErrorKind> {
        self.ensure_usable()?;
        self.note_revision();

        let previous_value = self.rng.random_bool(self.config.polarity_lean.value);
        match self.atom_db.fresh_atom(previous_value) {
            Ok(atom) => {
                self.watches.ensure_atom(atom);
                Ok(atom)
            }
            Err(e) => {
                let error = ErrorKind::from(e);
                self.note_error(&error);
                Err(error)
            }
        }
    }

    /// The positive literal of a fresh atom.
    ///
    /// Invalidates any model, as the formula is revised.
    pub fn fresh_literal(&mut self) -> Result<Lit, ErrorKind> {
        let atom = self.fresh_atom_internal()?;
        self.client_atoms.push(atom);
        Ok(Lit::new(self.tag, CLiteral::new(atom, true)))
    }

    /// The positive literals of `count` fresh atoms.
    pub fn fresh_literals(&mut self, count: usize) -> Result<Vec<Lit>, ErrorKind> {
        (0..count).map(|_| self.fresh_literal()).collect()
    }

    /// The positive literal of a fresh auxiliary atom, for use within an encoding.
    pub(crate) fn fresh_auxiliary(&mut self) -> Result<CLiteral, ErrorKind> {
        let atom = self.fresh_atom_internal()?;
        Ok(CLiteral::new(atom, true))
    }
}
