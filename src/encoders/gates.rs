/*!
Tseitin encodings of boolean gates.

For a gate with output *o* and inputs *l1*, …, *ln*:

| Gate | Clauses |
|---|---|
| and | (-o ∨ li) for each i, and (o ∨ -l1 ∨ … ∨ -ln) |
| or | (o ∨ -li) for each i, and (-o ∨ l1 ∨ … ∨ ln) |
| xor of two | (-o ∨ a ∨ b), (-o ∨ -a ∨ -b), (o ∨ -a ∨ b), (o ∨ a ∨ -b) |
| ite | (-c ∨ -t ∨ o), (-c ∨ t ∨ -o), (c ∨ -e ∨ o), (c ∨ e ∨ -o), (-t ∨ -e ∨ o), (t ∨ e ∨ -o) |

Negated gates (nand, nor, xor) are the negated outputs of the corresponding gates, without further clauses.

An exclusive or of more than two literals is a chain of two-literal exclusive ors, each with an auxiliary output.
So, xnor(*l1*, …, *ln*) is true exactly when an even number of *l1*, …, *ln* are true.

With no inputs, and is true while or and xor are false.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::TOP_ATOM,
        literal::{CLiteral, Lit, Literal},
    },
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The canonical literal of a fresh output atom, listed among the literals of the context.
    fn fresh_output(&mut self) -> Result<CLiteral, ErrorKind> {
        Ok(self.fresh_literal()?.canonical())
    }

    /// Encodes `o` ⇔ (`a` ⊕ `b`).
    fn encode_xor(&mut self, o: CLiteral, a: CLiteral, b: CLiteral) -> Result<(), ErrorKind> {
        self.add_encoded_clause(vec![-o, a, b])?;
        self.add_encoded_clause(vec![-o, -a, -b])?;
        self.add_encoded_clause(vec![o, -a, b])?;
        self.add_encoded_clause(vec![o, a, -b])
    }

    /// Encodes `a` ⇔ `b`.
    fn encode_equivalence(&mut self, a: CLiteral, b: CLiteral) -> Result<(), ErrorKind> {
        self.add_encoded_clause(vec![-a, b])?;
        self.add_encoded_clause(vec![a, -b])
    }

    /// A literal equivalent to the exclusive or of `literals`.
    ///
    /// For no literals this is the false literal, for a single literal this is the literal, and otherwise the output of a chain of auxiliary exclusive ors.
    fn xor_chain(&mut self, literals: &[CLiteral]) -> Result<CLiteral, ErrorKind> {
        let Some((first, rest)) = literals.split_first() else {
            return Ok(CLiteral::new(TOP_ATOM, false));
        };

        let mut accumulator = *first;
        for literal in rest {
            let auxiliary = self.fresh_auxiliary()?;
            self.encode_xor(auxiliary, accumulator, *literal)?;
            accumulator = auxiliary;
        }
        Ok(accumulator)
    }

    /// Encodes `o` ⇔ (`literals[0]` ∧ … ∧ `literals[n]`).
    fn encode_and(&mut self, o: CLiteral, literals: &[CLiteral]) -> Result<(), ErrorKind> {
        for literal in literals {
            self.add_encoded_clause(vec![-o, *literal])?;
        }
        let mut long = vec![o];
        long.extend(literals.iter().map(|literal| -*literal));
        self.add_encoded_clause(long)
    }

    /// Encodes `o` ⇔ (`literals[0]` ∨ … ∨ `literals[n]`).
    fn encode_or(&mut self, o: CLiteral, literals: &[CLiteral]) -> Result<(), ErrorKind> {
        for literal in literals {
            self.add_encoded_clause(vec![o, -*literal])?;
        }
        let mut long = vec![-o];
        long.extend(literals.iter().copied());
        self.add_encoded_clause(long)
    }

    /// A fresh literal equivalent to the exclusive nor of `lits`, true exactly when an even number of `lits` are true.
    ///
    /// ```rust
    /// # use burrow_sat::context::Context;
    /// let mut context = Context::default();
    /// let lits = context.fresh_literals(3).unwrap();
    /// let o = context.xnor(&lits).unwrap();
    ///
    /// assert_eq!(context.solve(&[lits[0], lits[1], -lits[2]]), Ok(true));
    /// assert_eq!(context.value(o), Ok(true));
    ///
    /// assert_eq!(context.solve(&[lits[0], lits[1], lits[2]]), Ok(true));
    /// assert_eq!(context.value(o), Ok(false));
    /// ```
    pub fn xnor(&mut self, lits: &[Lit]) -> Result<Lit, ErrorKind> {
        self.encode(lits, |context, literals| {
            let o = context.fresh_output()?;
            log::trace!(target: targets::ENCODER, "xnor of {} literals to {o}", literals.len());

            match literals.split_last() {
                None => context.add_encoded_clause(vec![o])?,
                Some((last, [])) => context.encode_equivalence(-o, *last)?,
                Some((last, rest)) => {
                    let accumulator = context.xor_chain(rest)?;
                    context.encode_xor(-o, accumulator, *last)?;
                }
            }

            Ok(context.client_literal(o))
        })
    }

    /// A fresh literal equivalent to the exclusive or of `lits`, true exactly when an odd number of `lits` are true.
    pub fn xor(&mut self, lits: &[Lit]) -> Result<Lit, ErrorKind> {
        Ok(-self.xnor(lits)?)
    }

    /// A fresh literal equivalent to the conjunction of `lits`.
    pub fn and(&mut self, lits: &[Lit]) -> Result<Lit, ErrorKind> {
        self.encode(lits, |context, literals| {
            let o = context.fresh_output()?;
            log::trace!(target: targets::ENCODER, "and of {} literals to {o}", literals.len());
            context.encode_and(o, &literals)?;
            Ok(context.client_literal(o))
        })
    }

    /// A fresh literal equivalent to the disjunction of `lits`.
    pub fn or(&mut self, lits: &[Lit]) -> Result<Lit, ErrorKind> {
        self.encode(lits, |context, literals| {
            let o = context.fresh_output()?;
            log::trace!(target: targets::ENCODER, "or of {} literals to {o}", literals.len());
            context.encode_or(o, &literals)?;
            Ok(context.client_literal(o))
        })
    }

    /// A fresh literal equivalent to the negated conjunction of `lits`.
    pub fn nand(&mut self, lits: &[Lit]) -> Result<Lit, ErrorKind> {
        Ok(-self.and(lits)?)
    }

    /// A fresh literal equivalent to the negated disjunction of `lits`.
    pub fn nor(&mut self, lits: &[Lit]) -> Result<Lit, ErrorKind> {
        Ok(-self.or(lits)?)
    }

    /// The negation of `lit`, checked as a literal of the context.
    ///
    /// No clauses are added.
    pub fn not(&self, lit: Lit) -> Result<Lit, ErrorKind> {
        self.ensure_usable()?;
        self.canonical_literal(&lit)?;
        Ok(-lit)
    }

    /// A fresh literal equivalent to `a` → `b`.
    pub fn implies(&mut self, a: Lit, b: Lit) -> Result<Lit, ErrorKind> {
        self.or(&[-a, b])
    }

    /// A fresh literal equivalent to `a` ⇔ `b`.
    pub fn equal(&mut self, a: Lit, b: Lit) -> Result<Lit, ErrorKind> {
        self.xnor(&[a, b])
    }

    /// A fresh literal equivalent to `then_lit` if `condition` is true, and to `else_lit` otherwise.
    pub fn ite(&mut self, condition: Lit, then_lit: Lit, else_lit: Lit) -> Result<Lit, ErrorKind> {
        self.encode(&[condition, then_lit, else_lit], |context, literals| {
            let [c, t, e] = [literals[0], literals[1], literals[2]];
            let o = context.fresh_output()?;
            log::trace!(target: targets::ENCODER, "ite of {c} {t} {e} to {o}");

            context.add_encoded_clause(vec![-c, -t, o])?;
            context.add_encoded_clause(vec![-c, t, -o])?;
            context.add_encoded_clause(vec![c, -e, o])?;
            context.add_encoded_clause(vec![c, e, -o])?;
            context.add_encoded_clause(vec![-t, -e, o])?;
            context.add_encoded_clause(vec![t, e, -o])?;

            Ok(context.client_literal(o))
        })
    }

    /// Requires each of `lits` to be true.
    pub fn assert_and(&mut self, lits: &[Lit]) -> Result<(), ErrorKind> {
        self.encode(lits, |context, literals| {
            for literal in literals {
                context.add_encoded_clause(vec![literal])?;
            }
            Ok(())
        })
    }

    /// Requires some of `lits` to be true.
    ///
    /// With no literals, the formula becomes unsatisfiable.
    pub fn assert_or(&mut self, lits: &[Lit]) -> Result<(), ErrorKind> {
        self.encode(lits, |context, literals| context.add_encoded_clause(literals))
    }

    /// Requires some of `lits` to be false.
    ///
    /// With no literals, the formula becomes unsatisfiable.
    pub fn assert_nand(&mut self, lits: &[Lit]) -> Result<(), ErrorKind> {
        self.encode(lits, |context, literals| {
            context.add_encoded_clause(literals.into_iter().map(|literal| -literal).collect())
        })
    }

    /// Requires each of `lits` to be false.
    pub fn assert_nor(&mut self, lits: &[Lit]) -> Result<(), ErrorKind> {
        self.encode(lits, |context, literals| {
            for literal in literals {
                context.add_encoded_clause(vec![-literal])?;
            }
            Ok(())
        })
    }

    /// Requires an odd number of `lits` to be true.
    ///
    /// With no literals, the formula becomes unsatisfiable.
    pub fn assert_xor(&mut self, lits: &[Lit]) -> Result<(), ErrorKind> {
        self.encode(lits, |context, literals| match literals.split_last() {
            None => context.add_encoded_clause(Vec::default()),
            Some((last, rest)) => {
                let accumulator = context.xor_chain(rest)?;
                context.encode_equivalence(accumulator, -*last)
            }
        })
    }

    /// Requires an even number of `lits` to be true.
    pub fn assert_xnor(&mut self, lits: &[Lit]) -> Result<(), ErrorKind> {
        self.encode(lits, |context, literals| match literals.split_last() {
            None => Ok(()),
            Some((last, rest)) => {
                let accumulator = context.xor_chain(rest)?;
                context.encode_equivalence(accumulator, *last)
            }
        })
    }

    /// Requires `a` to imply `b`.
    pub fn assert_implies(&mut self, a: Lit, b: Lit) -> Result<(), ErrorKind> {
        self.assert_or(&[-a, b])
    }

    /// Requires `a` and `b` to have the same value.
    pub fn assert_equal(&mut self, a: Lit, b: Lit) -> Result<(), ErrorKind> {
        self.encode(&[a, b], |context, literals| {
            context.encode_equivalence(literals[0], literals[1])
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::context::Context;

    #[test]
    fn empty_gates() {
        let mut context = Context::default();
        let and = context.and(&[]).unwrap();
        let or = context.or(&[]).unwrap();
        let xnor = context.xnor(&[]).unwrap();

        assert_eq!(context.solve(&[]), Ok(true));
        assert_eq!(context.value(and), Ok(true));
        assert_eq!(context.value(or), Ok(false));
        assert_eq!(context.value(xnor), Ok(true));
    }

    #[test]
    fn single_xnor_negates() {
        let mut context = Context::default();
        let p = context.fresh_literal().unwrap();
        let o = context.xnor(&[p]).unwrap();

        assert_eq!(context.solve(&[p]), Ok(true));
        assert_eq!(context.value(o), Ok(false));
        assert_eq!(context.solve(&[-p]), Ok(true));
        assert_eq!(context.value(o), Ok(true));
    }

    #[test]
    fn chain_auxiliaries_are_hidden() {
        let mut context = Context::default();
        let lits = context.fresh_literals(4).unwrap();
        let _ = context.xnor(&lits).unwrap();

        // The constant, four inputs, and the output.
        assert_eq!(context.literals().unwrap().len(), 6);
        // And two auxiliary atoms for the chain, with the top atom.
        assert_eq!(context.atom_count(), 8);
    }

    #[test]
    fn ite_selects() {
        let mut context = Context::default();
        let [c, t, e] = [
            context.fresh_literal().unwrap(),
            context.fresh_literal().unwrap(),
            context.fresh_literal().unwrap(),
        ];
        let o = context.ite(c, t, e).unwrap();

        assert_eq!(context.solve(&[c, t, -e]), Ok(true));
        assert_eq!(context.value(o), Ok(true));
        assert_eq!(context.solve(&[-c, t, -e]), Ok(true));
        assert_eq!(context.value(o), Ok(false));
    }

    #[test]
    fn assert_xor_parity() {
        let mut context = Context::default();
        let lits = context.fresh_literals(3).unwrap();
        context.assert_xor(&lits).unwrap();

        assert_eq!(context.solve(&[lits[0], lits[1], lits[2]]), Ok(true));
        assert_eq!(context.solve(&[lits[0], lits[1]]), Ok(true));
        assert_eq!(context.value(lits[2]), Ok(true));
        assert_eq!(context.solve(&[lits[0], -lits[1], lits[2]]), Ok(false));
    }
}
