/*!
Encodings of at-most-one constraints.

# Pairwise

For each pair of literals *li*, *lj* the clause (-*li* ∨ -*lj*).
No auxiliary atoms are required, though the count of clauses is quadratic in the count of literals.

# Sequential

The 'ladder' encoding of [Sinz](https://doi.org/10.1007/11564751_73), with an auxiliary atom *si* for each literal but the last, read as 'some literal up to *li* is true':

- (-*l1* ∨ *s1*)
- (-*li* ∨ *si*), (-*si-1* ∨ *si*), and (-*li* ∨ -*si-1*) for 1 < *i* < *n*
- (-*ln* ∨ -*sn-1*)

The count of clauses is linear in the count of literals.

# Adaptive

Pairwise for at most [amo_pairwise_limit](crate::config::Config::amo_pairwise_limit) literals, and sequential otherwise.

In each case a literal given twice may not be true, and with fewer than two literals nothing is encoded.
*/

use crate::{
    config::AMOEncoding,
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Lit},
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Requires at most one of `lits` to be true.
    ///
    /// ```rust
    /// # use burrow_sat::context::Context;
    /// let mut context = Context::default();
    /// let lits = context.fresh_literals(3).unwrap();
    /// context.add_at_most_one(&lits).unwrap();
    ///
    /// assert_eq!(context.solve(&[lits[0]]), Ok(true));
    /// assert_eq!(context.value(lits[1]), Ok(false));
    /// assert_eq!(context.solve(&[lits[1], lits[2]]), Ok(false));
    /// ```
    pub fn add_at_most_one(&mut self, lits: &[Lit]) -> Result<(), ErrorKind> {
        self.encode(lits, |context, literals| {
            if literals.len() < 2 {
                return Ok(());
            }

            let encoding = match context.config.amo_encoding.value {
                AMOEncoding::Adaptive if literals.len() <= context.config.amo_pairwise_limit.value => {
                    AMOEncoding::Pairwise
                }
                AMOEncoding::Adaptive => AMOEncoding::Sequential,
                other => other,
            };
            log::trace!(target: targets::ENCODER, "{encoding} at-most-one of {} literals", literals.len());

            match encoding {
                AMOEncoding::Pairwise | AMOEncoding::Adaptive => context.encode_amo_pairwise(&literals),
                AMOEncoding::Sequential => context.encode_amo_sequential(&literals),
            }
        })
    }

    fn encode_amo_pairwise(&mut self, literals: &[CLiteral]) -> Result<(), ErrorKind> {
        for (index, first) in literals.iter().enumerate() {
            for second in &literals[index + 1..] {
                self.add_encoded_clause(vec![-*first, -*second])?;
            }
        }
        Ok(())
    }

    fn encode_amo_sequential(&mut self, literals: &[CLiteral]) -> Result<(), ErrorKind> {
        let Some((last, rest)) = literals.split_last() else {
            return Ok(());
        };

        let mut previous: Option<CLiteral> = None;
        for literal in rest {
            let register = self.fresh_auxiliary()?;
            self.add_encoded_clause(vec![-*literal, register])?;
            if let Some(previous) = previous {
                self.add_encoded_clause(vec![-previous, register])?;
                self.add_encoded_clause(vec![-*literal, -previous])?;
            }
            previous = Some(register);
        }

        if let Some(previous) = previous {
            self.add_encoded_clause(vec![-*last, -previous])?;
        }
        Ok(())
    }
}
