/*!
An iterator over the luby sequence, used to schedule restarts.

See <https://oeis.org/A182105> for details on the sequence.

Terms are generated by Knuth's 'reluctant doubling' formulation, where a pair (*u*, *v*) steps to (*u* + 1, 1) if *u* & -*u* = *v*, and to (*u*, 2*v*) otherwise, with *v* the term.

```rust
# use burrow_sat::generic::luby::Luby;
let terms = Luby::default().take(7).collect::<Vec<_>>();
assert_eq!(terms, vec![1, 1, 2, 1, 1, 2, 4]);
```
*/

/// Representation used for terms of the sequence.
pub type LubyRepresentation = u32;

/// The state of the sequence.
#[derive(Clone, Debug)]
pub struct Luby {
    u: LubyRepresentation,
    v: LubyRepresentation,
    term: LubyRepresentation,
}

impl Default for Luby {
    fn default() -> Self {
        Luby { u: 1, v: 1, term: 1 }
    }
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        let term = self.v;
        if self.u & self.u.wrapping_neg() == self.v {
            self.u = self.u.checked_add(1)?;
            self.v = 1;
        } else {
            self.v = self.v.checked_mul(2)?;
        }
        self.term = term;
        Some(term)
    }
}

impl Luby {
    /// The most recently generated term, or the first term if no term has been generated.
    pub fn term(&self) -> LubyRepresentation {
        self.term
    }
}
