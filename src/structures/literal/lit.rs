/*!
Literals as handed to clients of a context.

A [Lit] pairs a [CLiteral] with the [tag](crate::context::ContextTag) of the context which allocated the atom of the literal.
Contexts reject literals carrying a tag other than their own, so a literal from one context can't silently refer to an unrelated atom of another.

The exceptions are [Lit::TRUE] and [Lit::FALSE], which carry the [universal](crate::context::ContextTag::UNIVERSAL) tag and are accepted by every context.

```rust
# use burrow_sat::structures::literal::Lit;
assert_eq!(-Lit::TRUE, Lit::FALSE);
assert!(Lit::FALSE.is_constant());
assert!(!Lit::FALSE.polarity());
```
*/

use crate::{
    context::ContextTag,
    structures::{
        atom::{Atom, TOP_ATOM},
        literal::{CLiteral, Literal},
    },
};

/// A literal of some context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lit {
    tag: ContextTag,
    literal: CLiteral,
}

impl Lit {
    /// The literal which is true on every valuation, of every context.
    pub const TRUE: Lit = Lit {
        tag: ContextTag::UNIVERSAL,
        literal: CLiteral::fresh(TOP_ATOM, true),
    };

    /// The literal which is false on every valuation, of every context.
    pub const FALSE: Lit = Lit {
        tag: ContextTag::UNIVERSAL,
        literal: CLiteral::fresh(TOP_ATOM, false),
    };

    pub(crate) fn new(tag: ContextTag, literal: CLiteral) -> Self {
        Lit { tag, literal }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Lit {
            tag: self.tag,
            literal: self.literal.negate(),
        }
    }

    /// The atom of the literal, relative to the context which allocated it.
    pub fn atom(&self) -> Atom {
        self.literal.atom()
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.literal.polarity()
    }

    /// Whether the literal is [TRUE](Lit::TRUE) or [FALSE](Lit::FALSE).
    pub fn is_constant(&self) -> bool {
        self.tag == ContextTag::UNIVERSAL
    }

    /// The tag of the context the literal belongs to.
    pub fn tag(&self) -> ContextTag {
        self.tag
    }

    pub(crate) fn canonical(&self) -> CLiteral {
        self.literal
    }
}

impl std::ops::Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.is_constant(), self.polarity()) {
            (true, true) => write!(f, "⊤"),
            (true, false) => write!(f, "⊥"),
            (false, _) => write!(f, "{}", self.literal),
        }
    }
}
