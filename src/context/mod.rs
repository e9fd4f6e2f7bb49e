/*!
The context, to which formulas are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, and a [Context] fixes the source as [MinimalPCG32](crate::generic::random::MinimalPCG32).
[from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

Each context is independent of every other context.
The only shared state is the counter issuing [ContextTag]s, which are carried by each [Lit] to catch use of a literal with the wrong context.

# Example
```rust
# use burrow_sat::context::Context;
# use burrow_sat::config::Config;
# use burrow_sat::structures::literal::Lit;
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_literal().unwrap();
let q = the_context.fresh_literal().unwrap();

assert!(the_context.add_clause(&[p, q]).is_ok());
assert!(the_context.add_clause(&[-p]).is_ok());

assert_eq!(the_context.solve(&[]), Ok(true));
assert_eq!(the_context.value(p), Ok(false));
assert_eq!(the_context.value(q), Ok(true));

assert_eq!(the_context.solve(&[-q]), Ok(false));
assert_eq!(the_context.solve(&[Lit::TRUE]), Ok(true));

assert!(the_context.dispose().is_ok());
assert!(the_context.solve(&[]).is_err());
```

# Lifecycle

- A fresh context is in the [Input](ContextState::Input) state.
- A solve moves the context through [Solving](ContextState::Solving) to one of [Satisfiable](ContextState::Satisfiable), [Unsatisfiable](ContextState::Unsatisfiable), or [Unknown](ContextState::Unknown).
- Any revision to the formula returns the context to the input state, and invalidates any model.
- After [dispose](GenericContext::dispose) the context is [Disposed](ContextState::Disposed), and every operation fails.
- If some resource is exhausted, the context is [Failed](ContextState::Failed), and every operation fails.
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::{GenericContext, Literals};
mod specific;
pub use specific::Context;
mod tag;
pub use tag::ContextTag;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The state of a context.
pub enum ContextState {
    /// The context allows input, and the satisfiability of the formula is unknown.
    Input,

    /// A solve is in progress.
    Solving,

    /// The most recent solve found a model.
    Satisfiable,

    /// The most recent solve found the formula (with any assumptions) to be unsatisfiable.
    Unsatisfiable,

    /// The most recent solve was interrupted before satisfiability was determined.
    Unknown,

    /// The context has been disposed.
    Disposed,

    /// The context exhausted some resource.
    Failed,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
            Self::Disposed => write!(f, "Disposed"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}
