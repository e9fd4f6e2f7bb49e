/*!
A pool of contexts, addressed by generational keys.

Each context of a pool is independent, and the pool only tracks which contexts are live.
A key is invalidated when its context is disposed, and as keys are generational a key is never reused for some other context.

```rust
# use burrow_sat::pool::Pool;
# use burrow_sat::config::Config;
let mut pool = Pool::default();
let first = pool.create(Config::default());
let second = pool.create_from_args(&["--seed=3"]).unwrap();

let p = pool.get_mut(first).unwrap().fresh_literal().unwrap();
assert_eq!(pool.get_mut(first).unwrap().solve(&[p]), Ok(true));
assert!(pool.get_mut(second).unwrap().solve(&[p]).is_err());

assert!(pool.dispose(first).is_ok());
assert!(pool.get(first).is_err());
assert!(pool.dispose(first).is_err());
assert_eq!(pool.len(), 1);
```
*/

use slotmap::SlotMap;

use crate::{
    config::Config,
    context::Context,
    misc::log::targets::{self},
    types::err::{ErrorKind, StateError},
};

slotmap::new_key_type! {
    /// A key to a context of a [Pool].
    pub struct ContextKey;
}

/// Live contexts, by key.
#[derive(Default)]
pub struct Pool {
    contexts: SlotMap<ContextKey, Context>,
}

impl Pool {
    /// Creates a context from `config`, returning its key.
    pub fn create(&mut self, config: Config) -> ContextKey {
        self.contexts.insert(Context::from_config(config))
    }

    /// Creates a context from `--name=value` options, returning its key.
    pub fn create_from_args<S: AsRef<str>>(&mut self, args: &[S]) -> Result<ContextKey, ErrorKind> {
        Ok(self.contexts.insert(Context::from_args(args)?))
    }

    /// The context with key `key`, if live.
    pub fn get(&self, key: ContextKey) -> Result<&Context, ErrorKind> {
        self.contexts.get(key).ok_or(StateError::Disposed.into())
    }

    /// The context with key `key`, mutably, if live.
    pub fn get_mut(&mut self, key: ContextKey) -> Result<&mut Context, ErrorKind> {
        self.contexts.get_mut(key).ok_or(StateError::Disposed.into())
    }

    /// Disposes the context with key `key`, and removes it from the pool.
    pub fn dispose(&mut self, key: ContextKey) -> Result<(), ErrorKind> {
        let mut context = self
            .contexts
            .remove(key)
            .ok_or(ErrorKind::from(StateError::Disposed))?;
        log::debug!(target: targets::CONTEXT, "Pool released context {}", context.tag());
        context.dispose()
    }

    /// A count of live contexts.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Whether the pool has no live contexts.
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
