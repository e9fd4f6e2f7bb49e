/*!
General callbacks associated with a context.

Callbacks may be mutable functions, though are required to be [Send] so a context with a callback may move between threads.
*/

use super::GenericContext;

/// A callback polled during a solve, which stops the solve when true.
pub type CallbackTerminate = dyn FnMut() -> bool + Send;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Sets a callback polled during each solve, where a return of `true` ends the solve with an [Unknown](crate::reports::Report::Unknown) report.
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    /// Removes the terminate callback, if set.
    pub fn clear_callback_terminate(&mut self) {
        self.callback_terminate = None;
    }

    pub(crate) fn check_callback_terminate(&mut self) -> bool {
        match &mut self.callback_terminate {
            Some(callback) => callback(),
            None => false,
        }
    }
}
