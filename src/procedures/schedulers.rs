/*!
Schedulers, used to interrupt a solve for some task.

These return true if an interrupt is due, and false otherwise.

- Restarts follow the luby sequence, scaled by [luby_u](crate::config::Config::luby_u).
- Reductions of learnt clauses follow restarts, at an interval of [reduction_interval](crate::config::Config::reduction_interval).
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Whether conflicts since the last restart have reached the current luby element, scaled.
    pub fn luby_fresh_conflict_interrupt(&self) -> bool {
        self.counters.fresh_conflicts
            >= self
                .config
                .luby_u
                .value
                .saturating_mul(self.counters.luby.term())
    }

    /// Whether the count of restarts is a multiple of the configured interval.
    pub fn restart_interrupt(&self) -> bool {
        self.counters.restarts % (self.config.reduction_interval.value as usize) == 0
    }

    /// Whether the conflicts of the current solve have reached the configured limit, if any.
    pub fn conflict_limit_interrupt(&self) -> bool {
        let limit = self.config.conflict_limit.value;
        limit != 0 && self.counters.solve_conflicts >= limit
    }

    /// Whether the time of the current solve has passed the configured limit, if any.
    pub fn time_limit_interrupt(&self) -> bool {
        let limit = self.config.time_limit.value;
        !limit.is_zero() && self.counters.time > limit
    }

    /// Restarts the solve, and reduces learnt clauses if due.
    ///
    /// Every level above zero is cleared, so the reduction is safe.
    pub fn restart(&mut self) {
        self.clear_decisions();
        self.counters.luby.next();
        self.counters.fresh_conflicts = 0;
        self.counters.restarts += 1;
        log::debug!(target: targets::CONTEXT, "Restart {}", self.counters.restarts);

        if self.config.reduction.value && self.restart_interrupt() {
            self.clause_db.reduce();
            self.counters.reductions += 1;
        }
    }
}
