/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, intended to help with extending the library or fixing issues.

No log implementation is provided, and in release builds log calls are compiled out.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to clause deletion
    pub const REDUCTION: &str = "reduction";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to [encoders](crate::encoders)
    pub const ENCODER: &str = "encoder";

    /// Logs related to the lifecycle of a [context](crate::context)
    pub const CONTEXT: &str = "context";
}
