use serde::{Deserialize, Serialize};

/// Breakdown of a projection into money put in vs. money earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Rounded final balance of the projection
    pub final_total: f64,

    /// Starting principal
    pub principal: f64,

    /// Principal plus every monthly addition
    pub total_contributed: f64,

    /// final_total - total_contributed (negative on a losing projection)
    pub interest_earned: f64,

    /// Percentage return: (interest_earned / total_contributed) * 100
    pub return_pct: f64,

    /// Number of compounding months
    pub months: u64,
}
