use tracing::debug;

use crate::models::plan::{Period, PlanPoint, PlanResult};

/// Simulates a chain of savings periods, each with its own rate and
/// contribution, plus a one-off income or expense between periods.
///
/// Unlike [`CompoundingCalculator`](super::calculator::CompoundingCalculator),
/// contributions land at the END of each month (after interest), and the
/// balances are kept unrounded.
pub struct PlanService;

impl PlanService {
    pub fn new() -> Self {
        Self
    }

    /// Run every period in order and collect one point per month.
    ///
    /// Period 0 opens with its `principal`; period i > 0 opens with the
    /// previous closing balance plus its `extra_income`. An empty plan yields
    /// a zero total and no points.
    pub fn simulate(&self, periods: &[Period]) -> PlanResult {
        let mut points = Vec::new();
        let mut closing = 0.0;
        let mut month_index: u64 = 0;

        for (idx, period) in periods.iter().enumerate() {
            let mut balance = if idx == 0 {
                period.principal
            } else {
                closing + period.extra_income
            };

            let factor = 1.0 + period.annual_rate / 12.0 / 100.0;
            for _ in 0..u64::from(period.years) * 12 {
                balance *= factor;
                balance += period.monthly_addition;
                month_index += 1;
                points.push(PlanPoint::new(month_index, balance));
            }

            closing = balance;
        }

        debug!(periods = periods.len(), months = month_index, total = closing, "plan simulated");

        PlanResult {
            total: closing,
            points,
        }
    }
}

impl Default for PlanService {
    fn default() -> Self {
        Self::new()
    }
}
