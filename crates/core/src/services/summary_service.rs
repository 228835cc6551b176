use crate::models::projection::CalculationResult;
use crate::models::request::CalculationRequest;
use crate::models::summary::ProjectionSummary;

use super::calculator::round_cents;

/// Splits a projection into contributions and growth.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize a finished projection.
    ///
    /// - total_contributed = principal + monthly_addition × months
    /// - interest_earned = final_total - total_contributed
    /// - return_pct = interest_earned / total_contributed × 100 (0 if nothing went in)
    pub fn summarize(
        &self,
        request: &CalculationRequest,
        result: &CalculationResult,
    ) -> ProjectionSummary {
        let months = request.months();
        let total_contributed =
            round_cents(request.principal + request.monthly_addition * months as f64);
        let interest_earned = round_cents(result.final_total - total_contributed);
        let return_pct = if total_contributed > 0.0 {
            (interest_earned / total_contributed) * 100.0
        } else {
            0.0
        };

        ProjectionSummary {
            final_total: result.final_total,
            principal: request.principal,
            total_contributed,
            interest_earned,
            return_pct,
            months,
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
