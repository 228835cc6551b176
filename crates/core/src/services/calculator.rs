use tracing::debug;

use crate::models::projection::CalculationResult;
use crate::models::request::CalculationRequest;

/// Monthly compounding with an optional fixed contribution.
///
/// Each month the contribution is added first, then the balance is grown by
/// one twelfth of the annual rate. The running balance is never rounded;
/// only the reported values are.
///
/// Pure business logic: no I/O, no validation. Nonsensical inputs
/// (e.g., a rate of -1200%) simply produce nonsensical numbers.
pub struct CompoundingCalculator;

impl CompoundingCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Run the projection and record the balance after every month.
    pub fn compute(&self, request: &CalculationRequest) -> CalculationResult {
        let factor = monthly_growth_factor(request.annual_rate);
        let mut total = request.principal;

        let mut history = Vec::with_capacity(request.months() as usize + 1);
        history.push(round_cents(total));

        for _ in 0..request.months() {
            total += request.monthly_addition;
            total *= factor;
            history.push(round_cents(total));
        }

        let final_total = round_cents(total);
        debug!(
            principal = request.principal,
            annual_rate = request.annual_rate,
            years = request.years,
            monthly_addition = request.monthly_addition,
            final_total,
            "projection computed"
        );

        CalculationResult {
            final_total,
            history,
        }
    }

    /// Same iteration as [`compute`](Self::compute), returning only the
    /// rounded final balance.
    #[must_use]
    pub fn compute_total(&self, request: &CalculationRequest) -> f64 {
        let factor = monthly_growth_factor(request.annual_rate);
        let mut total = request.principal;

        for _ in 0..request.months() {
            total += request.monthly_addition;
            total *= factor;
        }

        round_cents(total)
    }
}

impl Default for CompoundingCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// `1 + annual_rate / 100 / 12`, evaluated in that order.
fn monthly_growth_factor(annual_rate: f64) -> f64 {
    1.0 + annual_rate / 100.0 / 12.0
}

/// Round to 2 decimal places, deciding on the exact binary value.
///
/// `(v * 100.0).round() / 100.0` can push a value such as 1.0049999… over
/// the half-cent boundary; formatting with a fixed precision does not.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_factor_is_monthly_decimal_rate() {
        assert_eq!(monthly_growth_factor(12.0), 1.01);
        assert_eq!(monthly_growth_factor(0.0), 1.0);
    }

    #[test]
    fn round_cents_uses_exact_value() {
        // 2.675 is stored as 2.67499999…
        assert_eq!(round_cents(2.675), 2.67);
        assert_eq!(round_cents(1126.8250301319697), 1126.83);
        assert_eq!(round_cents(-3.14159), -3.14);
    }

    #[test]
    fn round_cents_passes_non_finite_through() {
        assert!(round_cents(f64::NAN).is_nan());
        assert_eq!(round_cents(f64::INFINITY), f64::INFINITY);
    }
}
