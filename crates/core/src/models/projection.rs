use serde::{Deserialize, Serialize};

/// Outcome of one compounding projection.
///
/// Both the total and every history entry are rounded to cents; the
/// calculation itself runs at full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Balance after the last month, rounded to 2 decimal places
    pub final_total: f64,

    /// Starting principal followed by the balance after each month.
    /// Always `years * 12 + 1` entries long.
    pub history: Vec<f64>,
}

impl CalculationResult {
    /// Number of compounding months covered by this result.
    #[must_use]
    pub fn months(&self) -> usize {
        self.history.len().saturating_sub(1)
    }
}

/// Wire form of a calculation result: `{"result": .., "history": [..]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub result: f64,
    pub history: Vec<f64>,
}

impl From<CalculationResult> for CalculationResponse {
    fn from(r: CalculationResult) -> Self {
        Self {
            result: r.final_total,
            history: r.history,
        }
    }
}
