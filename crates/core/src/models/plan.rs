use serde::{Deserialize, Serialize};

/// One segment of a multi-period savings plan.
///
/// Periods are chained: the first starts from `principal`, every later one
/// starts from the previous closing balance plus `extra_income`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Period {
    /// Opening balance (first period only)
    #[serde(default)]
    pub principal: f64,

    /// Annual interest rate in percent
    #[serde(default)]
    pub annual_rate: f64,

    /// Duration in whole years
    #[serde(default)]
    pub years: u32,

    /// Amount added at the end of every month
    #[serde(default)]
    pub monthly_addition: f64,

    /// One-off income (positive) or expense (negative) applied when this
    /// period opens. Ignored for the first period.
    #[serde(default)]
    pub extra_income: f64,
}

impl Period {
    /// The opening period of a plan.
    pub fn opening(principal: f64, annual_rate: f64, years: u32, monthly_addition: f64) -> Self {
        Self {
            principal,
            annual_rate,
            years,
            monthly_addition,
            extra_income: 0.0,
        }
    }

    /// A follow-up period with a one-off adjustment at its start.
    pub fn follow_up(
        annual_rate: f64,
        years: u32,
        monthly_addition: f64,
        extra_income: f64,
    ) -> Self {
        Self {
            principal: 0.0,
            annual_rate,
            years,
            monthly_addition,
            extra_income,
        }
    }
}

/// Balance at the end of one month of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPoint {
    /// 1-based month counter across the whole plan
    pub month_index: u64,

    /// Whole years elapsed (`month_index / 12`)
    pub elapsed_years: u64,

    /// Remaining months (`month_index % 12`)
    pub elapsed_months: u64,

    /// Unrounded balance
    pub balance: f64,
}

impl PlanPoint {
    pub fn new(month_index: u64, balance: f64) -> Self {
        Self {
            month_index,
            elapsed_years: month_index / 12,
            elapsed_months: month_index % 12,
            balance,
        }
    }
}

/// Result of simulating a full plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanResult {
    /// Closing balance of the last period
    pub total: f64,

    /// One point per simulated month, in order
    pub points: Vec<PlanPoint>,
}
