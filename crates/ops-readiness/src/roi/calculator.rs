use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const HOURS_PER_DAY: f64 = 8.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Share of the order value lost per order error.
pub const ERROR_LOSS_FACTOR: f64 = 0.25;
pub const ERROR_REDUCTION_PCT: f64 = 0.5;
/// Share of inventory carrying cost removed by optimization.
pub const INVENTORY_OPTIMIZATION_PCT: f64 = 0.15;
/// Share of inventory value freed up by leaner stock levels.
pub const INVENTORY_REDUCTION_PCT: f64 = 0.1;
pub const COST_OF_CAPITAL: f64 = 0.08;

/// Framing applied to every projected saving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiScenario {
    Pessimistic,
    #[default]
    Expected,
    Optimistic,
}

impl RoiScenario {
    pub const fn ordered() -> [Self; 3] {
        [Self::Pessimistic, Self::Expected, Self::Optimistic]
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Pessimistic => 0.6,
            Self::Expected => 1.0,
            Self::Optimistic => 1.4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pessimistic => "pessimistic",
            Self::Expected => "expected",
            Self::Optimistic => "optimistic",
        }
    }
}

impl fmt::Display for RoiScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ROI scenario '{0}' (expected pessimistic, expected or optimistic)")]
pub struct UnknownScenario(pub String);

impl FromStr for RoiScenario {
    type Err = UnknownScenario;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|scenario| scenario.as_str() == normalized)
            .ok_or_else(|| UnknownScenario(value.to_string()))
    }
}

/// Business figures supplied by the prospect. Bounds are not enforced here;
/// fields missing from a payload take the baseline value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiInputs {
    pub employees: f64,
    pub time_saved_hours_per_day: f64,
    pub workdays_per_month: f64,
    pub avg_gross_salary_per_month: f64,
    pub employer_on_cost_pct: f64,
    pub orders_per_year: f64,
    pub order_error_rate_pct: f64,
    pub avg_order_value: f64,
    pub inventory_value: f64,
    pub carrying_cost_pct: f64,
    pub control_cost_per_year: f64,
}

impl Default for RoiInputs {
    /// Typical mid-market baseline.
    fn default() -> Self {
        Self {
            employees: 50.0,
            time_saved_hours_per_day: 1.5,
            workdays_per_month: 21.0,
            avg_gross_salary_per_month: 3500.0,
            employer_on_cost_pct: 25.0,
            orders_per_year: 25_000.0,
            order_error_rate_pct: 3.0,
            avg_order_value: 120.0,
            inventory_value: 500_000.0,
            carrying_cost_pct: 20.0,
            control_cost_per_year: 24_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiBuckets {
    pub time_savings_year: f64,
    pub error_reduction_savings_year: f64,
    pub inventory_optimization_savings_year: f64,
    pub capital_efficiency_savings_year: f64,
}

impl RoiBuckets {
    pub fn total(&self) -> f64 {
        self.time_savings_year
            + self.error_reduction_savings_year
            + self.inventory_optimization_savings_year
            + self.capital_efficiency_savings_year
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiTotals {
    pub total_savings_year: f64,
    pub net_savings_year: f64,
    pub roi_multiple: f64,
    pub roi_percent: f64,
    pub payback_months: f64,
    pub savings_per_employee: f64,
    pub savings_per_order: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub buckets: RoiBuckets,
    pub totals: RoiTotals,
    pub scenario: RoiScenario,
}

/// `numerator / denominator`, or 0 when the denominator is not positive.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

pub fn calculate_roi(inputs: &RoiInputs, scenario: RoiScenario) -> RoiResult {
    let multiplier = scenario.multiplier();

    let hourly_cost = ratio(
        inputs.avg_gross_salary_per_month * (1.0 + inputs.employer_on_cost_pct / 100.0),
        inputs.workdays_per_month * HOURS_PER_DAY,
    );
    let hours_saved_year = inputs.employees
        * inputs.time_saved_hours_per_day
        * inputs.workdays_per_month
        * MONTHS_PER_YEAR;
    let time_savings_year = hours_saved_year * hourly_cost * multiplier;

    let errors_per_year = inputs.orders_per_year * (inputs.order_error_rate_pct / 100.0);
    let cost_per_error = inputs.avg_order_value * ERROR_LOSS_FACTOR;
    let error_reduction_savings_year =
        errors_per_year * ERROR_REDUCTION_PCT * cost_per_error * multiplier;

    let inventory_carrying_cost_year = inputs.inventory_value * (inputs.carrying_cost_pct / 100.0);
    let inventory_optimization_savings_year =
        inventory_carrying_cost_year * INVENTORY_OPTIMIZATION_PCT * multiplier;

    // The scenario already scales the freed capital; the return on it is not scaled again.
    let freed_capital = inputs.inventory_value * INVENTORY_REDUCTION_PCT * multiplier;
    let capital_efficiency_savings_year = freed_capital * COST_OF_CAPITAL;

    let buckets = RoiBuckets {
        time_savings_year,
        error_reduction_savings_year,
        inventory_optimization_savings_year,
        capital_efficiency_savings_year,
    };

    let total_savings_year = buckets.total();
    let net_savings_year = total_savings_year - inputs.control_cost_per_year;

    let totals = RoiTotals {
        total_savings_year,
        net_savings_year,
        roi_multiple: ratio(total_savings_year, inputs.control_cost_per_year),
        roi_percent: ratio(net_savings_year, inputs.control_cost_per_year) * 100.0,
        payback_months: ratio(inputs.control_cost_per_year, total_savings_year) * MONTHS_PER_YEAR,
        savings_per_employee: ratio(total_savings_year, inputs.employees),
        savings_per_order: ratio(total_savings_year, inputs.orders_per_year),
    };

    RoiResult {
        buckets,
        totals,
        scenario,
    }
}

/// Results for every scenario, pessimistic first.
pub fn compare_scenarios(inputs: &RoiInputs) -> [RoiResult; 3] {
    RoiScenario::ordered().map(|scenario| calculate_roi(inputs, scenario))
}
