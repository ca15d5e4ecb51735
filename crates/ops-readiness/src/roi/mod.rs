//! Financial projection for the ROI calculator.

mod calculator;
mod presets;

pub use calculator::{
    calculate_roi, compare_scenarios, RoiBuckets, RoiInputs, RoiResult, RoiScenario, RoiTotals,
    UnknownScenario, COST_OF_CAPITAL, ERROR_LOSS_FACTOR, ERROR_REDUCTION_PCT, HOURS_PER_DAY,
    INVENTORY_OPTIMIZATION_PCT, INVENTORY_REDUCTION_PCT, MONTHS_PER_YEAR,
};
pub use presets::{RoiPreset, UnknownPreset};
