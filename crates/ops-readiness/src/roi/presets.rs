use super::calculator::RoiInputs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Starting points offered next to the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiPreset {
    Lean,
    Balanced,
    Scale,
}

impl RoiPreset {
    pub const fn ordered() -> [Self; 3] {
        [Self::Lean, Self::Balanced, Self::Scale]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lean => "lean",
            Self::Balanced => "balanced",
            Self::Scale => "scale",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lean => "Lean team",
            Self::Balanced => "Typical mid-market",
            Self::Scale => "Scaling operations",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Lean => "Smaller team, tighter ops",
            Self::Balanced => "Baseline assumptions",
            Self::Scale => "Higher volume, more upside",
        }
    }

    pub fn inputs(self) -> RoiInputs {
        match self {
            Self::Lean => RoiInputs {
                employees: 20.0,
                time_saved_hours_per_day: 1.0,
                workdays_per_month: 21.0,
                avg_gross_salary_per_month: 3200.0,
                employer_on_cost_pct: 22.0,
                orders_per_year: 12_000.0,
                order_error_rate_pct: 4.0,
                avg_order_value: 95.0,
                inventory_value: 200_000.0,
                carrying_cost_pct: 18.0,
                control_cost_per_year: 18_000.0,
            },
            Self::Balanced => RoiInputs::default(),
            Self::Scale => RoiInputs {
                employees: 120.0,
                time_saved_hours_per_day: 2.0,
                workdays_per_month: 21.0,
                avg_gross_salary_per_month: 4200.0,
                employer_on_cost_pct: 28.0,
                orders_per_year: 75_000.0,
                order_error_rate_pct: 2.5,
                avg_order_value: 135.0,
                inventory_value: 1_200_000.0,
                carrying_cost_pct: 22.0,
                control_cost_per_year: 42_000.0,
            },
        }
    }
}

impl fmt::Display for RoiPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ROI preset '{0}' (expected lean, balanced or scale)")]
pub struct UnknownPreset(pub String);

impl FromStr for RoiPreset {
    type Err = UnknownPreset;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|preset| preset.as_str() == normalized)
            .ok_or_else(|| UnknownPreset(value.to_string()))
    }
}
