//! Scoring and projection engines behind the operational readiness portal.
//!
//! The two entry points are [`assessment::calculate_assessment_outcome`] and
//! [`roi::calculate_roi`]. Both are pure and can be called from any thread.

pub mod activation;
pub mod assessment;
pub mod config;
pub mod error;
pub mod roi;
pub mod telemetry;

pub use activation::ActivationContext;
pub use assessment::{calculate_assessment_outcome, AnswersMap, AssessmentOutcome};
pub use roi::{calculate_roi, RoiInputs, RoiResult, RoiScenario};
