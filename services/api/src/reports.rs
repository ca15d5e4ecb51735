use crate::infra::{
    demo_answers, demo_context, load_answers_csv, load_answers_json, load_inputs_json,
    resolve_inputs, scenario_or_configured,
};
use clap::Args;
use ops_readiness::assessment::{
    calculate_assessment_outcome, highlight_segments, missing_questions, questions, AnswerScale,
    AnswersMap, AssessmentOutcome, Dimension,
};
use ops_readiness::error::AppError;
use ops_readiness::roi::{
    calculate_roi, compare_scenarios, RoiInputs, RoiPreset, RoiResult, RoiScenario,
};
use ops_readiness::ActivationContext;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub(crate) struct AnswerSource {
    /// JSON object mapping question ids to answer values
    #[arg(long)]
    pub(crate) answers_json: Option<PathBuf>,
    /// CSV answer sheet with a `question_id,value` header
    #[arg(long)]
    pub(crate) answers_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) source: AnswerSource,
    /// Treat answers as recorded on the 1-4 survey scale
    #[arg(long)]
    pub(crate) legacy_scale: bool,
    #[arg(long)]
    pub(crate) contact_name: Option<String>,
    #[arg(long)]
    pub(crate) company_name: Option<String>,
    #[arg(long)]
    pub(crate) business_type: Option<String>,
    #[arg(long)]
    pub(crate) country: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RoiCalculateArgs {
    /// Named starting point: lean, balanced or scale
    #[arg(long, value_parser = crate::infra::parse_preset)]
    pub(crate) preset: Option<RoiPreset>,
    /// pessimistic, expected or optimistic (defaults to APP_DEFAULT_SCENARIO)
    #[arg(long, value_parser = crate::infra::parse_scenario)]
    pub(crate) scenario: Option<RoiScenario>,
    /// JSON file with custom inputs; missing fields take the baseline value
    #[arg(long)]
    pub(crate) inputs_json: Option<PathBuf>,
    /// Print all three scenarios side by side
    #[arg(long)]
    pub(crate) compare: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Scenario used for the ROI portion of the demo
    #[arg(long, value_parser = crate::infra::parse_scenario)]
    pub(crate) scenario: Option<RoiScenario>,
}

pub(crate) fn run_questions() {
    println!("Operational readiness questions");
    for dimension in Dimension::ordered() {
        println!(
            "\nSection {}: {}",
            dimension.section(),
            dimension.section_title()
        );
        for question in questions()
            .iter()
            .filter(|question| question.dimension == dimension)
        {
            println!("  [{}] {}", question.id, question.text);
            for option in &question.options {
                println!("      {} = {}", option.value.get(), option.label);
            }
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        source,
        legacy_scale,
        contact_name,
        company_name,
        business_type,
        country,
    } = args;

    let scale = if legacy_scale {
        AnswerScale::Legacy
    } else {
        AnswerScale::ZeroBased
    };

    let answers = match (source.answers_json, source.answers_csv) {
        (Some(path), _) => load_answers_json(&path, scale)?,
        (None, Some(path)) => load_answers_csv(&path, scale)?,
        (None, None) => {
            return Err(AppError::Validation(
                "either --answers-json or --answers-csv is required".to_string(),
            ))
        }
    };

    let defaults = ActivationContext::default();
    let ctx = ActivationContext::new(
        contact_name.unwrap_or(defaults.contact_name),
        company_name.unwrap_or(defaults.company_name),
        business_type.unwrap_or(defaults.business_type),
        country.unwrap_or(defaults.country),
    )
    .or_defaults();

    let outcome = calculate_assessment_outcome(&answers, &ctx);
    render_assessment(&outcome, &answers);
    Ok(())
}

pub(crate) fn run_roi_calculate(args: RoiCalculateArgs) -> Result<(), AppError> {
    let RoiCalculateArgs {
        preset,
        scenario,
        inputs_json,
        compare,
    } = args;

    let custom = inputs_json.map(|path| load_inputs_json(&path)).transpose()?;
    let inputs = resolve_inputs(custom, preset);

    println!("ROI projection");
    match (custom.is_some(), preset) {
        (true, _) => println!("Inputs: custom"),
        (false, Some(preset)) => println!("Inputs: {} ({})", preset.label(), preset.description()),
        (false, None) => println!("Inputs: {}", RoiPreset::Balanced.label()),
    }
    render_inputs(&inputs);

    if compare {
        render_comparison(&compare_scenarios(&inputs));
    } else {
        let result = calculate_roi(&inputs, scenario_or_configured(scenario)?);
        render_roi(&result);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let ctx = demo_context();
    let answers = demo_answers();

    println!(
        "Operational readiness demo for {} ({}, {})",
        ctx.company_name, ctx.business_type, ctx.country
    );
    let outcome = calculate_assessment_outcome(&answers, &ctx);
    render_assessment(&outcome, &answers);

    println!();
    let inputs = RoiInputs::default();
    println!("ROI projection ({})", RoiPreset::Balanced.label());
    render_inputs(&inputs);
    render_roi(&calculate_roi(&inputs, scenario_or_configured(args.scenario)?));
    Ok(())
}

pub(crate) fn stars(count: u8) -> String {
    let filled = usize::from(count.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Summary with personalized terms wrapped in `**`.
pub(crate) fn emphasized_summary(outcome: &AssessmentOutcome) -> String {
    highlight_segments(&outcome.summary(), &outcome.context)
        .into_iter()
        .map(|segment| {
            if segment.highlighted {
                format!("**{}**", segment.text)
            } else {
                segment.text
            }
        })
        .collect()
}

fn render_assessment(outcome: &AssessmentOutcome, answers: &AnswersMap) {
    let profile = outcome.profile;
    println!("{} {}", profile.emoji, profile.title);
    println!(
        "Score: {}/45 ({}%) {} | {}",
        outcome.raw_total,
        outcome.percent,
        stars(outcome.overall_stars),
        profile.score_band_label
    );

    let missing = missing_questions(answers);
    if !missing.is_empty() {
        println!("Unanswered: {}", missing.join(", "));
    }

    println!("\n{}", emphasized_summary(outcome));

    println!("\nDimensions:");
    for rating in outcome.dimensions.values() {
        println!(
            "  - {:<26} {} {:>3}% (raw {}/9)",
            rating.dimension.label(),
            stars(rating.stars),
            rating.percent,
            rating.raw
        );
    }

    print_list("Upsides", profile.upsides);
    print_list("Downsides", profile.downsides);
    print_list("Future outlook", profile.future_outlook);
    print_list("What this unlocks", profile.unlocks);

    println!("\nOperational priority: {}", profile.operational_priority);
    println!(
        "Next step: {} ({})",
        profile.primary_cta_label, profile.primary_cta_description
    );
    println!(
        "Or: {} ({})",
        profile.secondary_cta_label, profile.secondary_cta_description
    );
}

fn print_list(heading: &str, items: &[&str]) {
    println!("\n{heading}:");
    for item in items {
        println!("  - {item}");
    }
}

fn render_inputs(inputs: &RoiInputs) {
    println!(
        "- {} employees saving {} h/day over {} workdays/month",
        inputs.employees, inputs.time_saved_hours_per_day, inputs.workdays_per_month
    );
    println!(
        "- salary {:.0}/month + {}% employer on-cost",
        inputs.avg_gross_salary_per_month, inputs.employer_on_cost_pct
    );
    println!(
        "- {:.0} orders/year at {:.0} avg value, {}% error rate",
        inputs.orders_per_year, inputs.avg_order_value, inputs.order_error_rate_pct
    );
    println!(
        "- inventory {:.0} with {}% carrying cost",
        inputs.inventory_value, inputs.carrying_cost_pct
    );
    println!("- control cost {:.0}/year", inputs.control_cost_per_year);
}

fn render_roi(result: &RoiResult) {
    let buckets = &result.buckets;
    let totals = &result.totals;
    println!("\nScenario: {}", result.scenario);
    println!("  Time savings:           {:>12.0}", buckets.time_savings_year);
    println!(
        "  Error reduction:        {:>12.0}",
        buckets.error_reduction_savings_year
    );
    println!(
        "  Inventory optimization: {:>12.0}",
        buckets.inventory_optimization_savings_year
    );
    println!(
        "  Capital efficiency:     {:>12.0}",
        buckets.capital_efficiency_savings_year
    );
    println!("  Total savings/year:     {:>12.0}", totals.total_savings_year);
    println!("  Net savings/year:       {:>12.0}", totals.net_savings_year);
    println!(
        "  ROI: {:.1}x ({:.0}%) | payback {:.1} months",
        totals.roi_multiple, totals.roi_percent, totals.payback_months
    );
    println!(
        "  Per employee {:.0} | per order {:.2}",
        totals.savings_per_employee, totals.savings_per_order
    );
}

fn render_comparison(results: &[RoiResult]) {
    println!(
        "\n{:<12} {:>14} {:>14} {:>8} {:>9}",
        "scenario", "total/year", "net/year", "ROI x", "payback"
    );
    for result in results {
        println!(
            "{:<12} {:>14.0} {:>14.0} {:>8.1} {:>8.1}m",
            result.scenario.as_str(),
            result.totals.total_savings_year,
            result.totals.net_savings_year,
            result.totals.roi_multiple,
            result.totals.payback_months
        );
    }
}
