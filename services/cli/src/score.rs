use crate::infra::{resolve_definition, scale_legend};
use clap::Args;
use nirvana::assessment::{
    Catalog, Definition, ResponseImporter, ResponseSet, ScoreReport, ScoringEngine,
    UnansweredPolicy,
};
use nirvana::config::AppConfig;
use nirvana::error::AppError;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Bundled questionnaire id (see `list`)
    #[arg(required_unless_present = "definition")]
    pub(crate) assessment: Option<String>,
    /// Load the questionnaire from a JSON definition file instead
    #[arg(long)]
    pub(crate) definition: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Bundled questionnaire id (see `list`)
    #[arg(required_unless_present = "definition")]
    pub(crate) assessment: Option<String>,
    /// Load the questionnaire from a JSON definition file instead
    #[arg(long)]
    pub(crate) definition: Option<PathBuf>,
    /// Answer as ITEM=VALUE; repeat for each item. Overrides CSV answers.
    #[arg(long = "answer", value_name = "ITEM=VALUE")]
    pub(crate) answers: Vec<String>,
    /// CSV file with `item_id,value` rows
    #[arg(long)]
    pub(crate) answers_csv: Option<PathBuf>,
    /// How to treat unanswered items (overrides APP_SCORING_POLICY)
    #[arg(long)]
    pub(crate) policy: Option<UnansweredPolicy>,
    /// Print the score report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_list() -> Result<(), AppError> {
    println!("Self-assessment questionnaires");
    for definition in Catalog::bundled().definitions() {
        println!(
            "- {} | {} | {} items",
            definition.id(),
            definition.title(),
            definition.len()
        );
        println!("  {}", definition.description());
    }
    Ok(())
}

pub(crate) fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let definition = resolve_definition(args.assessment.as_deref(), args.definition.as_deref())?;

    println!("{}", definition.title());
    println!("{}", definition.description());
    println!("Scale: {}", scale_legend(&definition));
    println!();
    for item in definition.items() {
        let marker = if item.reverse { " (reverse scored)" } else { "" };
        println!("{:>6}  {}{}", item.id, item.text, marker);
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let json = args.json;
    let report = build_report(&args, config.scoring.policy)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn build_report(
    args: &ScoreArgs,
    default_policy: UnansweredPolicy,
) -> Result<ScoreReport, AppError> {
    let definition = resolve_definition(args.assessment.as_deref(), args.definition.as_deref())?;
    let responses = collect_responses(args, &definition)?;
    let engine = ScoringEngine::new(args.policy.unwrap_or(default_policy));

    let outcome = engine.evaluate(&definition, &responses)?;
    info!(
        assessment = definition.id(),
        total = outcome.total,
        complete = outcome.complete,
        policy = %engine.policy(),
        "answers scored"
    );
    Ok(ScoreReport::build(&definition, &responses, &outcome))
}

fn collect_responses(args: &ScoreArgs, definition: &Definition) -> Result<ResponseSet, AppError> {
    let mut responses = match &args.answers_csv {
        Some(path) => ResponseImporter::from_path(path, definition)?,
        None => ResponseSet::new(),
    };

    let overrides = ResponseImporter::from_pairs(&args.answers, definition)?;
    for (item_id, value) in overrides.iter() {
        responses.record(definition, item_id, value)?;
    }

    Ok(responses)
}

pub(crate) fn render_report(report: &ScoreReport) {
    println!("{}", report.title);
    for item in &report.items {
        let answer = match (item.answer, item.answer_label) {
            (Some(value), Some(label)) => format!("{value} ({label})"),
            (Some(value), None) => value.to_string(),
            (None, _) => "unanswered".to_string(),
        };
        let reverse = if item.reverse { " reversed" } else { "" };
        println!(
            "- {}: {} -> {}{}",
            item.item_id, answer, item.contribution, reverse
        );
    }

    println!(
        "\nYour Score: {} (range {}-{})",
        report.total, report.floor, report.ceiling
    );
    if !report.complete {
        println!(
            "Only {:.0}% of the questions were answered; this total is provisional.",
            report.completion_pct
        );
    }
    println!("{}", report.disclaimer);
}
