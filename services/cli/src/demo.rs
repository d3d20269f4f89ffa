use crate::score::render_report;
use clap::Args;
use nirvana::assessment::{
    AssessmentAttempt, Catalog, Definition, ScoringEngine, UnansweredPolicy,
};
use nirvana::config::AppConfig;
use nirvana::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only run the questionnaire with this id
    #[arg(long)]
    pub(crate) only: Option<String>,
    /// Stop halfway through each questionnaire to show partial scoring
    #[arg(long)]
    pub(crate) partial: bool,
    /// Override the configured unanswered-item policy
    #[arg(long)]
    pub(crate) policy: Option<UnansweredPolicy>,
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let DemoArgs {
        only,
        partial,
        policy,
    } = args;

    let catalog = Catalog::bundled();
    let definitions: Vec<&Definition> = match only.as_deref() {
        Some(id) => vec![catalog.require(id)?],
        None => catalog.definitions().iter().collect(),
    };
    let engine = ScoringEngine::new(policy.unwrap_or(config.scoring.policy));

    println!("Self-assessment demo (policy: {})", engine.policy());

    for definition in definitions {
        println!("\n== {} ==", definition.title());
        let mut attempt = AssessmentAttempt::new(definition);

        let answer_count = if partial {
            definition.len() / 2
        } else {
            definition.len()
        };
        for (index, item) in definition.items().iter().take(answer_count).enumerate() {
            attempt.answer(&item.id, simulated_answer(index))?;
        }

        let progress = attempt.progress();
        println!(
            "Progress: {}/{} answered ({:.0}%)",
            progress.answered,
            progress.total,
            progress.percent()
        );

        let submitted = attempt.submit(&engine).map(|_| ());
        match submitted {
            Ok(()) => {
                if let Some(report) = attempt.report() {
                    render_report(&report);
                }
            }
            Err(err) => println!("Submission rejected: {}", err),
        }

        attempt.retake();
        println!(
            "After reset: {:.0}% complete, score cleared: {}",
            attempt.completion() * 100.0,
            attempt.outcome().is_none()
        );
    }

    Ok(())
}

/// Cycles through the scale so each demo respondent gives a spread of answers.
fn simulated_answer(index: usize) -> i32 {
    const PATTERN: [i32; 7] = [2, 4, 3, 5, 1, 3, 4];
    PATTERN[index % PATTERN.len()]
}
