use super::completion::Progress;
use super::domain::{AssessmentError, Definition};
use super::report::ScoreReport;
use super::responses::ResponseSet;
use super::scoring::{ScoreOutcome, ScoringEngine};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// One respondent working through one questionnaire.
///
/// Holds the in-progress answers and the last submitted score. Any change to the
/// answers discards that score, so `outcome()` always describes the current set.
#[derive(Debug, Clone)]
pub struct AssessmentAttempt<'a> {
    definition: &'a Definition,
    responses: ResponseSet,
    outcome: Option<ScoreOutcome>,
    started_at: DateTime<Utc>,
    submitted_at: Option<DateTime<Utc>>,
}

impl<'a> AssessmentAttempt<'a> {
    pub fn new(definition: &'a Definition) -> Self {
        Self {
            definition,
            responses: ResponseSet::new(),
            outcome: None,
            started_at: Utc::now(),
            submitted_at: None,
        }
    }

    /// Resume from answers collected elsewhere. Off-scale values are rejected up front;
    /// answers for items outside the definition are kept but never scored.
    pub fn with_responses(
        definition: &'a Definition,
        responses: ResponseSet,
    ) -> Result<Self, AssessmentError> {
        responses.validate(definition)?;
        Ok(Self {
            responses,
            ..Self::new(definition)
        })
    }

    pub fn definition(&self) -> &'a Definition {
        self.definition
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn answer(&mut self, item_id: &str, value: i32) -> Result<(), AssessmentError> {
        self.responses.record(self.definition, item_id, value)?;
        self.invalidate();
        Ok(())
    }

    pub fn clear(&mut self, item_id: &str) -> Option<i32> {
        let removed = self.responses.clear(item_id);
        if removed.is_some() {
            self.invalidate();
        }
        removed
    }

    pub fn progress(&self) -> Progress {
        Progress::measure(self.definition, &self.responses)
    }

    pub fn completion(&self) -> f64 {
        self.progress().ratio()
    }

    /// Score the current answers and keep the result until the answers change.
    pub fn submit(&mut self, engine: &ScoringEngine) -> Result<&ScoreOutcome, AssessmentError> {
        let outcome = engine.evaluate(self.definition, &self.responses)?;
        info!(
            assessment = self.definition.id(),
            total = outcome.total,
            complete = outcome.complete,
            policy = %engine.policy(),
            "assessment scored"
        );

        self.submitted_at = Some(Utc::now());
        let outcome = self.outcome.insert(outcome);
        Ok(&*outcome)
    }

    pub fn outcome(&self) -> Option<&ScoreOutcome> {
        self.outcome.as_ref()
    }

    pub fn report(&self) -> Option<ScoreReport> {
        self.outcome
            .as_ref()
            .map(|outcome| ScoreReport::build(self.definition, &self.responses, outcome))
    }

    /// Start over: drop every answer and any score computed from them.
    pub fn retake(&mut self) {
        debug!(assessment = self.definition.id(), "assessment reset");
        self.responses.reset();
        self.outcome = None;
        self.submitted_at = None;
        self.started_at = Utc::now();
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    fn invalidate(&mut self) {
        self.outcome = None;
        self.submitted_at = None;
    }
}
