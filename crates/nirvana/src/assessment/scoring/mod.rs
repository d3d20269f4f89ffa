mod policy;
mod rules;

pub use policy::{UnansweredPolicy, UnknownPolicy};

use super::domain::{AssessmentError, Definition};
use super::responses::ResponseSet;
use serde::{Deserialize, Serialize};

/// Stateless evaluator applying an unanswered-item policy to response sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringEngine {
    policy: UnansweredPolicy,
}

impl ScoringEngine {
    pub fn new(policy: UnansweredPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnansweredPolicy {
        self.policy
    }

    /// Sum every item's contribution. Response ids that the definition does not
    /// know about are ignored.
    pub fn evaluate(
        &self,
        definition: &Definition,
        responses: &ResponseSet,
    ) -> Result<ScoreOutcome, AssessmentError> {
        let tally = rules::score_items(definition, responses, self.policy)?;

        Ok(ScoreOutcome {
            definition_id: definition.id().to_string(),
            total: tally.total,
            complete: tally.answered == definition.len(),
            answered: tally.answered,
            item_count: definition.len(),
            components: tally.components,
        })
    }
}

/// Score a response set with the default (lenient) policy.
pub fn evaluate(
    definition: &Definition,
    responses: &ResponseSet,
) -> Result<ScoreOutcome, AssessmentError> {
    ScoringEngine::default().evaluate(definition, responses)
}

/// One item's share of the total, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub item_id: String,
    pub raw: Option<i32>,
    pub reverse: bool,
    pub contribution: i32,
}

/// Total score plus the per-item trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub definition_id: String,
    pub total: i32,
    /// False when some items were skipped; such a total is not a real measurement.
    pub complete: bool,
    pub answered: usize,
    pub item_count: usize,
    pub components: Vec<ScoreComponent>,
}

impl ScoreOutcome {
    pub fn contribution(&self, item_id: &str) -> Option<i32> {
        self.components
            .iter()
            .find(|component| component.item_id == item_id)
            .map(|component| component.contribution)
    }
}
