use super::domain::Definition;
use super::responses::ResponseSet;
use super::scoring::ScoreOutcome;
use serde::Serialize;

pub const DISCLAIMER: &str = "This score is a general indication. For a more comprehensive \
understanding, please consult with a mental health professional.";

/// Display-ready summary of a scored attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub definition_id: String,
    pub title: String,
    pub total: i32,
    pub floor: i32,
    pub ceiling: i32,
    pub complete: bool,
    pub completion_pct: f64,
    pub items: Vec<ItemScoreView>,
    pub disclaimer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemScoreView {
    pub item_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_label: Option<&'static str>,
    pub reverse: bool,
    pub contribution: i32,
}

impl ScoreReport {
    pub fn build(definition: &Definition, responses: &ResponseSet, outcome: &ScoreOutcome) -> Self {
        let scale = definition.scale();
        let items = definition
            .items()
            .iter()
            .map(|item| {
                let answer = responses.get(&item.id);
                ItemScoreView {
                    item_id: item.id.clone(),
                    text: item.text.clone(),
                    answer,
                    answer_label: answer.and_then(|value| scale.label(value)),
                    reverse: item.reverse,
                    contribution: outcome.contribution(&item.id).unwrap_or(0),
                }
            })
            .collect();

        Self {
            definition_id: definition.id().to_string(),
            title: definition.title().to_string(),
            total: outcome.total,
            floor: definition.score_floor(),
            ceiling: definition.score_ceiling(),
            complete: outcome.complete,
            completion_pct: outcome.answered as f64 / outcome.item_count as f64 * 100.0,
            items,
            disclaimer: DISCLAIMER,
        }
    }
}
