use super::super::domain::{AssessmentError, Definition, Item, Scale};
use super::super::responses::ResponseSet;
use super::policy::UnansweredPolicy;
use super::ScoreComponent;

pub(crate) struct ScoreTally {
    pub components: Vec<ScoreComponent>,
    pub total: i32,
    pub answered: usize,
}

/// Contribution of one answered item: the raw value, or its reflection when reverse coded.
pub(crate) fn contribution(scale: Scale, item: &Item, raw: i32) -> i32 {
    if item.reverse {
        scale.reflect(raw)
    } else {
        raw
    }
}

pub(crate) fn score_items(
    definition: &Definition,
    responses: &ResponseSet,
    policy: UnansweredPolicy,
) -> Result<ScoreTally, AssessmentError> {
    let scale = definition.scale();
    let mut components = Vec::with_capacity(definition.len());
    let mut total = 0;
    let mut answered = 0;

    for item in definition.items() {
        let raw = responses.get(&item.id);

        let score = match raw {
            Some(value) if !scale.contains(value) => {
                return Err(AssessmentError::OutOfRangeAnswer {
                    item_id: item.id.clone(),
                    value,
                    min: scale.min,
                    max: scale.max,
                });
            }
            Some(value) => {
                answered += 1;
                contribution(scale, item, value)
            }
            None => match policy {
                UnansweredPolicy::Lenient => 0,
                UnansweredPolicy::Strict => {
                    return Err(AssessmentError::MissingAnswer {
                        item_id: item.id.clone(),
                    });
                }
            },
        };

        total += score;
        components.push(ScoreComponent {
            item_id: item.id.clone(),
            raw,
            reverse: item.reverse,
            contribution: score,
        });
    }

    Ok(ScoreTally {
        components,
        total,
        answered,
    })
}
