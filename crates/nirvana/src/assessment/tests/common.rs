use crate::assessment::domain::{Definition, Item, Scale};
use crate::assessment::responses::ResponseSet;

/// Three items, the last one reverse coded.
pub(super) fn short_form() -> Definition {
    Definition::new(
        "short-form",
        "Short Form",
        "Two direct items and one reversed item.",
        Scale::LIKERT_FIVE,
        vec![
            Item::new("q1", "I raise my voice when annoyed."),
            Item::new("q2", "I hold grudges."),
            Item::reversed("q3", "I stay calm under pressure."),
        ],
    )
    .expect("valid definition")
}

pub(super) fn single_reversed() -> Definition {
    Definition::new(
        "single",
        "Single",
        "",
        Scale::LIKERT_FIVE,
        vec![Item::reversed("only", "I am an even-tempered person.")],
    )
    .expect("valid definition")
}

/// Every item answered with the same value.
pub(super) fn uniform_answers(definition: &Definition, value: i32) -> ResponseSet {
    let mut responses = ResponseSet::new();
    for item in definition.items() {
        responses
            .record(definition, &item.id, value)
            .expect("value within scale");
    }
    responses
}

/// Expected total when every item receives `value`.
pub(super) fn expected_uniform_total(definition: &Definition, value: i32) -> i32 {
    let scale = definition.scale();
    definition
        .items()
        .iter()
        .map(|item| if item.reverse { scale.reflect(value) } else { value })
        .sum()
}
