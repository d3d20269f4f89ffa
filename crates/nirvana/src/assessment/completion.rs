use super::domain::Definition;
use super::responses::ResponseSet;
use serde::Serialize;

/// Fraction of the definition's items that have a recorded answer, in `[0.0, 1.0]`.
/// Answers for ids the definition does not contain are not counted.
pub fn completion(definition: &Definition, responses: &ResponseSet) -> f64 {
    Progress::measure(definition, responses).ratio()
}

/// Answered/remaining breakdown for progress bars and prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub remaining: Vec<String>,
}

impl Progress {
    pub fn measure(definition: &Definition, responses: &ResponseSet) -> Self {
        let remaining: Vec<String> = definition
            .items()
            .iter()
            .filter(|item| !responses.contains(&item.id))
            .map(|item| item.id.clone())
            .collect();

        Self {
            answered: definition.len() - remaining.len(),
            total: definition.len(),
            remaining,
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 / self.total as f64
    }

    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }
}
