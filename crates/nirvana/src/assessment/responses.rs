use super::domain::{AssessmentError, Definition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answers recorded so far, keyed by item id.
///
/// Answers entered through [`ResponseSet::record`] are checked against the definition
/// when they arrive, so an interactive attempt never holds an unknown id or an
/// off-scale value. Sets built from raw pairs (`FromIterator`, serde) skip that check
/// and are validated again at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    answers: BTreeMap<String, i32>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier value for the same item.
    /// Returns the value that was replaced.
    pub fn record(
        &mut self,
        definition: &Definition,
        item_id: &str,
        value: i32,
    ) -> Result<Option<i32>, AssessmentError> {
        if !definition.contains_item(item_id) {
            return Err(AssessmentError::UnknownItem {
                item_id: item_id.to_string(),
            });
        }

        let scale = definition.scale();
        if !scale.contains(value) {
            return Err(AssessmentError::OutOfRangeAnswer {
                item_id: item_id.to_string(),
                value,
                min: scale.min,
                max: scale.max,
            });
        }

        Ok(self.answers.insert(item_id.to_string(), value))
    }

    pub fn clear(&mut self, item_id: &str) -> Option<i32> {
        self.answers.remove(item_id)
    }

    /// Drop every answer, as when the respondent resets or retakes a questionnaire.
    pub fn reset(&mut self) {
        self.answers.clear();
    }

    pub fn get(&self, item_id: &str) -> Option<i32> {
        self.answers.get(item_id).copied()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.answers.contains_key(item_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.answers
            .iter()
            .map(|(item_id, value)| (item_id.as_str(), *value))
    }

    /// Check every answer for an item of `definition` against its scale.
    /// Answers for ids outside the definition are left alone.
    pub fn validate(&self, definition: &Definition) -> Result<(), AssessmentError> {
        let scale = definition.scale();
        for item in definition.items() {
            if let Some(value) = self.get(&item.id) {
                if !scale.contains(value) {
                    return Err(AssessmentError::OutOfRangeAnswer {
                        item_id: item.id.clone(),
                        value,
                        min: scale.min,
                        max: scale.max,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(item_id, value)| (item_id.into(), value))
                .collect(),
        }
    }
}
