use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;

/// Closed integer range of answers an item accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scale {
    pub min: i32,
    pub max: i32,
}

impl Scale {
    /// Five-point agreement scale used by every bundled questionnaire.
    pub const LIKERT_FIVE: Scale = Scale { min: 1, max: 5 };

    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub const fn contains(self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Mirror a value across the scale midpoint, e.g. `6 - raw` on `1..=5`.
    pub const fn reflect(self, raw: i32) -> i32 {
        (self.min + self.max) - raw
    }

    pub fn points(self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    pub fn label(self, value: i32) -> Option<&'static str> {
        if self == Self::LIKERT_FIVE {
            LikertResponse::from_value(value).map(LikertResponse::label)
        } else {
            None
        }
    }

    fn is_well_formed(self) -> bool {
        self.min <= self.max
    }

    /// Whether reflection and totals over `item_count` answers stay within `i32`.
    fn fits_totals(self, item_count: usize) -> bool {
        let Ok(count) = i32::try_from(item_count) else {
            return false;
        };
        self.min.checked_add(self.max).is_some()
            && count.checked_mul(self.min).is_some()
            && count.checked_mul(self.max).is_some()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::LIKERT_FIVE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikertResponse {
    StronglyDisagree,
    Disagree,
    Neutral,
    Agree,
    StronglyAgree,
}

impl LikertResponse {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::StronglyDisagree,
            Self::Disagree,
            Self::Neutral,
            Self::Agree,
            Self::StronglyAgree,
        ]
    }

    pub const fn value(self) -> i32 {
        match self {
            Self::StronglyDisagree => 1,
            Self::Disagree => 2,
            Self::Neutral => 3,
            Self::Agree => 4,
            Self::StronglyAgree => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StronglyDisagree => "Strongly Disagree",
            Self::Disagree => "Disagree",
            Self::Neutral => "Neutral",
            Self::Agree => "Agree",
            Self::StronglyAgree => "Strongly Agree",
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|response| response.value() == value)
    }
}

/// A single scored question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub reverse: bool,
}

impl Item {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            reverse: false,
        }
    }

    /// Item whose answer is reflected before it counts toward the total.
    pub fn reversed(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            reverse: true,
            ..Self::new(id, text)
        }
    }
}

/// A named questionnaire. Construction validates the item list, so every
/// `Definition` in circulation has at least one item and unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DefinitionData")]
pub struct Definition {
    id: String,
    title: String,
    description: String,
    scale: Scale,
    items: Vec<Item>,
}

impl Definition {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        scale: Scale,
        items: Vec<Item>,
    ) -> Result<Self, AssessmentError> {
        let definition = Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            scale,
            items,
        };
        definition.validate()?;
        Ok(definition)
    }

    fn validate(&self) -> Result<(), AssessmentError> {
        let invalid = |reason| AssessmentError::InvalidDefinition {
            definition_id: self.id.clone(),
            reason,
        };

        if !self.scale.is_well_formed() {
            return Err(invalid(DefinitionDefect::InvalidScale {
                min: self.scale.min,
                max: self.scale.max,
            }));
        }

        if self.items.is_empty() {
            return Err(invalid(DefinitionDefect::EmptyItems));
        }

        if !self.scale.fits_totals(self.items.len()) {
            return Err(invalid(DefinitionDefect::ScaleOverflow {
                min: self.scale.min,
                max: self.scale.max,
                items: self.items.len(),
            }));
        }

        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(invalid(DefinitionDefect::DuplicateItem(item.id.clone())));
            }
        }

        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn contains_item(&self, item_id: &str) -> bool {
        self.item(item_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a constructed definition.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn reversed_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.reverse)
    }

    /// Lowest total a fully answered response set can reach.
    pub fn score_floor(&self) -> i32 {
        self.items.len() as i32 * self.scale.min
    }

    /// Highest total a fully answered response set can reach.
    pub fn score_ceiling(&self) -> i32 {
        self.items.len() as i32 * self.scale.max
    }
}

/// Unvalidated wire form of a [`Definition`].
#[derive(Deserialize)]
pub(crate) struct DefinitionData {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    scale: Scale,
    items: Vec<Item>,
}

impl TryFrom<DefinitionData> for Definition {
    type Error = AssessmentError;

    fn try_from(data: DefinitionData) -> Result<Self, Self::Error> {
        Definition::new(data.id, data.title, data.description, data.scale, data.items)
    }
}

/// What made a questionnaire definition unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionDefect {
    EmptyItems,
    DuplicateItem(String),
    InvalidScale { min: i32, max: i32 },
    /// Reflected answers or totals would not fit in an `i32`.
    ScaleOverflow { min: i32, max: i32, items: usize },
}

impl fmt::Display for DefinitionDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionDefect::EmptyItems => write!(f, "no items defined"),
            DefinitionDefect::DuplicateItem(id) => write!(f, "item id '{}' appears twice", id),
            DefinitionDefect::InvalidScale { min, max } => {
                write!(f, "scale minimum {} exceeds maximum {}", min, max)
            }
            DefinitionDefect::ScaleOverflow { min, max, items } => write!(
                f,
                "scale {}..={} is too wide to total {} items",
                min, max, items
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid assessment definition '{definition_id}': {reason}")]
    InvalidDefinition {
        definition_id: String,
        reason: DefinitionDefect,
    },
    #[error("answer {value} for item '{item_id}' is outside the scale {min}..={max}")]
    OutOfRangeAnswer {
        item_id: String,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("item '{item_id}' has no recorded answer")]
    MissingAnswer { item_id: String },
    #[error("item '{item_id}' is not part of this assessment")]
    UnknownItem { item_id: String },
    #[error("no assessment registered under '{0}'")]
    UnknownDefinition(String),
}
