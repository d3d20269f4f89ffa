//! Self-assessment questionnaires: definitions, answer collection, and scoring.
//!
//! Scoring sums each item's answer, reflecting reverse-coded items across the scale
//! midpoint (`6 - raw` on the 1..=5 Likert scale). Skipped items follow the engine's
//! [`UnansweredPolicy`].

mod attempt;
pub mod catalog;
mod completion;
pub mod domain;
pub mod import;
pub mod report;
mod responses;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use attempt::AssessmentAttempt;
pub use catalog::Catalog;
pub use completion::{completion, Progress};
pub use domain::{AssessmentError, Definition, DefinitionDefect, Item, LikertResponse, Scale};
pub use import::{DefinitionLoadError, DefinitionLoader, ResponseImportError, ResponseImporter};
pub use report::{ItemScoreView, ScoreReport, DISCLAIMER};
pub use responses::ResponseSet;
pub use scoring::{evaluate, ScoreComponent, ScoreOutcome, ScoringEngine, UnansweredPolicy};
