//! Questionnaire catalog and scoring engine behind the Nirvana self-assessment page.
//!
//! The crate has no knowledge of how answers are collected or displayed. Callers build a
//! [`assessment::ResponseSet`] one answer at a time, then score it against a
//! [`assessment::Definition`].

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
