//! Deterministic scoring of patient care reports written against training
//! scenarios.
//!
//! [`scoring::score_document`] runs the narrative, vitals, treatment and
//! completeness scorers and folds them into a [`scores::PcrScores`].

pub mod analysis;
pub mod catalog;
pub mod completeness;
pub mod config;
pub mod error;
pub mod history;
pub mod loader;
pub mod models;
pub mod narrative;
pub mod report;
pub mod scores;
pub mod scoring;
pub mod terms;
pub mod treatment;
pub mod vitals;

pub use config::ScoringConfig;
pub use error::ScorerError;
pub use models::{PcrDocument, Scenario};
pub use scores::PcrScores;
pub use scoring::{score_document, score_document_at};
