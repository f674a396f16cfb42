//! Core engine for project-management maturity and compliance assessments.
//!
//! The crate turns a questionnaire answer set into normalized compliance and
//! maturity scores and maps those scores to improvement recommendations. The
//! surrounding service pieces (catalog, ingestion, repositories, HTTP router)
//! feed the engine and expose its output; the scoring and recommendation
//! logic itself is pure and synchronous.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
