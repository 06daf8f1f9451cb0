//! Coliving Match - affinity scoring and ranking for co-living listings
//!
//! This library ranks housing listings against a seeker's preferences. Each
//! listing gets a compatibility score in [0, 1] built from five weighted
//! factors plus a flat bonus for contract-verified listings, together with a
//! human-readable explanation. Debt-flagged seekers are never matched.

pub mod batch;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Evaluation, FrequencyInterestExtractor, InterestExtractor, Matcher};
pub use error::AppError;
pub use models::{DebtStatus, Lifestyle, Listing, Match, ScoringWeights, Seeker, SeekerPreferences};
