// Core algorithm exports
pub mod filters;
pub mod interests;
pub mod matcher;
pub mod scoring;

pub use filters::{debt_gate, GateDecision, DEBT_GATE_REASON};
pub use interests::{FrequencyInterestExtractor, InterestExtractor};
pub use matcher::{Evaluation, Matcher};
pub use scoring::{
    amenities_score, budget_score, interest_score, lifestyle_score, location_score,
    verification_bonus, FactorScore, ScoreBreakdown,
};
