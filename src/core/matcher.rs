use crate::core::{
    filters::{debt_gate, GateDecision},
    interests::{FrequencyInterestExtractor, InterestExtractor},
    scoring::{
        amenities_score, budget_score, finalize_score, interest_score, lifestyle_score,
        location_score, verification_bonus, ScoreBreakdown,
    },
};
use crate::models::{Listing, Match, ScoringWeights, Seeker};
use chrono::NaiveDate;
use std::sync::Arc;

/// Scored evaluation of a single seeker/listing pair
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub gate: GateDecision,
    pub breakdown: ScoreBreakdown,
    /// Weighted sum plus bonus, before clamping and rounding
    pub raw_score: f64,
    pub reasoning: Vec<String>,
}

impl Evaluation {
    /// Final score: clamped to 1.0 and rounded to three decimals
    pub fn score(&self) -> f64 {
        finalize_score(self.raw_score)
    }
}

/// Main matching orchestrator - ranks listings for a seeker
///
/// # Pipeline Stages
/// 1. Debt gate (short-circuits the whole call)
/// 2. Factor evaluation per listing
/// 3. Weighted sum plus verification bonus
/// 4. Clamp, round, drop non-positive, stable sort
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    today: NaiveDate,
    extractor: Arc<dyn InterestExtractor>,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, today: NaiveDate) -> Self {
        Self {
            weights,
            today,
            extractor: Arc::new(FrequencyInterestExtractor::default()),
        }
    }

    pub fn with_default_weights(today: NaiveDate) -> Self {
        Self::new(ScoringWeights::default(), today)
    }

    /// Replace the roommate-interest heuristic
    pub fn with_extractor(mut self, extractor: Arc<dyn InterestExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Reference date the matcher was built with
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Score one listing for a seeker, keeping the per-factor breakdown
    pub fn evaluate(&self, seeker: &Seeker, listing: &Listing) -> Evaluation {
        let gate = debt_gate(seeker);
        if let GateDecision::Rejected(reason) = gate {
            return Evaluation {
                gate,
                breakdown: ScoreBreakdown::default(),
                raw_score: 0.0,
                reasoning: vec![reason.to_string()],
            };
        }

        let budget = budget_score(seeker, listing);
        let location = location_score(seeker, listing);
        let lifestyle = lifestyle_score(seeker, listing);
        let interests = interest_score(seeker, listing, self.extractor.as_ref());
        let amenities = amenities_score(seeker, listing);
        let bonus = verification_bonus(listing, self.weights.verification_bonus);

        let breakdown = ScoreBreakdown {
            budget: budget.value,
            location: location.value,
            lifestyle: lifestyle.value,
            interests: interests.value,
            amenities: amenities.value,
            bonus: bonus.value,
        };

        let reasoning = [budget, location, lifestyle, interests, amenities, bonus]
            .into_iter()
            .filter_map(|factor| factor.explanation)
            .collect();

        Evaluation {
            gate,
            breakdown,
            raw_score: breakdown.combine(&self.weights),
            reasoning,
        }
    }

    /// Rank listings for a seeker
    ///
    /// # Arguments
    /// * `seeker` - The person looking for a room
    /// * `listings` - Candidate listings, already validated upstream
    ///
    /// # Returns
    /// Matches with a positive score, best first. Equal scores keep the
    /// order they had in `listings`. A debt-flagged seeker gets nothing.
    pub fn find_matches(&self, seeker: &Seeker, listings: &[Listing]) -> Vec<Match> {
        if !debt_gate(seeker).is_eligible() {
            tracing::debug!("Seeker {} rejected by debt gate", seeker.id);
            return Vec::new();
        }

        let mut matches: Vec<Match> = listings
            .iter()
            .filter_map(|listing| {
                let evaluation = self.evaluate(seeker, listing);
                let clamped = evaluation.raw_score.min(1.0);

                tracing::debug!(
                    "Evaluated {} for {}: {:?} -> {:.3}",
                    listing.id,
                    seeker.id,
                    evaluation.breakdown,
                    clamped
                );

                if clamped <= 0.0 {
                    return None;
                }

                Some(Match {
                    seeker_id: seeker.id.clone(),
                    listing_id: listing.id.clone(),
                    score: evaluation.score(),
                    reasoning: evaluation.reasoning,
                })
            })
            .collect();

        // Stable sort: ties keep input order
        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::info!(
            "Ranked {} matches for seeker {} (from {} listings)",
            matches.len(),
            seeker.id,
            listings.len()
        );

        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights(chrono::Local::now().date_naive())
    }
}
