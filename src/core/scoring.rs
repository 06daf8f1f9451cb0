use crate::core::interests::InterestExtractor;
use crate::models::{Lifestyle, Listing, ScoringWeights, Seeker};
use std::collections::HashSet;

/// Description token that marks a central, nightlife-friendly listing
pub const CENTRAL_LOCATION_MARKER: &str = "centro";

/// Reason recorded when the verification bonus applies
pub const VERIFIED_CONTRACT_REASON: &str = "property verified by contract";

/// A single factor value in [0, 1] with its explanation
///
/// The explanation is only present when the value is positive.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    pub value: f64,
    pub explanation: Option<String>,
}

impl FactorScore {
    fn new(value: f64, explain: impl FnOnce() -> String) -> Self {
        let explanation = if value > 0.0 { Some(explain()) } else { None };
        Self { value, explanation }
    }
}

/// Per-factor values for one seeker/listing pair
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub budget: f64,
    pub location: f64,
    pub lifestyle: f64,
    pub interests: f64,
    pub amenities: f64,
    pub bonus: f64,
}

impl ScoreBreakdown {
    /// Weighted combination of the factors plus the flat bonus
    ///
    /// score = (
    ///     budget * 0.40 +
    ///     location * 0.25 +
    ///     lifestyle * 0.20 +
    ///     interests * 0.10 +
    ///     amenities * 0.05
    /// ) + bonus
    pub fn combine(&self, weights: &ScoringWeights) -> f64 {
        self.budget * weights.budget
            + self.location * weights.location
            + self.lifestyle * weights.lifestyle
            + self.interests * weights.interests
            + self.amenities * weights.amenities
            + self.bonus
    }
}

/// Budget factor: full marks at or under budget, linear decay above it
#[inline]
pub fn budget_score(seeker: &Seeker, listing: &Listing) -> FactorScore {
    let budget = seeker.preferences.max_budget as f64;
    let price = listing.monthly_price as f64;

    let factor = if price <= budget {
        1.0
    } else {
        (1.0 - (price - budget) / budget.max(1.0)).max(0.0)
    };

    FactorScore::new(factor, || format!("compatible price (factor {:.2})", factor))
}

/// Location factor: neutral 0.5 when the seeker named no locations
#[inline]
pub fn location_score(seeker: &Seeker, listing: &Listing) -> FactorScore {
    let desired = &seeker.preferences.desired_locations;

    let factor = if desired.is_empty() {
        0.5
    } else if desired.iter().any(|city| city == &listing.city) {
        1.0
    } else {
        0.0
    };

    FactorScore::new(factor, || format!("desired location: {}", listing.city))
}

/// Lifestyle factor
///
/// Early risers want somewhere to work, night owls want to be in the centre.
#[inline]
pub fn lifestyle_score(seeker: &Seeker, listing: &Listing) -> FactorScore {
    let factor = match seeker.preferences.lifestyle {
        Lifestyle::Flexible => 0.5,
        Lifestyle::EarlyRiser => {
            if listing.amenities.has_workspace { 1.0 } else { 0.3 }
        }
        Lifestyle::NightOwl => {
            if listing.description.to_lowercase().contains(CENTRAL_LOCATION_MARKER) {
                1.0
            } else {
                0.3
            }
        }
    };

    FactorScore::new(factor, || "compatible lifestyle".to_string())
}

/// Shared-interest factor against the interests inferred from the description
pub fn interest_score(
    seeker: &Seeker,
    listing: &Listing,
    extractor: &dyn InterestExtractor,
) -> FactorScore {
    let interests = &seeker.preferences.interests;

    let factor = if interests.is_empty() {
        0.2
    } else {
        let roommate_interests = extractor.extract(&listing.description);
        let wanted: HashSet<String> = interests.iter().map(|i| i.to_lowercase()).collect();
        let shared = wanted.intersection(&roommate_interests).count();

        (shared as f64 / interests.len().max(1) as f64).min(1.0)
    };

    FactorScore::new(factor, || "shared interests with current roommates".to_string())
}

/// Amenities factor: pets dominate, wifi and workspace add a little each
#[inline]
pub fn amenities_score(seeker: &Seeker, listing: &Listing) -> FactorScore {
    let amenities = &listing.amenities;
    let mut factor: f64 = 0.0;

    if seeker.preferences.allows_pets && amenities.allows_pets {
        factor += 0.6;
    }
    if amenities.wifi {
        factor += 0.2;
    }
    if amenities.has_workspace {
        factor += 0.2;
    }

    let factor = factor.min(1.0);
    FactorScore::new(factor, || "amenities match preferences".to_string())
}

/// Flat credit for listings with a confirmed contract verification
#[inline]
pub fn verification_bonus(listing: &Listing, bonus: f64) -> FactorScore {
    let value = if listing.contract_verified() { bonus } else { 0.0 };
    FactorScore::new(value, || VERIFIED_CONTRACT_REASON.to_string())
}

/// Clamp a raw score to at most 1.0 and round it to three decimals
#[inline]
pub fn finalize_score(raw: f64) -> f64 {
    let clamped = raw.min(1.0).max(0.0);
    (clamped * 1000.0).round() / 1000.0
}
