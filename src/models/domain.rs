use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Daily rhythm a seeker declares, used by the lifestyle factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifestyle {
    #[serde(rename = "early_bird", alias = "early_riser")]
    EarlyRiser,
    #[serde(rename = "night_owl", alias = "night_oriented")]
    NightOwl,
    #[default]
    Flexible,
}

/// Result of the external debt registry lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtStatus {
    #[default]
    Clear,
    #[serde(rename = "has_debt", alias = "flagged")]
    Flagged,
}

impl DebtStatus {
    pub fn is_flagged(self) -> bool {
        matches!(self, DebtStatus::Flagged)
    }
}

/// Housing preferences that drive the affinity factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SeekerPreferences {
    pub max_budget: u32,
    #[serde(default)]
    pub desired_locations: Vec<String>,
    #[serde(default)]
    pub lifestyle: Lifestyle,
    #[serde(default)]
    pub allows_pets: bool,
    #[serde(default, alias = "hobbies")]
    pub interests: Vec<String>,
}

/// Outcome of the biometric identity check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityVerification {
    pub verified: bool,
    #[serde(default)]
    pub last_checked_at: Option<NaiveDate>,
    #[serde(default)]
    pub provider_reference: Option<String>,
}

/// A person looking for a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Seeker {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    pub birthdate: NaiveDate,
    #[validate(nested)]
    pub preferences: SeekerPreferences,
    #[serde(default)]
    pub debt_status: DebtStatus,
    #[serde(default)]
    pub identity_verification: Option<IdentityVerification>,
}

impl Seeker {
    /// Copy of this seeker carrying the given identity verification record
    pub fn with_identity_verification(&self, verification: IdentityVerification) -> Self {
        Self {
            identity_verification: Some(verification),
            ..self.clone()
        }
    }
}

/// Amenities a listing offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Amenities {
    #[serde(default = "default_true")]
    pub wifi: bool,
    #[serde(default)]
    pub has_workspace: bool,
    #[serde(default)]
    pub allows_pets: bool,
    #[serde(default = "default_bedrooms")]
    #[validate(range(min = 1))]
    pub bedrooms: u8,
    #[serde(default = "default_bathrooms")]
    #[validate(range(min = 0.5))]
    pub bathrooms: f32,
}

impl Default for Amenities {
    fn default() -> Self {
        Self {
            wifi: default_true(),
            has_workspace: false,
            allows_pets: false,
            bedrooms: default_bedrooms(),
            bathrooms: default_bathrooms(),
        }
    }
}

fn default_true() -> bool { true }
fn default_bedrooms() -> u8 { 1 }
fn default_bathrooms() -> f32 { 1.0 }

/// Outcome of the ownership/lease contract check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractVerification {
    pub verified: bool,
    #[serde(default)]
    pub document_reference: Option<String>,
    #[serde(default)]
    pub verified_at: Option<NaiveDate>,
}

/// A room offered in a shared flat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Listing {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1))]
    pub city: String,
    pub monthly_price: u32,
    #[serde(default)]
    pub available_from: Option<NaiveDate>,
    #[serde(default)]
    #[validate(nested)]
    pub amenities: Amenities,
    #[serde(default)]
    pub contract_verification: Option<ContractVerification>,
}

impl Listing {
    /// Whether a confirmed contract verification is attached
    pub fn contract_verified(&self) -> bool {
        self.contract_verification
            .as_ref()
            .map(|v| v.verified)
            .unwrap_or(false)
    }

    /// Copy of this listing carrying the given contract verification record
    pub fn with_contract_verification(&self, verification: ContractVerification) -> Self {
        Self {
            contract_verification: Some(verification),
            ..self.clone()
        }
    }
}

/// Ranked compatibility between a seeker and a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub seeker_id: String,
    pub listing_id: String,
    pub score: f64,
    pub reasoning: Vec<String>,
}

/// Factor weights and the flat verification credit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub budget: f64,
    pub location: f64,
    pub lifestyle: f64,
    pub interests: f64,
    pub amenities: f64,
    pub verification_bonus: f64,
}

impl ScoringWeights {
    /// Total of the five factor weights (the bonus is not a factor)
    pub fn sum(&self) -> f64 {
        self.budget + self.location + self.lifestyle + self.interests + self.amenities
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            budget: 0.40,
            location: 0.25,
            lifestyle: 0.20,
            interests: 0.10,
            amenities: 0.05,
            verification_bonus: 0.05,
        }
    }
}
