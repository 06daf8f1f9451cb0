use crate::core::{FrequencyInterestExtractor, Matcher};
use crate::core::interests::DEFAULT_MIN_TOKEN_CHARS;
use crate::models::ScoringWeights;
use crate::services::InMemoryDebtRegistry;
use chrono::NaiveDate;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub debt_registry: DebtRegistrySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Pins the matcher's notion of today; wall clock when absent
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    #[serde(default = "default_min_interest_token_chars")]
    pub min_interest_token_chars: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            reference_date: None,
            min_interest_token_chars: default_min_interest_token_chars(),
        }
    }
}

fn default_min_interest_token_chars() -> usize { DEFAULT_MIN_TOKEN_CHARS }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_amenities_weight")]
    pub amenities: f64,
    #[serde(default = "default_verification_bonus")]
    pub verification_bonus: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            budget: default_budget_weight(),
            location: default_location_weight(),
            lifestyle: default_lifestyle_weight(),
            interests: default_interests_weight(),
            amenities: default_amenities_weight(),
            verification_bonus: default_verification_bonus(),
        }
    }
}

fn default_budget_weight() -> f64 { 0.40 }
fn default_location_weight() -> f64 { 0.25 }
fn default_lifestyle_weight() -> f64 { 0.20 }
fn default_interests_weight() -> f64 { 0.10 }
fn default_amenities_weight() -> f64 { 0.05 }
fn default_verification_bonus() -> f64 { 0.05 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            budget: config.budget,
            location: config.location,
            lifestyle: config.lifestyle,
            interests: config.interests,
            amenities: config.amenities,
            verification_bonus: config.verification_bonus,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebtRegistrySettings {
    /// Identifiers the registry reports as carrying debt
    #[serde(default)]
    pub debtors: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with COLIVING__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., COLIVING__SCORING__WEIGHTS__BUDGET -> scoring.weights.budget
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    /// Reference date for the matcher and verification stubs
    pub fn today(&self) -> NaiveDate {
        self.matching
            .reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Build a matcher from the configured weights and heuristics
    pub fn matcher(&self) -> Matcher {
        let extractor = FrequencyInterestExtractor::new(self.matching.min_interest_token_chars);
        Matcher::new(self.weights(), self.today()).with_extractor(Arc::new(extractor))
    }

    pub fn debt_registry(&self) -> InMemoryDebtRegistry {
        InMemoryDebtRegistry::new(self.debt_registry.debtors.iter().cloned())
    }
}

fn environment() -> Environment {
    Environment::with_prefix("COLIVING")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("debt_registry.debtors")
        .try_parsing(true)
}
