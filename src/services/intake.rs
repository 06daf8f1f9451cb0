use crate::models::{Listing, Seeker};
use crate::services::debt_registry::DebtRegistry;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Reasons a record is refused before it reaches the matcher
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Invalid record {id}: {source}")]
    Invalid {
        id: String,
        #[source]
        source: ValidationErrors,
    },

    #[error("Identity not verified for seeker {0}")]
    IdentityNotVerified(String),

    #[error("Contract not verified for listing {0}")]
    ContractNotVerified(String),
}

/// Gatekeeper between raw records and the matcher
///
/// Enforces the field invariants the matcher relies on and stamps each
/// seeker with the debt status reported by the registry.
#[derive(Debug, Clone)]
pub struct RecordIntake<R> {
    registry: R,
}

impl<R: DebtRegistry> RecordIntake<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Validate a seeker and refresh its debt status from the registry
    pub fn admit_seeker(&self, seeker: Seeker) -> Result<Seeker, IntakeError> {
        seeker.validate().map_err(|source| IntakeError::Invalid {
            id: seeker.id.clone(),
            source,
        })?;

        if matches!(&seeker.identity_verification, Some(v) if !v.verified) {
            tracing::info!("Rejecting seeker {}: identity not verified", seeker.id);
            return Err(IntakeError::IdentityNotVerified(seeker.id));
        }

        let debt_status = self.registry.debt_status(&seeker.id);
        if debt_status != seeker.debt_status {
            tracing::info!(
                "Debt status for seeker {} set to {:?} by registry",
                seeker.id,
                debt_status
            );
        }

        Ok(Seeker { debt_status, ..seeker })
    }

    /// Validate a listing before it is offered to the matcher
    pub fn admit_listing(&self, listing: Listing) -> Result<Listing, IntakeError> {
        listing.validate().map_err(|source| IntakeError::Invalid {
            id: listing.id.clone(),
            source,
        })?;

        if matches!(&listing.contract_verification, Some(v) if !v.verified) {
            tracing::info!("Rejecting listing {}: contract not verified", listing.id);
            return Err(IntakeError::ContractNotVerified(listing.id));
        }

        Ok(listing)
    }
}
