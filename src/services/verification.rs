use crate::models::{ContractVerification, IdentityVerification};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the verification stubs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Missing selfie reference")]
    MissingSelfieReference,

    #[error("Missing contract reference")]
    MissingContractReference,
}

/// Stand-in for the biometric provider
///
/// Any non-blank selfie reference is accepted and stamped with the
/// service's reference date.
#[derive(Debug, Clone, Copy)]
pub struct IdentityVerificationService {
    today: NaiveDate,
}

impl IdentityVerificationService {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn verify(&self, selfie_reference: &str) -> Result<IdentityVerification, VerificationError> {
        let reference = selfie_reference.trim();
        if reference.is_empty() {
            return Err(VerificationError::MissingSelfieReference);
        }

        tracing::debug!("Identity verified with provider reference {}", reference);

        Ok(IdentityVerification {
            verified: true,
            last_checked_at: Some(self.today),
            provider_reference: Some(reference.to_string()),
        })
    }
}

/// Stand-in for the ownership/lease contract check
#[derive(Debug, Clone, Copy)]
pub struct ContractVerificationService {
    today: NaiveDate,
}

impl ContractVerificationService {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn verify_contract(
        &self,
        contract_reference: &str,
    ) -> Result<ContractVerification, VerificationError> {
        let reference = contract_reference.trim();
        if reference.is_empty() {
            return Err(VerificationError::MissingContractReference);
        }

        tracing::debug!("Contract verified with document reference {}", reference);

        Ok(ContractVerification {
            verified: true,
            document_reference: Some(reference.to_string()),
            verified_at: Some(self.today),
        })
    }
}
