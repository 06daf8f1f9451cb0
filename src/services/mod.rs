// Service exports
pub mod debt_registry;
pub mod intake;
pub mod verification;

pub use debt_registry::{DebtRegistry, InMemoryDebtRegistry};
pub use intake::{IntakeError, RecordIntake};
pub use verification::{ContractVerificationService, IdentityVerificationService, VerificationError};
