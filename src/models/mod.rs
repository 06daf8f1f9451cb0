// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Amenities, ContractVerification, DebtStatus, IdentityVerification, Lifestyle, Listing, Match, ScoringWeights, Seeker, SeekerPreferences};
pub use requests::MatchInput;
pub use responses::SeekerMatches;
