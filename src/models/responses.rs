use serde::{Deserialize, Serialize};
use crate::models::domain::Match;

/// Ranked matches produced for one seeker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeekerMatches {
    pub seeker_id: String,
    pub matches: Vec<Match>,
}
