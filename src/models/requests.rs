use serde::{Deserialize, Serialize};
use crate::models::domain::{Listing, Seeker};

/// Batch of records handed to the command-line front end
///
/// ```json
/// {
///   "seekers": [{ "id": "...", "preferences": { "max_budget": 600 }, ... }],
///   "listings": [{ "id": "...", "city": "Madrid", "monthly_price": 550, ... }]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchInput {
    #[serde(default)]
    pub seekers: Vec<Seeker>,
    #[serde(default)]
    pub listings: Vec<Listing>,
}
