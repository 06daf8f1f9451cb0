use crate::core::Matcher;
use crate::error::AppError;
use crate::models::{Listing, MatchInput, Seeker, SeekerMatches};
use crate::services::{DebtRegistry, RecordIntake};
use serde::Serialize;

/// Outcome of matching a batch of records
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub results: Vec<SeekerMatches>,
    /// Records refused at intake, with the reason
    pub rejected: Vec<String>,
}

/// Admit the records in `input` and rank listings for each admitted seeker
///
/// Invalid records are logged and reported rather than failing the batch,
/// unless `only_seeker` names the seeker that was refused.
pub fn run_batch<R: DebtRegistry>(
    input: MatchInput,
    intake: &RecordIntake<R>,
    matcher: &Matcher,
    only_seeker: Option<&str>,
) -> Result<BatchReport, AppError> {
    let mut report = BatchReport::default();

    let listings: Vec<Listing> = input
        .listings
        .into_iter()
        .filter_map(|listing| match intake.admit_listing(listing) {
            Ok(listing) => Some(listing),
            Err(e) => {
                tracing::warn!("Skipping listing: {}", e);
                report.rejected.push(e.to_string());
                None
            }
        })
        .collect();

    let seekers: Vec<Seeker> = match only_seeker {
        Some(id) => {
            let seeker = input
                .seekers
                .into_iter()
                .find(|s| s.id == id)
                .ok_or_else(|| AppError::UnknownSeeker(id.to_string()))?;
            vec![intake.admit_seeker(seeker)?]
        }
        None => input
            .seekers
            .into_iter()
            .filter_map(|seeker| match intake.admit_seeker(seeker) {
                Ok(seeker) => Some(seeker),
                Err(e) => {
                    tracing::warn!("Skipping seeker: {}", e);
                    report.rejected.push(e.to_string());
                    None
                }
            })
            .collect(),
    };

    for seeker in &seekers {
        let matches = matcher.find_matches(seeker, &listings);

        tracing::debug!(
            "Returning {} matches for seeker {} (from {} listings)",
            matches.len(),
            seeker.id,
            listings.len()
        );

        report.results.push(SeekerMatches {
            seeker_id: seeker.id.clone(),
            matches,
        });
    }

    Ok(report)
}
