// Integration tests for Coliving Match

use chrono::NaiveDate;
use coliving_match::core::scoring::VERIFIED_CONTRACT_REASON;
use coliving_match::core::Matcher;
use coliving_match::models::{
    Amenities, DebtStatus, Lifestyle, Listing, Seeker, SeekerPreferences,
};
use coliving_match::services::{
    ContractVerificationService, IdentityVerificationService, InMemoryDebtRegistry, RecordIntake,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn create_test_seeker(id: &str, max_budget: u32) -> Seeker {
    Seeker {
        id: id.to_string(),
        full_name: "María Inquilina".to_string(),
        email: "maria@example.com".to_string(),
        birthdate: NaiveDate::from_ymd_opt(1993, 7, 12).unwrap(),
        preferences: SeekerPreferences {
            max_budget,
            desired_locations: vec!["Barcelona".to_string()],
            lifestyle: Lifestyle::Flexible,
            allows_pets: true,
            interests: vec!["yoga".to_string(), "cocina".to_string()],
        },
        debt_status: DebtStatus::Clear,
        identity_verification: None,
    }
}

fn create_test_listing(id: &str, city: &str, monthly_price: u32) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Habitación {}", id),
        description: "Apartamento céntrico con vecinas fans del yoga yoga y cocina.".to_string(),
        city: city.to_string(),
        monthly_price,
        available_from: Some(today()),
        amenities: Amenities {
            wifi: true,
            has_workspace: true,
            allows_pets: true,
            bedrooms: 2,
            bathrooms: 1.0,
        },
        contract_verification: None,
    }
}

fn varied_listings() -> Vec<Listing> {
    (0..40)
        .map(|i| {
            let city = ["Barcelona", "Madrid", "Valencia", "Sevilla"][i % 4];
            let mut listing = create_test_listing(&format!("prop-{}", i), city, 400 + (i as u32 * 37) % 900);
            listing.amenities.has_workspace = i % 3 == 0;
            listing.amenities.allows_pets = i % 2 == 0;
            listing.amenities.wifi = i % 5 != 0;
            if i % 7 == 0 {
                listing.description = "Piso en el centro, cocina cocina y terraza".to_string();
            }
            if i % 4 == 1 {
                listing.contract_verification = ContractVerificationService::new(today())
                    .verify_contract(&format!("contract-{}", i))
                    .ok();
            }
            listing
        })
        .collect()
}

#[test]
fn test_integration_verified_listing_in_budget() {
    let matcher = Matcher::with_default_weights(today());
    let seeker = create_test_seeker("11111111X", 800);

    let listing = create_test_listing("prop-bcn-1", "Barcelona", 750)
        .with_contract_verification(
            ContractVerificationService::new(today())
                .verify_contract("contract-abc")
                .unwrap(),
        );

    let matches = matcher.find_matches(&seeker, &[listing]);

    assert_eq!(matches.len(), 1);
    assert!(matches[0].score > 0.8);
    assert!(matches[0].reasoning.iter().any(|r| r == VERIFIED_CONTRACT_REASON));
}

#[test]
fn test_integration_debt_flagged_seeker_gets_nothing() {
    let matcher = Matcher::with_default_weights(today());
    let mut seeker = create_test_seeker("99999999D", 5000);
    seeker.debt_status = DebtStatus::Flagged;

    assert!(matcher.find_matches(&seeker, &varied_listings()).is_empty());
    assert!(matcher.find_matches(&seeker, &[]).is_empty());
}

#[test]
fn test_integration_no_preference_signal_still_scores() {
    let matcher = Matcher::with_default_weights(today());
    let mut seeker = create_test_seeker("11111111X", 800);
    seeker.preferences.desired_locations.clear();
    seeker.preferences.interests.clear();
    seeker.preferences.allows_pets = false;

    let mut listing = create_test_listing("prop-1", "Bilbao", 600);
    listing.amenities.has_workspace = false;

    let matches = matcher.find_matches(&seeker, &[listing]);

    assert_eq!(matches.len(), 1);
    // 0.40 budget + 0.125 location + 0.10 lifestyle + 0.02 interests + 0.01 amenities
    assert!((matches[0].score - 0.655).abs() < 1e-9);
}

#[test]
fn test_integration_scores_bounded_and_rounded() {
    let matcher = Matcher::with_default_weights(today());
    let seeker = create_test_seeker("11111111X", 700);

    let matches = matcher.find_matches(&seeker, &varied_listings());
    assert!(!matches.is_empty());

    for m in &matches {
        assert!((0.0..=1.0).contains(&m.score), "score out of range: {}", m.score);
        let scaled = m.score * 1000.0;
        assert!((scaled - scaled.round()).abs() < 1e-6, "more than 3 decimals: {}", m.score);
        assert_eq!(m.seeker_id, "11111111X");
    }

    assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_integration_deterministic() {
    let matcher = Matcher::with_default_weights(today());
    let seeker = create_test_seeker("11111111X", 700);
    let listings = varied_listings();

    let first = matcher.find_matches(&seeker, &listings);
    let second = matcher.find_matches(&seeker, &listings);

    assert_eq!(first, second);
}

#[test]
fn test_integration_stable_ranking_for_ties() {
    let matcher = Matcher::with_default_weights(today());
    let seeker = create_test_seeker("11111111X", 800);

    let listings = vec![
        create_test_listing("c", "Madrid", 500),
        create_test_listing("top", "Barcelona", 500),
        create_test_listing("a", "Madrid", 500),
        create_test_listing("b", "Madrid", 500),
    ];

    let ids: Vec<String> = matcher
        .find_matches(&seeker, &listings)
        .into_iter()
        .map(|m| m.listing_id)
        .collect();

    assert_eq!(ids, vec!["top", "c", "a", "b"]);
}

#[test]
fn test_integration_intake_and_matching_flow() {
    let intake = RecordIntake::new(InMemoryDebtRegistry::new(["12345678A"]));
    let matcher = Matcher::with_default_weights(today());

    let seeker = intake
        .admit_seeker(create_test_seeker("11111111X", 800))
        .unwrap();
    assert_eq!(seeker.debt_status, DebtStatus::Clear);

    let identity = IdentityVerificationService::new(today())
        .verify("selfie-123")
        .unwrap();
    let seeker = seeker.with_identity_verification(identity);
    assert!(seeker.identity_verification.as_ref().unwrap().verified);

    let listing = intake
        .admit_listing(create_test_listing("prop-bcn-1", "Barcelona", 750))
        .unwrap();
    assert!(listing.contract_verification.is_none());

    let contract = ContractVerificationService::new(today())
        .verify_contract("contract-abc")
        .unwrap();
    let listing = listing.with_contract_verification(contract);
    assert!(listing.contract_verified());

    let matches = matcher.find_matches(&seeker, &[listing]);
    assert_eq!(matches[0].listing_id, "prop-bcn-1");

    // The registry flags the debtor regardless of what the record claims
    let debtor = intake
        .admit_seeker(create_test_seeker("12345678A", 500))
        .unwrap();
    assert_eq!(debtor.debt_status, DebtStatus::Flagged);
    assert!(matcher
        .find_matches(&debtor, &[create_test_listing("prop-1", "Barcelona", 400)])
        .is_empty());
}
