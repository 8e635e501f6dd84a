//! Behavioural properties of the country query service
//!
//! Exercises the service the way the HTTP layer does: format and case
//! insensitivity of validation, catalog stability, and list/random
//! consistency.

use countrydex_core::continent::CONTINENT_TABLE;
use countrydex_core::{
    CallingCodeResolver, Continent, CountryDatabase, QueryService, StaticCallingCodes,
    ValidationResult,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_validation_ignores_case_and_plus_prefix() {
    let service = QueryService::new();
    let resolver = StaticCallingCodes;

    for entry in CountryDatabase::global().iter() {
        if resolver.calling_code(entry.alpha2) == Ok(0) {
            continue;
        }

        let plain = service.validate(entry.alpha2);
        assert!(plain.is_valid(), "{} should validate", entry.alpha2);
        assert_eq!(service.validate(&entry.alpha2.to_lowercase()), plain);
        assert_eq!(service.validate(&format!("+{}", entry.alpha2)), plain);
        assert_eq!(service.validate(&format!("  {} ", entry.alpha2)), plain);
        assert_eq!(service.validate(entry.alpha3), plain);
    }
}

#[test]
fn test_nonexistent_code_is_not_found() {
    let service = QueryService::new();
    for code in ["ZZ", "XX", "AAA", "Q"] {
        assert_eq!(
            service.validate(code),
            ValidationResult::Invalid {
                error: "Country code not found".to_string()
            },
            "{code}"
        );
    }
}

#[test]
fn test_united_states_example() {
    let service = QueryService::new();
    let json = serde_json::to_value(service.validate("US")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "isValid": true,
            "countryName": "United States",
            "alpha2Code": "US",
            "alpha3Code": "USA",
            "phoneCode": "+1",
            "continent": "NA",
        })
    );
}

#[test]
fn test_catalog_reads_are_stable() {
    let service = QueryService::new();
    let first = service.list(None);
    let second = service.list(None);
    assert_eq!(first, second);
    assert_eq!(first.len(), service.catalog_len());
}

#[test]
fn test_continent_filter_is_subset_of_curated_set() {
    let service = QueryService::new();

    for (continent, members) in CONTINENT_TABLE {
        let listed = service.list(Some(continent.as_tag()));
        assert!(!listed.is_empty(), "{continent} has no records");
        for record in &listed {
            assert_eq!(record.continent, *continent);
            assert!(members.contains(&record.alpha2), "{} not curated", record.alpha2);
        }
    }
}

#[test]
fn test_unknown_filter_lists_uncurated_countries() {
    let service = QueryService::new();
    let unknown = service.list(Some("Unknown"));
    let curated: usize = Continent::ALL
        .iter()
        .map(|c| service.list(Some(c.as_tag())).len())
        .sum();
    assert_eq!(unknown.len() + curated, service.catalog_len());
    assert!(service.list(Some("XX")).is_empty());
}

#[test]
fn test_random_entry_comes_from_list() {
    let service = QueryService::new();
    let all = service.list(None);
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..100 {
        let record = service.random_entry_with(&mut rng).unwrap();
        assert!(all.contains(&record));
        assert!(record.phone_code.is_known());
    }

    assert!(all.contains(&service.random_entry().unwrap()));
}

#[test]
fn test_concurrent_first_access_builds_once() {
    let service = std::sync::Arc::new(QueryService::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            std::thread::spawn(move || service.catalog() as *const _ as usize)
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}
