//! Country code validation.
//!
//! A raw code is normalized (leading `+` stripped, whitespace trimmed,
//! uppercased), matched against the ISO table as alpha-2 and then alpha-3,
//! and enriched with its calling code and continent.
//!
//! The validator resolves calling codes on its own and does not consult the
//! catalog, so a country the catalog omits still validates, reporting
//! `"Unknown"` as its phone code.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::calling_code::CallingCodeResolver;
use crate::continent::{self, Continent};
use crate::iso3166::CountryDatabase;
use crate::record::PhoneCode;

/// Error reported when a code matches no country.
pub const NOT_FOUND: &str = "Country code not found";

/// Details of a successfully validated country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCountry {
    pub country_name: &'static str,
    pub alpha2_code: &'static str,
    pub alpha3_code: &'static str,
    pub phone_code: PhoneCode,
    pub continent: Continent,
}

/// Outcome of validating a code.
///
/// Serializes as `{"isValid": true, "countryName": ..., ...}` or
/// `{"isValid": false, "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(ValidCountry),
    Invalid { error: String },
}

impl ValidationResult {
    pub fn invalid(error: impl Into<String>) -> Self {
        ValidationResult::Invalid { error: error.into() }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn country(&self) -> Option<&ValidCountry> {
        match self {
            ValidationResult::Valid(country) => Some(country),
            ValidationResult::Invalid { .. } => None,
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidationResult::Valid(country) => {
                let mut map = serializer.serialize_map(Some(6))?;
                map.serialize_entry("isValid", &true)?;
                map.serialize_entry("countryName", country.country_name)?;
                map.serialize_entry("alpha2Code", country.alpha2_code)?;
                map.serialize_entry("alpha3Code", country.alpha3_code)?;
                map.serialize_entry("phoneCode", &country.phone_code)?;
                map.serialize_entry("continent", &country.continent)?;
                map.end()
            }
            ValidationResult::Invalid { error } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("isValid", &false)?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}

/// Normalize user input: strip leading `+`, trim whitespace, uppercase.
///
/// Empty results are returned as-is.
pub fn normalize(raw: &str) -> String {
    raw.trim_start_matches('+').trim().to_uppercase()
}

/// Validates codes against the ISO table.
pub struct Validator<'a> {
    database: &'a CountryDatabase,
    resolver: &'a dyn CallingCodeResolver,
}

impl<'a> Validator<'a> {
    pub fn new(database: &'a CountryDatabase, resolver: &'a dyn CallingCodeResolver) -> Self {
        Self { database, resolver }
    }

    /// Validate a raw, user-supplied code.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        let code = normalize(raw);

        let entry = match self.database.lookup(&code) {
            Ok(Some(entry)) => entry,
            Ok(None) => return ValidationResult::invalid(NOT_FOUND),
            Err(e) => {
                debug!(code = %code, error = %e, "country code lookup failed");
                return ValidationResult::invalid(e.to_string());
            }
        };

        let phone_code = match self.resolver.calling_code(entry.alpha2) {
            Ok(code) => PhoneCode::from_raw(code),
            Err(e) => {
                debug!(alpha2 = entry.alpha2, error = %e, "calling code unresolved");
                PhoneCode::Unknown
            }
        };

        ValidationResult::Valid(ValidCountry {
            country_name: entry.name,
            alpha2_code: entry.alpha2,
            alpha3_code: entry.alpha3,
            phone_code,
            continent: continent::classify(entry.alpha2),
        })
    }
}
