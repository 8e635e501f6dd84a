//! Country records as served to clients

use std::fmt;

use serde::{Serialize, Serializer};

use crate::continent::{self, Continent};
use crate::iso3166::CountryEntry;

/// International calling code of a country, or the `"Unknown"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneCode {
    Known(u16),
    Unknown,
}

impl PhoneCode {
    /// Build from a raw resolver result; non-positive codes are `Unknown`.
    pub fn from_raw(code: u16) -> Self {
        if code > 0 {
            PhoneCode::Known(code)
        } else {
            PhoneCode::Unknown
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, PhoneCode::Known(_))
    }
}

impl fmt::Display for PhoneCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneCode::Known(code) => write!(f, "+{code}"),
            PhoneCode::Unknown => f.write_str("Unknown"),
        }
    }
}

impl Serialize for PhoneCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One entry of the country catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CountryRecord {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub phone_code: PhoneCode,
    pub continent: Continent,
}

impl CountryRecord {
    /// Build a record from an ISO entry and its resolved calling code.
    pub fn new(entry: &CountryEntry, phone_code: PhoneCode) -> Self {
        Self {
            name: entry.name,
            alpha2: entry.alpha2,
            alpha3: entry.alpha3,
            phone_code,
            continent: continent::classify(entry.alpha2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso3166::CountryDatabase;

    #[test]
    fn test_phone_code_display() {
        assert_eq!(PhoneCode::Known(44).to_string(), "+44");
        assert_eq!(PhoneCode::Unknown.to_string(), "Unknown");
        assert_eq!(PhoneCode::from_raw(0), PhoneCode::Unknown);
        assert_eq!(PhoneCode::from_raw(1), PhoneCode::Known(1));
    }

    #[test]
    fn test_record_wire_format_uses_snake_case_keys() {
        let entry = CountryDatabase::global().by_alpha2("FR").unwrap();
        let record = CountryRecord::new(entry, PhoneCode::Known(33));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "France",
                "alpha2": "FR",
                "alpha3": "FRA",
                "phone_code": "+33",
                "continent": "EU",
            })
        );
    }
}
