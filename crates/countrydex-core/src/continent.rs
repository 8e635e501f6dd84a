//! Continent classification.
//!
//! The table below is hand-curated and deliberately incomplete: only the
//! countries listed here are assigned a continent, everything else is
//! [`Continent::Unknown`].

use std::fmt;

use serde::Serialize;

/// Continent tag attached to a country record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Continent {
    #[serde(rename = "NA")]
    NorthAmerica,
    #[serde(rename = "EU")]
    Europe,
    #[serde(rename = "AS")]
    Asia,
    #[serde(rename = "AF")]
    Africa,
    #[serde(rename = "OC")]
    Oceania,
    #[serde(rename = "SA")]
    SouthAmerica,
    Unknown,
}

impl Continent {
    /// The six classified continents, in table order.
    pub const ALL: [Continent; 6] = [
        Continent::NorthAmerica,
        Continent::Europe,
        Continent::Asia,
        Continent::Africa,
        Continent::Oceania,
        Continent::SouthAmerica,
    ];

    /// Wire tag for this continent.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Continent::NorthAmerica => "NA",
            Continent::Europe => "EU",
            Continent::Asia => "AS",
            Continent::Africa => "AF",
            Continent::Oceania => "OC",
            Continent::SouthAmerica => "SA",
            Continent::Unknown => "Unknown",
        }
    }

    /// Parse a wire tag, ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Option<Continent> {
        Self::ALL
            .into_iter()
            .chain([Continent::Unknown])
            .find(|c| c.as_tag().eq_ignore_ascii_case(tag))
    }

    /// Alpha-2 codes assigned to this continent.
    pub fn members(&self) -> &'static [&'static str] {
        CONTINENT_TABLE
            .iter()
            .find(|(continent, _)| continent == self)
            .map(|(_, codes)| *codes)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Curated continent membership.
pub const CONTINENT_TABLE: &[(Continent, &[&str])] = &[
    (Continent::NorthAmerica, &["US", "CA", "MX"]),
    (Continent::Europe, &["GB", "FR", "DE", "IT", "ES", "NL", "BE", "CH"]),
    (Continent::Asia, &["CN", "JP", "IN", "KR", "SG", "TH", "MY"]),
    (Continent::Africa, &["ZA", "EG", "NG", "KE", "MA"]),
    (Continent::Oceania, &["AU", "NZ", "FJ", "PG"]),
    (Continent::SouthAmerica, &["BR", "AR", "CO", "CL", "PE"]),
];

/// Classify an alpha-2 code. Codes outside the curated table are `Unknown`.
pub fn classify(alpha2: &str) -> Continent {
    CONTINENT_TABLE
        .iter()
        .find(|(_, codes)| codes.iter().any(|code| *code == alpha2))
        .map_or(Continent::Unknown, |(continent, _)| *continent)
}
