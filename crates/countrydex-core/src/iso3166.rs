//! ISO 3166-1 reference table.
//!
//! A compiled-in copy of every officially assigned ISO 3166-1 country,
//! with its alpha-2 code, alpha-3 code and English short name.
//!
//! # Usage
//!
//! ```
//! use countrydex_core::iso3166::CountryDatabase;
//!
//! let db = CountryDatabase::global();
//! let us = db.by_alpha3("USA").unwrap();
//! assert_eq!(us.alpha2, "US");
//! assert_eq!(us.name, "United States");
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::LookupError;

/// A single row of the ISO 3166-1 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryEntry {
    /// Two-letter code, uppercase.
    pub alpha2: &'static str,
    /// Three-letter code, uppercase.
    pub alpha3: &'static str,
    /// English short name.
    pub name: &'static str,
}

// ============================================================================
// STATIC TABLE DATA
// ============================================================================

/// All 249 ISO 3166-1 entries, ordered by alpha-2 code.
#[rustfmt::skip]
pub const COUNTRIES: &[CountryEntry] = &[
    CountryEntry { alpha2: "AD", alpha3: "AND", name: "Andorra" },
    CountryEntry { alpha2: "AE", alpha3: "ARE", name: "United Arab Emirates" },
    CountryEntry { alpha2: "AF", alpha3: "AFG", name: "Afghanistan" },
    CountryEntry { alpha2: "AG", alpha3: "ATG", name: "Antigua and Barbuda" },
    CountryEntry { alpha2: "AI", alpha3: "AIA", name: "Anguilla" },
    CountryEntry { alpha2: "AL", alpha3: "ALB", name: "Albania" },
    CountryEntry { alpha2: "AM", alpha3: "ARM", name: "Armenia" },
    CountryEntry { alpha2: "AO", alpha3: "AGO", name: "Angola" },
    CountryEntry { alpha2: "AQ", alpha3: "ATA", name: "Antarctica" },
    CountryEntry { alpha2: "AR", alpha3: "ARG", name: "Argentina" },
    CountryEntry { alpha2: "AS", alpha3: "ASM", name: "American Samoa" },
    CountryEntry { alpha2: "AT", alpha3: "AUT", name: "Austria" },
    CountryEntry { alpha2: "AU", alpha3: "AUS", name: "Australia" },
    CountryEntry { alpha2: "AW", alpha3: "ABW", name: "Aruba" },
    CountryEntry { alpha2: "AX", alpha3: "ALA", name: "Åland Islands" },
    CountryEntry { alpha2: "AZ", alpha3: "AZE", name: "Azerbaijan" },
    CountryEntry { alpha2: "BA", alpha3: "BIH", name: "Bosnia and Herzegovina" },
    CountryEntry { alpha2: "BB", alpha3: "BRB", name: "Barbados" },
    CountryEntry { alpha2: "BD", alpha3: "BGD", name: "Bangladesh" },
    CountryEntry { alpha2: "BE", alpha3: "BEL", name: "Belgium" },
    CountryEntry { alpha2: "BF", alpha3: "BFA", name: "Burkina Faso" },
    CountryEntry { alpha2: "BG", alpha3: "BGR", name: "Bulgaria" },
    CountryEntry { alpha2: "BH", alpha3: "BHR", name: "Bahrain" },
    CountryEntry { alpha2: "BI", alpha3: "BDI", name: "Burundi" },
    CountryEntry { alpha2: "BJ", alpha3: "BEN", name: "Benin" },
    CountryEntry { alpha2: "BL", alpha3: "BLM", name: "Saint Barthélemy" },
    CountryEntry { alpha2: "BM", alpha3: "BMU", name: "Bermuda" },
    CountryEntry { alpha2: "BN", alpha3: "BRN", name: "Brunei Darussalam" },
    CountryEntry { alpha2: "BO", alpha3: "BOL", name: "Bolivia, Plurinational State of" },
    CountryEntry { alpha2: "BQ", alpha3: "BES", name: "Bonaire, Sint Eustatius and Saba" },
    CountryEntry { alpha2: "BR", alpha3: "BRA", name: "Brazil" },
    CountryEntry { alpha2: "BS", alpha3: "BHS", name: "Bahamas" },
    CountryEntry { alpha2: "BT", alpha3: "BTN", name: "Bhutan" },
    CountryEntry { alpha2: "BV", alpha3: "BVT", name: "Bouvet Island" },
    CountryEntry { alpha2: "BW", alpha3: "BWA", name: "Botswana" },
    CountryEntry { alpha2: "BY", alpha3: "BLR", name: "Belarus" },
    CountryEntry { alpha2: "BZ", alpha3: "BLZ", name: "Belize" },
    CountryEntry { alpha2: "CA", alpha3: "CAN", name: "Canada" },
    CountryEntry { alpha2: "CC", alpha3: "CCK", name: "Cocos (Keeling) Islands" },
    CountryEntry { alpha2: "CD", alpha3: "COD", name: "Congo, The Democratic Republic of the" },
    CountryEntry { alpha2: "CF", alpha3: "CAF", name: "Central African Republic" },
    CountryEntry { alpha2: "CG", alpha3: "COG", name: "Congo" },
    CountryEntry { alpha2: "CH", alpha3: "CHE", name: "Switzerland" },
    CountryEntry { alpha2: "CI", alpha3: "CIV", name: "Côte d'Ivoire" },
    CountryEntry { alpha2: "CK", alpha3: "COK", name: "Cook Islands" },
    CountryEntry { alpha2: "CL", alpha3: "CHL", name: "Chile" },
    CountryEntry { alpha2: "CM", alpha3: "CMR", name: "Cameroon" },
    CountryEntry { alpha2: "CN", alpha3: "CHN", name: "China" },
    CountryEntry { alpha2: "CO", alpha3: "COL", name: "Colombia" },
    CountryEntry { alpha2: "CR", alpha3: "CRI", name: "Costa Rica" },
    CountryEntry { alpha2: "CU", alpha3: "CUB", name: "Cuba" },
    CountryEntry { alpha2: "CV", alpha3: "CPV", name: "Cabo Verde" },
    CountryEntry { alpha2: "CW", alpha3: "CUW", name: "Curaçao" },
    CountryEntry { alpha2: "CX", alpha3: "CXR", name: "Christmas Island" },
    CountryEntry { alpha2: "CY", alpha3: "CYP", name: "Cyprus" },
    CountryEntry { alpha2: "CZ", alpha3: "CZE", name: "Czechia" },
    CountryEntry { alpha2: "DE", alpha3: "DEU", name: "Germany" },
    CountryEntry { alpha2: "DJ", alpha3: "DJI", name: "Djibouti" },
    CountryEntry { alpha2: "DK", alpha3: "DNK", name: "Denmark" },
    CountryEntry { alpha2: "DM", alpha3: "DMA", name: "Dominica" },
    CountryEntry { alpha2: "DO", alpha3: "DOM", name: "Dominican Republic" },
    CountryEntry { alpha2: "DZ", alpha3: "DZA", name: "Algeria" },
    CountryEntry { alpha2: "EC", alpha3: "ECU", name: "Ecuador" },
    CountryEntry { alpha2: "EE", alpha3: "EST", name: "Estonia" },
    CountryEntry { alpha2: "EG", alpha3: "EGY", name: "Egypt" },
    CountryEntry { alpha2: "EH", alpha3: "ESH", name: "Western Sahara" },
    CountryEntry { alpha2: "ER", alpha3: "ERI", name: "Eritrea" },
    CountryEntry { alpha2: "ES", alpha3: "ESP", name: "Spain" },
    CountryEntry { alpha2: "ET", alpha3: "ETH", name: "Ethiopia" },
    CountryEntry { alpha2: "FI", alpha3: "FIN", name: "Finland" },
    CountryEntry { alpha2: "FJ", alpha3: "FJI", name: "Fiji" },
    CountryEntry { alpha2: "FK", alpha3: "FLK", name: "Falkland Islands (Malvinas)" },
    CountryEntry { alpha2: "FM", alpha3: "FSM", name: "Micronesia, Federated States of" },
    CountryEntry { alpha2: "FO", alpha3: "FRO", name: "Faroe Islands" },
    CountryEntry { alpha2: "FR", alpha3: "FRA", name: "France" },
    CountryEntry { alpha2: "GA", alpha3: "GAB", name: "Gabon" },
    CountryEntry { alpha2: "GB", alpha3: "GBR", name: "United Kingdom" },
    CountryEntry { alpha2: "GD", alpha3: "GRD", name: "Grenada" },
    CountryEntry { alpha2: "GE", alpha3: "GEO", name: "Georgia" },
    CountryEntry { alpha2: "GF", alpha3: "GUF", name: "French Guiana" },
    CountryEntry { alpha2: "GG", alpha3: "GGY", name: "Guernsey" },
    CountryEntry { alpha2: "GH", alpha3: "GHA", name: "Ghana" },
    CountryEntry { alpha2: "GI", alpha3: "GIB", name: "Gibraltar" },
    CountryEntry { alpha2: "GL", alpha3: "GRL", name: "Greenland" },
    CountryEntry { alpha2: "GM", alpha3: "GMB", name: "Gambia" },
    CountryEntry { alpha2: "GN", alpha3: "GIN", name: "Guinea" },
    CountryEntry { alpha2: "GP", alpha3: "GLP", name: "Guadeloupe" },
    CountryEntry { alpha2: "GQ", alpha3: "GNQ", name: "Equatorial Guinea" },
    CountryEntry { alpha2: "GR", alpha3: "GRC", name: "Greece" },
    CountryEntry { alpha2: "GS", alpha3: "SGS", name: "South Georgia and the South Sandwich Islands" },
    CountryEntry { alpha2: "GT", alpha3: "GTM", name: "Guatemala" },
    CountryEntry { alpha2: "GU", alpha3: "GUM", name: "Guam" },
    CountryEntry { alpha2: "GW", alpha3: "GNB", name: "Guinea-Bissau" },
    CountryEntry { alpha2: "GY", alpha3: "GUY", name: "Guyana" },
    CountryEntry { alpha2: "HK", alpha3: "HKG", name: "Hong Kong" },
    CountryEntry { alpha2: "HM", alpha3: "HMD", name: "Heard Island and McDonald Islands" },
    CountryEntry { alpha2: "HN", alpha3: "HND", name: "Honduras" },
    CountryEntry { alpha2: "HR", alpha3: "HRV", name: "Croatia" },
    CountryEntry { alpha2: "HT", alpha3: "HTI", name: "Haiti" },
    CountryEntry { alpha2: "HU", alpha3: "HUN", name: "Hungary" },
    CountryEntry { alpha2: "ID", alpha3: "IDN", name: "Indonesia" },
    CountryEntry { alpha2: "IE", alpha3: "IRL", name: "Ireland" },
    CountryEntry { alpha2: "IL", alpha3: "ISR", name: "Israel" },
    CountryEntry { alpha2: "IM", alpha3: "IMN", name: "Isle of Man" },
    CountryEntry { alpha2: "IN", alpha3: "IND", name: "India" },
    CountryEntry { alpha2: "IO", alpha3: "IOT", name: "British Indian Ocean Territory" },
    CountryEntry { alpha2: "IQ", alpha3: "IRQ", name: "Iraq" },
    CountryEntry { alpha2: "IR", alpha3: "IRN", name: "Iran, Islamic Republic of" },
    CountryEntry { alpha2: "IS", alpha3: "ISL", name: "Iceland" },
    CountryEntry { alpha2: "IT", alpha3: "ITA", name: "Italy" },
    CountryEntry { alpha2: "JE", alpha3: "JEY", name: "Jersey" },
    CountryEntry { alpha2: "JM", alpha3: "JAM", name: "Jamaica" },
    CountryEntry { alpha2: "JO", alpha3: "JOR", name: "Jordan" },
    CountryEntry { alpha2: "JP", alpha3: "JPN", name: "Japan" },
    CountryEntry { alpha2: "KE", alpha3: "KEN", name: "Kenya" },
    CountryEntry { alpha2: "KG", alpha3: "KGZ", name: "Kyrgyzstan" },
    CountryEntry { alpha2: "KH", alpha3: "KHM", name: "Cambodia" },
    CountryEntry { alpha2: "KI", alpha3: "KIR", name: "Kiribati" },
    CountryEntry { alpha2: "KM", alpha3: "COM", name: "Comoros" },
    CountryEntry { alpha2: "KN", alpha3: "KNA", name: "Saint Kitts and Nevis" },
    CountryEntry { alpha2: "KP", alpha3: "PRK", name: "Korea, Democratic People's Republic of" },
    CountryEntry { alpha2: "KR", alpha3: "KOR", name: "Korea, Republic of" },
    CountryEntry { alpha2: "KW", alpha3: "KWT", name: "Kuwait" },
    CountryEntry { alpha2: "KY", alpha3: "CYM", name: "Cayman Islands" },
    CountryEntry { alpha2: "KZ", alpha3: "KAZ", name: "Kazakhstan" },
    CountryEntry { alpha2: "LA", alpha3: "LAO", name: "Lao People's Democratic Republic" },
    CountryEntry { alpha2: "LB", alpha3: "LBN", name: "Lebanon" },
    CountryEntry { alpha2: "LC", alpha3: "LCA", name: "Saint Lucia" },
    CountryEntry { alpha2: "LI", alpha3: "LIE", name: "Liechtenstein" },
    CountryEntry { alpha2: "LK", alpha3: "LKA", name: "Sri Lanka" },
    CountryEntry { alpha2: "LR", alpha3: "LBR", name: "Liberia" },
    CountryEntry { alpha2: "LS", alpha3: "LSO", name: "Lesotho" },
    CountryEntry { alpha2: "LT", alpha3: "LTU", name: "Lithuania" },
    CountryEntry { alpha2: "LU", alpha3: "LUX", name: "Luxembourg" },
    CountryEntry { alpha2: "LV", alpha3: "LVA", name: "Latvia" },
    CountryEntry { alpha2: "LY", alpha3: "LBY", name: "Libya" },
    CountryEntry { alpha2: "MA", alpha3: "MAR", name: "Morocco" },
    CountryEntry { alpha2: "MC", alpha3: "MCO", name: "Monaco" },
    CountryEntry { alpha2: "MD", alpha3: "MDA", name: "Moldova, Republic of" },
    CountryEntry { alpha2: "ME", alpha3: "MNE", name: "Montenegro" },
    CountryEntry { alpha2: "MF", alpha3: "MAF", name: "Saint Martin (French part)" },
    CountryEntry { alpha2: "MG", alpha3: "MDG", name: "Madagascar" },
    CountryEntry { alpha2: "MH", alpha3: "MHL", name: "Marshall Islands" },
    CountryEntry { alpha2: "MK", alpha3: "MKD", name: "North Macedonia" },
    CountryEntry { alpha2: "ML", alpha3: "MLI", name: "Mali" },
    CountryEntry { alpha2: "MM", alpha3: "MMR", name: "Myanmar" },
    CountryEntry { alpha2: "MN", alpha3: "MNG", name: "Mongolia" },
    CountryEntry { alpha2: "MO", alpha3: "MAC", name: "Macao" },
    CountryEntry { alpha2: "MP", alpha3: "MNP", name: "Northern Mariana Islands" },
    CountryEntry { alpha2: "MQ", alpha3: "MTQ", name: "Martinique" },
    CountryEntry { alpha2: "MR", alpha3: "MRT", name: "Mauritania" },
    CountryEntry { alpha2: "MS", alpha3: "MSR", name: "Montserrat" },
    CountryEntry { alpha2: "MT", alpha3: "MLT", name: "Malta" },
    CountryEntry { alpha2: "MU", alpha3: "MUS", name: "Mauritius" },
    CountryEntry { alpha2: "MV", alpha3: "MDV", name: "Maldives" },
    CountryEntry { alpha2: "MW", alpha3: "MWI", name: "Malawi" },
    CountryEntry { alpha2: "MX", alpha3: "MEX", name: "Mexico" },
    CountryEntry { alpha2: "MY", alpha3: "MYS", name: "Malaysia" },
    CountryEntry { alpha2: "MZ", alpha3: "MOZ", name: "Mozambique" },
    CountryEntry { alpha2: "NA", alpha3: "NAM", name: "Namibia" },
    CountryEntry { alpha2: "NC", alpha3: "NCL", name: "New Caledonia" },
    CountryEntry { alpha2: "NE", alpha3: "NER", name: "Niger" },
    CountryEntry { alpha2: "NF", alpha3: "NFK", name: "Norfolk Island" },
    CountryEntry { alpha2: "NG", alpha3: "NGA", name: "Nigeria" },
    CountryEntry { alpha2: "NI", alpha3: "NIC", name: "Nicaragua" },
    CountryEntry { alpha2: "NL", alpha3: "NLD", name: "Netherlands" },
    CountryEntry { alpha2: "NO", alpha3: "NOR", name: "Norway" },
    CountryEntry { alpha2: "NP", alpha3: "NPL", name: "Nepal" },
    CountryEntry { alpha2: "NR", alpha3: "NRU", name: "Nauru" },
    CountryEntry { alpha2: "NU", alpha3: "NIU", name: "Niue" },
    CountryEntry { alpha2: "NZ", alpha3: "NZL", name: "New Zealand" },
    CountryEntry { alpha2: "OM", alpha3: "OMN", name: "Oman" },
    CountryEntry { alpha2: "PA", alpha3: "PAN", name: "Panama" },
    CountryEntry { alpha2: "PE", alpha3: "PER", name: "Peru" },
    CountryEntry { alpha2: "PF", alpha3: "PYF", name: "French Polynesia" },
    CountryEntry { alpha2: "PG", alpha3: "PNG", name: "Papua New Guinea" },
    CountryEntry { alpha2: "PH", alpha3: "PHL", name: "Philippines" },
    CountryEntry { alpha2: "PK", alpha3: "PAK", name: "Pakistan" },
    CountryEntry { alpha2: "PL", alpha3: "POL", name: "Poland" },
    CountryEntry { alpha2: "PM", alpha3: "SPM", name: "Saint Pierre and Miquelon" },
    CountryEntry { alpha2: "PN", alpha3: "PCN", name: "Pitcairn" },
    CountryEntry { alpha2: "PR", alpha3: "PRI", name: "Puerto Rico" },
    CountryEntry { alpha2: "PS", alpha3: "PSE", name: "Palestine, State of" },
    CountryEntry { alpha2: "PT", alpha3: "PRT", name: "Portugal" },
    CountryEntry { alpha2: "PW", alpha3: "PLW", name: "Palau" },
    CountryEntry { alpha2: "PY", alpha3: "PRY", name: "Paraguay" },
    CountryEntry { alpha2: "QA", alpha3: "QAT", name: "Qatar" },
    CountryEntry { alpha2: "RE", alpha3: "REU", name: "Réunion" },
    CountryEntry { alpha2: "RO", alpha3: "ROU", name: "Romania" },
    CountryEntry { alpha2: "RS", alpha3: "SRB", name: "Serbia" },
    CountryEntry { alpha2: "RU", alpha3: "RUS", name: "Russian Federation" },
    CountryEntry { alpha2: "RW", alpha3: "RWA", name: "Rwanda" },
    CountryEntry { alpha2: "SA", alpha3: "SAU", name: "Saudi Arabia" },
    CountryEntry { alpha2: "SB", alpha3: "SLB", name: "Solomon Islands" },
    CountryEntry { alpha2: "SC", alpha3: "SYC", name: "Seychelles" },
    CountryEntry { alpha2: "SD", alpha3: "SDN", name: "Sudan" },
    CountryEntry { alpha2: "SE", alpha3: "SWE", name: "Sweden" },
    CountryEntry { alpha2: "SG", alpha3: "SGP", name: "Singapore" },
    CountryEntry { alpha2: "SH", alpha3: "SHN", name: "Saint Helena, Ascension and Tristan da Cunha" },
    CountryEntry { alpha2: "SI", alpha3: "SVN", name: "Slovenia" },
    CountryEntry { alpha2: "SJ", alpha3: "SJM", name: "Svalbard and Jan Mayen" },
    CountryEntry { alpha2: "SK", alpha3: "SVK", name: "Slovakia" },
    CountryEntry { alpha2: "SL", alpha3: "SLE", name: "Sierra Leone" },
    CountryEntry { alpha2: "SM", alpha3: "SMR", name: "San Marino" },
    CountryEntry { alpha2: "SN", alpha3: "SEN", name: "Senegal" },
    CountryEntry { alpha2: "SO", alpha3: "SOM", name: "Somalia" },
    CountryEntry { alpha2: "SR", alpha3: "SUR", name: "Suriname" },
    CountryEntry { alpha2: "SS", alpha3: "SSD", name: "South Sudan" },
    CountryEntry { alpha2: "ST", alpha3: "STP", name: "Sao Tome and Principe" },
    CountryEntry { alpha2: "SV", alpha3: "SLV", name: "El Salvador" },
    CountryEntry { alpha2: "SX", alpha3: "SXM", name: "Sint Maarten (Dutch part)" },
    CountryEntry { alpha2: "SY", alpha3: "SYR", name: "Syrian Arab Republic" },
    CountryEntry { alpha2: "SZ", alpha3: "SWZ", name: "Eswatini" },
    CountryEntry { alpha2: "TC", alpha3: "TCA", name: "Turks and Caicos Islands" },
    CountryEntry { alpha2: "TD", alpha3: "TCD", name: "Chad" },
    CountryEntry { alpha2: "TF", alpha3: "ATF", name: "French Southern Territories" },
    CountryEntry { alpha2: "TG", alpha3: "TGO", name: "Togo" },
    CountryEntry { alpha2: "TH", alpha3: "THA", name: "Thailand" },
    CountryEntry { alpha2: "TJ", alpha3: "TJK", name: "Tajikistan" },
    CountryEntry { alpha2: "TK", alpha3: "TKL", name: "Tokelau" },
    CountryEntry { alpha2: "TL", alpha3: "TLS", name: "Timor-Leste" },
    CountryEntry { alpha2: "TM", alpha3: "TKM", name: "Turkmenistan" },
    CountryEntry { alpha2: "TN", alpha3: "TUN", name: "Tunisia" },
    CountryEntry { alpha2: "TO", alpha3: "TON", name: "Tonga" },
    CountryEntry { alpha2: "TR", alpha3: "TUR", name: "Türkiye" },
    CountryEntry { alpha2: "TT", alpha3: "TTO", name: "Trinidad and Tobago" },
    CountryEntry { alpha2: "TV", alpha3: "TUV", name: "Tuvalu" },
    CountryEntry { alpha2: "TW", alpha3: "TWN", name: "Taiwan, Province of China" },
    CountryEntry { alpha2: "TZ", alpha3: "TZA", name: "Tanzania, United Republic of" },
    CountryEntry { alpha2: "UA", alpha3: "UKR", name: "Ukraine" },
    CountryEntry { alpha2: "UG", alpha3: "UGA", name: "Uganda" },
    CountryEntry { alpha2: "UM", alpha3: "UMI", name: "United States Minor Outlying Islands" },
    CountryEntry { alpha2: "US", alpha3: "USA", name: "United States" },
    CountryEntry { alpha2: "UY", alpha3: "URY", name: "Uruguay" },
    CountryEntry { alpha2: "UZ", alpha3: "UZB", name: "Uzbekistan" },
    CountryEntry { alpha2: "VA", alpha3: "VAT", name: "Holy See (Vatican City State)" },
    CountryEntry { alpha2: "VC", alpha3: "VCT", name: "Saint Vincent and the Grenadines" },
    CountryEntry { alpha2: "VE", alpha3: "VEN", name: "Venezuela, Bolivarian Republic of" },
    CountryEntry { alpha2: "VG", alpha3: "VGB", name: "Virgin Islands, British" },
    CountryEntry { alpha2: "VI", alpha3: "VIR", name: "Virgin Islands, U.S." },
    CountryEntry { alpha2: "VN", alpha3: "VNM", name: "Viet Nam" },
    CountryEntry { alpha2: "VU", alpha3: "VUT", name: "Vanuatu" },
    CountryEntry { alpha2: "WF", alpha3: "WLF", name: "Wallis and Futuna" },
    CountryEntry { alpha2: "WS", alpha3: "WSM", name: "Samoa" },
    CountryEntry { alpha2: "YE", alpha3: "YEM", name: "Yemen" },
    CountryEntry { alpha2: "YT", alpha3: "MYT", name: "Mayotte" },
    CountryEntry { alpha2: "ZA", alpha3: "ZAF", name: "South Africa" },
    CountryEntry { alpha2: "ZM", alpha3: "ZMB", name: "Zambia" },
    CountryEntry { alpha2: "ZW", alpha3: "ZWE", name: "Zimbabwe" },
];

/// Indexed view over [`COUNTRIES`].
///
/// Thread-safe via `OnceLock`.
#[derive(Debug)]
pub struct CountryDatabase {
    by_alpha2: HashMap<&'static str, &'static CountryEntry>,
    by_alpha3: HashMap<&'static str, &'static CountryEntry>,
}

impl CountryDatabase {
    /// Get the global database instance.
    pub fn global() -> &'static CountryDatabase {
        static INSTANCE: OnceLock<CountryDatabase> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::from_entries(COUNTRIES))
    }

    fn from_entries(entries: &'static [CountryEntry]) -> Self {
        let mut by_alpha2 = HashMap::with_capacity(entries.len());
        let mut by_alpha3 = HashMap::with_capacity(entries.len());

        for entry in entries {
            by_alpha2.insert(entry.alpha2, entry);
            by_alpha3.insert(entry.alpha3, entry);
        }

        CountryDatabase { by_alpha2, by_alpha3 }
    }

    /// Exact lookup by alpha-2 code. The code must already be uppercase.
    pub fn by_alpha2(&self, code: &str) -> Option<&'static CountryEntry> {
        self.by_alpha2.get(code).copied()
    }

    /// Exact lookup by alpha-3 code. The code must already be uppercase.
    pub fn by_alpha3(&self, code: &str) -> Option<&'static CountryEntry> {
        self.by_alpha3.get(code).copied()
    }

    /// Look up a normalized code, trying alpha-2 first and alpha-3 second.
    ///
    /// Returns `Ok(None)` when the code is well formed but unassigned, and
    /// an error when it contains anything other than ASCII letters.
    pub fn lookup(&self, code: &str) -> Result<Option<&'static CountryEntry>, LookupError> {
        if let Some(found) = code.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(LookupError::InvalidCharacter {
                code: code.to_string(),
                found,
            });
        }

        Ok(self.by_alpha2(code).or_else(|| self.by_alpha3(code)))
    }

    /// Iterate over every entry in table order.
    pub fn iter(&self) -> std::slice::Iter<'static, CountryEntry> {
        COUNTRIES.iter()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.by_alpha2.len()
    }

    /// Whether the table is empty (it never should be).
    pub fn is_empty(&self) -> bool {
        self.by_alpha2.is_empty()
    }
}
