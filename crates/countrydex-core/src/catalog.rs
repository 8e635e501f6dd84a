//! The country catalog: every ISO country that has a calling code.

use tracing::{debug, info};

use crate::calling_code::CallingCodeResolver;
use crate::iso3166::CountryDatabase;
use crate::record::{CountryRecord, PhoneCode};

/// Ordered, immutable list of country records.
///
/// Countries whose calling code fails to resolve, or resolves to zero, are
/// left out. Order follows the ISO table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CountryRecord>,
}

impl Catalog {
    /// Build the catalog from the ISO table and a calling code resolver.
    pub fn build(database: &CountryDatabase, resolver: &dyn CallingCodeResolver) -> Self {
        let mut records = Vec::with_capacity(database.len());
        let mut skipped = 0usize;

        for entry in database.iter() {
            match resolver.calling_code(entry.alpha2) {
                Ok(code) if code > 0 => {
                    records.push(CountryRecord::new(entry, PhoneCode::Known(code)));
                }
                Ok(_) => {
                    debug!(alpha2 = entry.alpha2, "no calling code, omitting from catalog");
                    skipped += 1;
                }
                Err(e) => {
                    debug!(alpha2 = entry.alpha2, error = %e, "calling code lookup failed, omitting from catalog");
                    skipped += 1;
                }
            }
        }

        info!(countries = records.len(), skipped, "country catalog built");
        Catalog { records }
    }

    /// All records, in catalog order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
