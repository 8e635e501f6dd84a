//! Read-only query surface over the catalog and validator.

use std::sync::{Arc, OnceLock};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::calling_code::{CallingCodeResolver, StaticCallingCodes};
use crate::catalog::Catalog;
use crate::error::{QueryError, QueryResult};
use crate::iso3166::CountryDatabase;
use crate::record::CountryRecord;
use crate::validator::{ValidationResult, Validator};

/// Query service used by the HTTP layer.
///
/// The catalog is built on first use and cached for the lifetime of the
/// service; concurrent first readers block on a single build.
pub struct QueryService {
    database: &'static CountryDatabase,
    resolver: Arc<dyn CallingCodeResolver>,
    catalog: OnceLock<Catalog>,
}

impl Default for QueryService {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryService {
    /// Service backed by the compiled-in calling code table.
    pub fn new() -> Self {
        Self::with_resolver(StaticCallingCodes)
    }

    /// Service backed by a custom calling code resolver.
    pub fn with_resolver(resolver: impl CallingCodeResolver + 'static) -> Self {
        Self {
            database: CountryDatabase::global(),
            resolver: Arc::new(resolver),
            catalog: OnceLock::new(),
        }
    }

    /// Process-wide service instance.
    pub fn global() -> &'static QueryService {
        static INSTANCE: OnceLock<QueryService> = OnceLock::new();
        INSTANCE.get_or_init(QueryService::new)
    }

    /// The cached catalog, building it on first access.
    pub fn catalog(&self) -> &Catalog {
        self.catalog
            .get_or_init(|| Catalog::build(self.database, self.resolver.as_ref()))
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog().len()
    }

    /// List catalog records, optionally restricted to one continent tag.
    ///
    /// The tag is compared ignoring ASCII case; an empty tag means no filter
    /// and an unrecognised tag yields an empty list.
    pub fn list(&self, continent: Option<&str>) -> Vec<CountryRecord> {
        let records = self.catalog().records();

        match continent.filter(|tag| !tag.is_empty()) {
            Some(tag) => records
                .iter()
                .filter(|r| r.continent.as_tag().eq_ignore_ascii_case(tag))
                .cloned()
                .collect(),
            None => records.to_vec(),
        }
    }

    /// Pick one record uniformly at random.
    pub fn random_entry(&self) -> QueryResult<CountryRecord> {
        self.random_entry_with(&mut rand::rng())
    }

    /// Pick one record uniformly at random using the given generator.
    pub fn random_entry_with<R: Rng + ?Sized>(&self, rng: &mut R) -> QueryResult<CountryRecord> {
        self.catalog()
            .records()
            .choose(rng)
            .cloned()
            .ok_or(QueryError::EmptyCatalog)
    }

    /// Validate a raw code. Independent of the catalog contents.
    pub fn validate(&self, code: &str) -> ValidationResult {
        Validator::new(self.database, self.resolver.as_ref()).validate(code)
    }
}
