//! # Countrydex Core
//!
//! Country metadata lookup for Countrydex: ISO 3166-1 names and codes,
//! international calling codes, and a coarse continent classification.
//!
//! ## Components
//!
//! - [`iso3166`]: compiled-in ISO country table
//! - [`calling_code`]: region to calling code resolution
//! - [`continent`]: curated (incomplete) continent table
//! - [`catalog`]: the list of countries that have a calling code
//! - [`validator`]: normalization and validation of user-supplied codes
//! - [`query`]: the read-only service consumed by the HTTP layer
//!
//! ## Example
//!
//! ```
//! use countrydex_core::QueryService;
//!
//! let service = QueryService::global();
//!
//! let result = service.validate("+us");
//! assert!(result.is_valid());
//!
//! let europe = service.list(Some("eu"));
//! assert!(europe.iter().all(|c| c.continent.as_tag() == "EU"));
//! ```

pub mod calling_code;
pub mod catalog;
pub mod continent;
pub mod error;
pub mod iso3166;
pub mod query;
pub mod record;
pub mod validator;

pub use calling_code::{CallingCodeResolver, StaticCallingCodes};
pub use catalog::Catalog;
pub use continent::{Continent, classify};
pub use error::{LookupError, QueryError, QueryResult, ResolveError};
pub use iso3166::{CountryDatabase, CountryEntry};
pub use query::QueryService;
pub use record::{CountryRecord, PhoneCode};
pub use validator::{ValidCountry, ValidationResult, Validator};
