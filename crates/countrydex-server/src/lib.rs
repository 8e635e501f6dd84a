//! # Countrydex Server
//!
//! HTTP API over [`countrydex_core`]:
//!
//! - `GET /` service status and route list
//! - `GET /validate-country-code?code=..` validate an alpha-2/alpha-3 code
//! - `GET /list-country-codes?continent=..` list the catalog
//! - `GET /random-country-code` pick one country at random
//!
//! Cross-origin requests are allowed from any origin.

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

pub use config::{Cli, Command, ConfigError, LogFormat, LogSettings, ServerConfig};
pub use error::ApiError;
pub use routes::{AppState, create_router};
