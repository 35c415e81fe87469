//! r53q Core Library
//!
//! Everything between the command line and the Route 53 client:
//! - Config resolution (file, environment or a created placeholder)
//! - Zone identifier resolution (domain name or zone id)
//! - Zone and record queries ([`ZoneService`])

pub mod config;
pub mod error;
pub mod services;
pub mod zone_ref;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{
    ConfigLocations, ConfigResolver, ConfigSource, Configuration, EnvironmentStrategy,
    ResolvedConfig,
};
pub use error::{CoreError, CoreResult};
pub use services::{ZoneInfo, ZoneRecords, ZoneService};
pub use zone_ref::{resolve_zone, ZoneRef};
