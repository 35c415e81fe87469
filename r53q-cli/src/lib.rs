//! # r53q-cli
//!
//! Command-line front end over [`r53q_core`]:
//!
//! - `r53q list zones` prints every hosted zone as a table
//! - `r53q list records <zone-id|domain>` prints the record sets of one zone
//! - `r53q zone <zone-id|domain> [count]` prints a zone's id, name or record count
//! - `r53q -v` prints the version and where the config comes from

pub mod cli;
pub mod logging;
pub mod output;

pub use cli::run;
