//! Command implementations.
//!
//! Each handler writes its whole result to the given writer and returns an
//! error before writing anything when a lookup fails.

pub mod list;
pub mod version;
pub mod zone;

#[cfg(test)]
mod stub;
