//! `r53q -v` / `r53q --version`

use std::io::Write;

use anyhow::Result;
use r53q_core::{ConfigResolver, ConfigSource, CoreResult, ResolvedConfig};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const GIT_COMMIT: &str = match option_env!("R53Q_GIT_COMMIT") {
    Some(commit) => commit,
    None => "none",
};

const BUILD_DATE: &str = match option_env!("R53Q_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

/// Print the build line and where the config comes from.
///
/// Resolving the config here may write the placeholder file, exactly as any
/// other command would.
pub fn execute(resolver: &ConfigResolver, out: &mut impl Write) -> Result<()> {
    writeln!(out, "r53q {VERSION} (commit {GIT_COMMIT}, built {BUILD_DATE})")?;
    writeln!(out, "Config: {}", describe(&resolver.resolve()))?;
    Ok(())
}

fn describe(resolved: &CoreResult<ResolvedConfig>) -> String {
    match resolved {
        Ok(config) => match config.source {
            ConfigSource::File | ConfigSource::Environment => config.origin(),
            ConfigSource::CreatedEmpty => {
                format!("created at {} (please fill in credentials)", config.origin())
            }
            ConfigSource::Occupied => {
                format!("none found ({} exists but is not searched)", config.origin())
            }
        },
        Err(e) => format!("unreadable ({e})"),
    }
}
