//! `r53q zone <zone-id|domain> [count]`

use std::io::Write;

use anyhow::{Context, Result};
use r53q_core::ZoneService;

/// Print the zone's bare id (domain input), its name without the trailing dot
/// (id input), or its record count.
pub async fn execute(
    service: &ZoneService,
    identifier: &str,
    count_only: bool,
    out: &mut impl Write,
) -> Result<()> {
    let info = service
        .zone_info(identifier, count_only)
        .await
        .with_context(|| format!("looking up zone {identifier}"))?;
    writeln!(out, "{info}")?;
    Ok(())
}
