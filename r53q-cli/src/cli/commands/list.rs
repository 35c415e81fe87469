//! `r53q list zones` and `r53q list records <zone-id|domain>`

use std::io::Write;

use anyhow::{Context, Result};
use r53q_core::ZoneService;

use crate::output::Table;

pub async fn zones(service: &ZoneService, out: &mut impl Write) -> Result<()> {
    let zones = service.list_zones().await.context("listing hosted zones")?;

    let mut table = Table::new(["ID", "Name", "Records"]);
    for zone in &zones {
        table.push_row([
            zone.bare_id().to_string(),
            zone.name.clone(),
            zone.record_count.to_string(),
        ]);
    }
    table.write_to(out)?;
    Ok(())
}

pub async fn records(service: &ZoneService, identifier: &str, out: &mut impl Write) -> Result<()> {
    let found = service
        .list_records(identifier)
        .await
        .with_context(|| format!("listing records for {identifier}"))?;

    let mut table = Table::new(["Name", "Type", "TTL", "Values"]);
    for record in &found.records {
        table.push_row([
            record.name.clone(),
            record.record_type.clone(),
            record.ttl.to_string(),
            record.display_values(),
        ]);
    }
    table.write_to(out)?;
    Ok(())
}
