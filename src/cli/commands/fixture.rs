use anyhow::Context;

use crate::store::sample_catalog;

/// Print the sample catalog in the seed-file format accepted by `--seed-file`.
pub fn handle() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&sample_catalog()).context("failed to encode sample catalog")?;
    println!("{}", json);
    Ok(())
}
