//! `subpack info` — Show one embedded asset in detail.

use super::AssetReport;
use crate::output::format_size;
use subpack_assets::get_asset;

pub fn execute(name: &str, json: bool) -> anyhow::Result<()> {
    let asset = get_asset(name)?;
    let report = AssetReport::new(asset.spec(), Some(asset), true);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Name:         {}", report.name);
    println!("Description:  {}", report.description);
    println!("File:         {}", report.file_name);
    println!("Compression:  {}", report.compression);
    println!("Platform:     {}", report.platform_label());
    println!("Size:         {} ({} bytes)", format_size(asset.len()), asset.len());
    if let Some(ref digest) = report.sha256 {
        println!("SHA-256:      {}", digest);
    }

    Ok(())
}
