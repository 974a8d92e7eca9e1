//! `subpack list` — List every known asset and whether it is embedded.

use super::AssetReport;
use crate::output::{format_size, StyledOutput};
use subpack_assets::{get_asset, manifest, PlatformSelector};
use termcolor::ColorChoice;

pub fn execute(json: bool, color: ColorChoice) -> anyhow::Result<()> {
    let reports: Vec<AssetReport> = manifest()
        .iter()
        .map(|spec| AssetReport::new(spec, get_asset(spec.name).ok(), false))
        .collect();

    log::debug!(
        "{} of {} manifest entries embedded for {}",
        reports.iter().filter(|r| r.embedded).count(),
        reports.len(),
        PlatformSelector::current()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let mut out = StyledOutput::new(color);
    out.bold(&format!(
        "{:<15} {:<30} {:<6} {:<16} {}",
        "NAME", "FILE", "FORMAT", "PLATFORM", "SIZE"
    ));
    out.newline();

    for report in &reports {
        out.plain(&format!(
            "{:<15} {:<30} {:<6} {:<16} ",
            report.name,
            report.file_name,
            report.compression,
            report.platform_label()
        ));
        match report.size {
            Some(size) => out.plain(&format_size(size)),
            None => out.dim("not embedded"),
        }
        out.newline();
    }
    out.flush();

    Ok(())
}
