//! `subpack check` — Sanity-check the embedded payloads.
//!
//! Every embedded asset must be non-empty and start with its compression
//! format's frame magic. Manifest entries excluded for this target are
//! reported as skipped.

use crate::output::{format_size, StyledOutput};
use subpack_assets::{all_assets, get_asset, manifest, Compression};
use termcolor::ColorChoice;
use thiserror::Error;

/// Why a payload failed its check
#[derive(Debug, PartialEq, Eq, Error)]
pub enum CheckFailure {
    #[error("payload is empty")]
    Empty,

    #[error("missing {compression} frame magic (expected {expected}, found {found})")]
    BadMagic {
        compression: Compression,
        expected: String,
        found: String,
    },
}

/// Check one payload against its declared compression
pub fn check_payload(compression: Compression, bytes: &[u8]) -> Result<(), CheckFailure> {
    if bytes.is_empty() {
        return Err(CheckFailure::Empty);
    }
    if !compression.has_magic(bytes) {
        let magic = compression.magic();
        let found = &bytes[..bytes.len().min(magic.len())];
        return Err(CheckFailure::BadMagic {
            compression,
            expected: hex_bytes(magic),
            found: hex_bytes(found),
        });
    }
    Ok(())
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn execute(color: ColorChoice) -> anyhow::Result<()> {
    let mut out = StyledOutput::new(color);
    let mut failed = 0;

    for asset in all_assets() {
        match check_payload(asset.compression(), asset.bytes()) {
            Ok(()) => {
                out.pass_badge();
                out.plain(&format!(" {:<15} ", asset.name()));
                out.dim(&format!(
                    "{} frame, {}",
                    asset.compression(),
                    format_size(asset.len())
                ));
            }
            Err(e) => {
                log::warn!("asset '{}' failed check: {}", asset.name(), e);
                failed += 1;
                out.fail_badge();
                out.plain(&format!(" {:<15} ", asset.name()));
                out.error(&e.to_string());
            }
        }
        out.newline();
    }

    let mut skipped = 0;
    for spec in manifest() {
        if let Err(e) = get_asset(spec.name) {
            skipped += 1;
            out.skip_badge();
            out.plain(&format!(" {:<15} ", spec.name));
            out.dim(&e.to_string());
            out.newline();
        }
    }

    let passed = all_assets().len() - failed;
    out.newline();
    if failed == 0 {
        out.success(&format!("{} passed", passed));
    } else {
        out.error(&format!("{} failed", failed));
        out.plain(&format!(", {} passed", passed));
    }
    out.plain(&format!(", {} skipped", skipped));
    out.newline();
    out.flush();

    if failed > 0 {
        anyhow::bail!("{} embedded asset(s) failed checks", failed);
    }
    Ok(())
}
