//! Subcommand implementations

pub mod check;
pub mod info;
pub mod list;

use serde::Serialize;
use subpack_assets::{AssetSpec, EmbeddedAsset};

/// One asset as reported by `list --json` / `info --json`
#[derive(Debug, Serialize)]
pub struct AssetReport {
    pub name: &'static str,
    pub description: &'static str,
    pub file_name: &'static str,
    pub compression: &'static str,
    /// Required target ("windows/x86_64"), or `None` for every target
    pub platform: Option<String>,
    pub embedded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl AssetReport {
    /// Build a report for a manifest entry; `asset` is `None` when it is not
    /// compiled into this build.
    pub fn new(spec: &'static AssetSpec, asset: Option<&EmbeddedAsset>, with_digest: bool) -> Self {
        Self {
            name: spec.name,
            description: spec.description,
            file_name: spec.file_name,
            compression: spec.compression.as_str(),
            platform: spec.platform.map(|p| p.to_string()),
            embedded: asset.is_some(),
            size: asset.map(|a| a.len()),
            sha256: asset.filter(|_| with_digest).map(|a| a.sha256_hex()),
        }
    }

    /// Platform column text
    pub fn platform_label(&self) -> &str {
        self.platform.as_deref().unwrap_or("any")
    }
}
