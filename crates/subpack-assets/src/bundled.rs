//! Payloads embedded on every target

use crate::{EmbeddedAsset, OVERRIDE_YAML_SPEC, SUB_STORE_SPEC};

/// The zstd-compressed Sub-Store JavaScript bundle
pub static SUB_STORE_ASSET: EmbeddedAsset = EmbeddedAsset::new(
    &SUB_STORE_SPEC,
    include_bytes!(concat!(env!("SUBPACK_ASSETS_DIR"), "/sub-store.bundle.js.zst")),
);

/// The zstd-compressed YAML override template
pub static OVERRIDE_YAML_ASSET: EmbeddedAsset = EmbeddedAsset::new(
    &OVERRIDE_YAML_SPEC,
    include_bytes!(concat!(env!("SUBPACK_ASSETS_DIR"), "/ACL4SSR_Online_Full.yaml.zst")),
);

/// Embedded Sub-Store JavaScript bundle (zstd-compressed)
pub fn embedded_sub_store() -> &'static [u8] {
    SUB_STORE_ASSET.bytes()
}

/// Embedded YAML override template (zstd-compressed)
pub fn embedded_override_yaml() -> &'static [u8] {
    OVERRIDE_YAML_ASSET.bytes()
}
