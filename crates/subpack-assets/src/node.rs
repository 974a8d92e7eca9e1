//! Node.js runtime payload
//!
//! Only compiled for Windows on x86-64. On every other target this module,
//! `NODE_ASSET` and `embedded_node()` do not exist.

use crate::{EmbeddedAsset, NODE_SPEC};

/// The zstd-compressed Node.js runtime for Windows/x86-64
pub static NODE_ASSET: EmbeddedAsset = EmbeddedAsset::new(
    &NODE_SPEC,
    include_bytes!(concat!(env!("SUBPACK_ASSETS_DIR"), "/node_windows_amd64.zst")),
);

/// Embedded Node.js runtime binary (zstd-compressed)
pub fn embedded_node() -> &'static [u8] {
    NODE_ASSET.bytes()
}
