//! Build-time embedded runtime assets
//!
//! This crate compiles the payloads the host application ships with directly
//! into the binary:
//!
//! - the Node.js runtime (Windows/x86-64 builds only),
//! - the Sub-Store JavaScript bundle,
//! - the YAML override template.
//!
//! All payloads are staged by the packaging pipeline as zstd-compressed files
//! and are exposed byte-for-byte as they were on disk. Decompressing them,
//! writing them out and running them is the caller's job.
//!
//! The directory payloads are read from defaults to this crate's `assets/`
//! and can be redirected at build time with `SUBPACK_ASSETS_DIR`. A missing
//! payload is a build error, never a runtime one.
//!
//! # Usage
//!
//! ```rust,ignore
//! use subpack_assets::{embedded_sub_store, get_asset};
//!
//! let bundle: &'static [u8] = embedded_sub_store();
//!
//! #[cfg(all(target_os = "windows", target_arch = "x86_64"))]
//! let node = subpack_assets::embedded_node();
//!
//! // Name-based lookup for tooling
//! let yaml = get_asset("override-yaml")?;
//! println!("{} ({} bytes, {})", yaml.file_name(), yaml.len(), yaml.sha256_hex());
//! ```
//!
//! # Platform-gated assets
//!
//! `embedded_node()` only exists when compiling for Windows on x86-64.
//! Anywhere else, referring to it is a compile error:
//!
#![cfg_attr(
    not(all(target_os = "windows", target_arch = "x86_64")),
    doc = "```compile_fail,E0425"
)]
#![cfg_attr(all(target_os = "windows", target_arch = "x86_64"), doc = "```")]
//! let node: &'static [u8] = subpack_assets::embedded_node();
//! assert!(!node.is_empty());
//! assert!(std::ptr::eq(node, subpack_assets::NODE_ASSET.bytes()));
//! ```

mod asset;
mod bundled;
mod error;
mod manifest;
mod registry;

#[cfg(all(target_os = "windows", target_arch = "x86_64"))]
mod node;

pub use asset::EmbeddedAsset;
pub use bundled::{embedded_override_yaml, embedded_sub_store, OVERRIDE_YAML_ASSET, SUB_STORE_ASSET};
pub use error::{AssetError, Result};
pub use manifest::{
    AssetSpec, Compression, PlatformSelector, MANIFEST, NODE, NODE_SPEC, OVERRIDE_YAML,
    OVERRIDE_YAML_SPEC, SUB_STORE, SUB_STORE_SPEC,
};
pub use registry::{all_assets, asset_count, asset_names, get_asset, is_embedded, manifest};

#[cfg(all(target_os = "windows", target_arch = "x86_64"))]
pub use node::{embedded_node, NODE_ASSET};
