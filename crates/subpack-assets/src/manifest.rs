//! Static asset manifest
//!
//! Declares every payload the registry knows about: its name, the staged file
//! it comes from, its compression format and the target it is restricted to.
//!
//! This file is also compiled into `build.rs` (via `#[path]`), so it must not
//! depend on anything outside `core`/`std`.

use std::fmt;

/// Name of the Windows/x86-64 Node.js runtime asset.
pub const NODE: &str = "node";

/// Name of the Sub-Store JavaScript bundle asset.
pub const SUB_STORE: &str = "sub-store";

/// Name of the YAML override template asset.
pub const OVERRIDE_YAML: &str = "override-yaml";

/// Compression format of a staged payload.
///
/// Purely descriptive: the registry never decodes payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Zstandard frame(s)
    Zstd,
}

impl Compression {
    /// Short lowercase name (e.g. "zstd").
    pub const fn as_str(self) -> &'static str {
        match self {
            Compression::Zstd => "zstd",
        }
    }

    /// File extension used by the packaging pipeline.
    pub const fn extension(self) -> &'static str {
        match self {
            Compression::Zstd => "zst",
        }
    }

    /// Frame magic number as it appears at the start of a payload.
    pub const fn magic(self) -> &'static [u8] {
        match self {
            // 0xFD2FB528, little-endian
            Compression::Zstd => &[0x28, 0xB5, 0x2F, 0xFD],
        }
    }

    /// Check whether `bytes` starts with this format's frame magic.
    pub fn has_magic(self, bytes: &[u8]) -> bool {
        bytes.starts_with(self.magic())
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target predicate for platform-qualified assets.
///
/// Values use the same vocabulary as `cfg(target_os)` / `cfg(target_arch)`,
/// which is also what `std::env::consts` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformSelector {
    /// `target_os` value (e.g. "windows")
    pub os: &'static str,
    /// `target_arch` value (e.g. "x86_64")
    pub arch: &'static str,
}

impl PlatformSelector {
    /// Windows on x86-64.
    pub const WINDOWS_X86_64: PlatformSelector = PlatformSelector {
        os: "windows",
        arch: "x86_64",
    };

    /// Check whether this selector matches the given target.
    pub fn matches(&self, os: &str, arch: &str) -> bool {
        self.os == os && self.arch == arch
    }
}

impl fmt::Display for PlatformSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Manifest entry for one embedded asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSpec {
    /// Registry name (e.g. "sub-store")
    pub name: &'static str,
    /// File name inside the asset directory
    pub file_name: &'static str,
    /// Payload compression
    pub compression: Compression,
    /// Target restriction; `None` means every target
    pub platform: Option<PlatformSelector>,
    /// One-line human description
    pub description: &'static str,
}

impl AssetSpec {
    /// Whether this asset is compiled in for the given target.
    pub fn is_selected_for(&self, os: &str, arch: &str) -> bool {
        self.platform.map_or(true, |p| p.matches(os, arch))
    }
}

pub const NODE_SPEC: AssetSpec = AssetSpec {
    name: NODE,
    file_name: "node_windows_amd64.zst",
    compression: Compression::Zstd,
    platform: Some(PlatformSelector::WINDOWS_X86_64),
    description: "Node.js runtime binary",
};

pub const SUB_STORE_SPEC: AssetSpec = AssetSpec {
    name: SUB_STORE,
    file_name: "sub-store.bundle.js.zst",
    compression: Compression::Zstd,
    platform: None,
    description: "Sub-Store JavaScript bundle",
};

pub const OVERRIDE_YAML_SPEC: AssetSpec = AssetSpec {
    name: OVERRIDE_YAML,
    file_name: "ACL4SSR_Online_Full.yaml.zst",
    compression: Compression::Zstd,
    platform: None,
    description: "YAML override configuration template",
};

/// Every known asset, in registry order.
pub const MANIFEST: &[AssetSpec] = &[NODE_SPEC, SUB_STORE_SPEC, OVERRIDE_YAML_SPEC];
