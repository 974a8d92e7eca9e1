//! Embedded asset handle

use crate::{AssetSpec, Compression, PlatformSelector};
use sha2::{Digest, Sha256};
use std::fmt;

/// A payload compiled into the binary, together with its manifest entry
///
/// The bytes are exactly the staged file's bytes (still compressed).
pub struct EmbeddedAsset {
    spec: &'static AssetSpec,
    bytes: &'static [u8],
}

impl EmbeddedAsset {
    pub(crate) const fn new(spec: &'static AssetSpec, bytes: &'static [u8]) -> Self {
        Self { spec, bytes }
    }

    /// Manifest entry this asset was built from
    pub fn spec(&self) -> &'static AssetSpec {
        self.spec
    }

    /// Registry name (e.g. "sub-store")
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// File name the payload was read from at build time
    pub fn file_name(&self) -> &'static str {
        self.spec.file_name
    }

    pub fn compression(&self) -> Compression {
        self.spec.compression
    }

    /// Target restriction, if any
    pub fn platform(&self) -> Option<PlatformSelector> {
        self.spec.platform
    }

    /// Raw embedded bytes
    pub fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex SHA-256 of the embedded bytes
    ///
    /// Computed on every call; the payloads can be tens of megabytes, so
    /// callers that need it repeatedly should keep the result.
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(self.bytes))
    }
}

impl fmt::Debug for EmbeddedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedAsset")
            .field("name", &self.spec.name)
            .field("file_name", &self.spec.file_name)
            .field("compression", &self.spec.compression)
            .field("platform", &self.spec.platform)
            .field("len", &self.bytes.len())
            .finish()
    }
}
