//! Registry lookup errors

use crate::PlatformSelector;
use thiserror::Error;

/// Errors returned by name-based registry lookups
///
/// The typed accessors (`embedded_sub_store()` and friends) never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// No asset with this name exists on any target
    #[error("Unknown asset: {0}")]
    UnknownAsset(String),

    /// The asset exists, but only for another target
    #[error("Asset '{name}' is only embedded in {required} builds (this build targets {current})")]
    NotInThisBuild {
        name: String,
        required: PlatformSelector,
        current: PlatformSelector,
    },
}

/// Result type alias for registry lookups
pub type Result<T> = std::result::Result<T, AssetError>;
