//! Name-based access to the assets compiled into this binary

use crate::{AssetError, AssetSpec, EmbeddedAsset, PlatformSelector, Result, MANIFEST};
use crate::{OVERRIDE_YAML_ASSET, SUB_STORE_ASSET};

#[cfg(all(target_os = "windows", target_arch = "x86_64"))]
use crate::NODE_ASSET;

/// Embedded assets, in manifest order
#[cfg(all(target_os = "windows", target_arch = "x86_64"))]
static ASSETS: &[&EmbeddedAsset] = &[&NODE_ASSET, &SUB_STORE_ASSET, &OVERRIDE_YAML_ASSET];

/// Embedded assets, in manifest order
#[cfg(not(all(target_os = "windows", target_arch = "x86_64")))]
static ASSETS: &[&EmbeddedAsset] = &[&SUB_STORE_ASSET, &OVERRIDE_YAML_ASSET];

impl PlatformSelector {
    /// The target this binary was compiled for
    pub fn current() -> Self {
        PlatformSelector {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }

    /// Check whether this selector matches the target this binary was compiled for
    pub fn matches_current(&self) -> bool {
        let current = Self::current();
        self.matches(current.os, current.arch)
    }
}

/// Every asset compiled into this binary, in manifest order
pub fn all_assets() -> &'static [&'static EmbeddedAsset] {
    ASSETS
}

/// Every known asset, including ones excluded from this build
pub fn manifest() -> &'static [AssetSpec] {
    MANIFEST
}

/// Look up an embedded asset by name
///
/// Distinguishes names that exist only for other targets from names that
/// don't exist at all.
pub fn get_asset(name: &str) -> Result<&'static EmbeddedAsset> {
    if let Some(asset) = ASSETS.iter().copied().find(|a| a.name() == name) {
        return Ok(asset);
    }

    let spec = MANIFEST
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| AssetError::UnknownAsset(name.to_string()))?;

    match spec.platform {
        Some(required) => Err(AssetError::NotInThisBuild {
            name: name.to_string(),
            required,
            current: PlatformSelector::current(),
        }),
        None => Err(AssetError::UnknownAsset(name.to_string())),
    }
}

/// Check whether an asset is compiled into this binary
pub fn is_embedded(name: &str) -> bool {
    ASSETS.iter().any(|a| a.name() == name)
}

/// Names of the embedded assets
pub fn asset_names() -> impl Iterator<Item = &'static str> {
    ASSETS.iter().map(|a| a.name())
}

/// Number of embedded assets
pub fn asset_count() -> usize {
    ASSETS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NODE, OVERRIDE_YAML, SUB_STORE};

    #[test]
    fn test_registry_matches_manifest_for_current_target() {
        let current = PlatformSelector::current();
        let expected: Vec<_> = MANIFEST
            .iter()
            .filter(|s| s.is_selected_for(current.os, current.arch))
            .map(|s| s.name)
            .collect();
        let actual: Vec<_> = asset_names().collect();
        assert_eq!(actual, expected);
        assert_eq!(asset_count(), expected.len());
    }

    #[test]
    fn test_every_asset_points_at_its_spec() {
        for asset in all_assets() {
            let spec = MANIFEST.iter().find(|s| s.name == asset.name()).unwrap();
            assert_eq!(asset.spec(), spec);
        }
    }

    #[test]
    fn test_lookup_agrees_with_platform_rules() {
        let current = PlatformSelector::current();
        for spec in MANIFEST {
            let selected = spec.is_selected_for(current.os, current.arch);
            assert_eq!(get_asset(spec.name).is_ok(), selected, "asset '{}'", spec.name);
            assert_eq!(is_embedded(spec.name), selected);
        }
    }

    #[test]
    fn test_all_assets_are_the_public_statics() {
        let assets = all_assets();
        let n = assets.len();
        assert!(std::ptr::eq(assets[n - 2], &SUB_STORE_ASSET));
        assert!(std::ptr::eq(assets[n - 1], &OVERRIDE_YAML_ASSET));

        #[cfg(all(target_os = "windows", target_arch = "x86_64"))]
        assert!(std::ptr::eq(assets[0], &NODE_ASSET));
    }

    #[test]
    fn test_get_unrestricted_assets() {
        let sub_store = get_asset(SUB_STORE).expect("sub-store should be embedded");
        assert_eq!(sub_store.name(), SUB_STORE);
        assert!(!sub_store.is_empty());

        let yaml = get_asset(OVERRIDE_YAML).expect("override yaml should be embedded");
        assert_eq!(yaml.name(), OVERRIDE_YAML);
        assert!(!yaml.is_empty());
    }

    #[test]
    fn test_unknown_asset() {
        assert_eq!(
            get_asset("python").unwrap_err(),
            AssetError::UnknownAsset("python".to_string())
        );
        assert!(!is_embedded("python"));
    }

    #[cfg(all(target_os = "windows", target_arch = "x86_64"))]
    #[test]
    fn test_node_embedded_on_windows_x86_64() {
        let node = get_asset(NODE).expect("node should be embedded");
        assert_eq!(node.platform(), Some(PlatformSelector::WINDOWS_X86_64));
        assert!(is_embedded(NODE));
    }

    #[cfg(not(all(target_os = "windows", target_arch = "x86_64")))]
    #[test]
    fn test_node_excluded_elsewhere() {
        match get_asset(NODE) {
            Err(AssetError::NotInThisBuild { name, required, current }) => {
                assert_eq!(name, NODE);
                assert_eq!(required, PlatformSelector::WINDOWS_X86_64);
                assert_eq!(current, PlatformSelector::current());
            }
            other => panic!("expected NotInThisBuild, got {:?}", other),
        }
        assert!(!is_embedded(NODE));
    }

    #[test]
    fn test_current_platform_matches_cfg() {
        let windows_x64 = cfg!(all(target_os = "windows", target_arch = "x86_64"));
        assert_eq!(PlatformSelector::WINDOWS_X86_64.matches_current(), windows_x64);
    }

    #[test]
    fn test_manifest_lists_excluded_assets_too() {
        let names: Vec<_> = manifest().iter().map(|s| s.name).collect();
        assert_eq!(names, vec![NODE, SUB_STORE, OVERRIDE_YAML]);
    }
}
