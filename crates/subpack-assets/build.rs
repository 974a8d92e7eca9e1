//! Build script for the embedded asset registry
//!
//! Checks that every payload the target needs is staged in the asset
//! directory, then exports that directory so `include_bytes!` reads the same
//! files. A missing payload fails the build here with a readable message
//! instead of surfacing as an `include_bytes!` error (or not at all).

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
#[path = "src/manifest.rs"]
mod manifest;

use manifest::MANIFEST;

/// Overrides the directory payloads are read from
const ASSETS_DIR_ENV: &str = "SUBPACK_ASSETS_DIR";

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap();
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap();

    println!("cargo:rerun-if-env-changed={}", ASSETS_DIR_ENV);
    let assets_dir = resolve_assets_dir(&manifest_dir, env::var_os(ASSETS_DIR_ENV));
    println!("cargo:rerun-if-changed={}", assets_dir.display());

    let mut failed = Vec::new();

    for spec in MANIFEST
        .iter()
        .filter(|s| s.is_selected_for(&target_os, &target_arch))
    {
        let path = assets_dir.join(spec.file_name);
        println!("cargo:rerun-if-changed={}", path.display());

        if let Err(e) = check_asset(&path) {
            failed.push((spec.name, path, e));
        }
    }

    if !failed.is_empty() {
        let mut message = format!(
            "{} embedded asset(s) unavailable for {}/{} (asset dir: {}, set {} to override):",
            failed.len(),
            target_os,
            target_arch,
            assets_dir.display(),
            ASSETS_DIR_ENV,
        );
        for (name, path, error) in &failed {
            message.push_str(&format!("\n  {}: {}: {}", name, path.display(), error));
        }
        panic!("{}", message);
    }

    println!("cargo:rustc-env={}={}", ASSETS_DIR_ENV, assets_dir.display());
}

/// Relative overrides are taken relative to this crate, not the caller's cwd.
fn resolve_assets_dir(manifest_dir: &Path, overridden: Option<OsString>) -> PathBuf {
    match overridden {
        Some(dir) if !dir.is_empty() => {
            let dir = PathBuf::from(dir);
            if dir.is_absolute() {
                dir
            } else {
                manifest_dir.join(dir)
            }
        }
        _ => manifest_dir.join("assets"),
    }
}

fn check_asset(path: &Path) -> Result<(), String> {
    let metadata = fs::metadata(path).map_err(|e| e.to_string())?;

    if !metadata.is_file() {
        return Err("not a regular file".to_string());
    }
    if metadata.len() == 0 {
        return Err("file is empty".to_string());
    }

    // Catch unreadable files here rather than inside include_bytes!
    fs::File::open(path).map_err(|e| e.to_string())?;

    Ok(())
}
