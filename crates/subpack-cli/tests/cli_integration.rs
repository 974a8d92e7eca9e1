//! Integration tests for the `subpack` binary.
//!
//! Drives the built executable and checks its output against the registry.

use std::process::{Command, Output};
use subpack_assets::{get_asset, is_embedded, NODE, OVERRIDE_YAML, SUB_STORE};

fn subpack(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_subpack"))
        .args(args)
        .env_remove("SUBPACK_LOG")
        .output()
        .expect("failed to run subpack")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ────────────────────────────────────────────────────────────────────────────
// list
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_list_table() {
    let output = subpack(&["list", "--color", "never"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("NAME"));
    for name in [NODE, SUB_STORE, OVERRIDE_YAML] {
        assert!(text.contains(name), "missing {} in:\n{}", name, text);
    }
    assert!(text.contains("windows/x86_64"));
    if !is_embedded(NODE) {
        assert!(text.contains("not embedded"));
    }
}

#[test]
fn test_list_json() {
    let output = subpack(&["list", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 3);

    for row in rows {
        let name = row["name"].as_str().unwrap();
        assert_eq!(row["embedded"].as_bool(), Some(is_embedded(name)));
        assert_eq!(row["compression"], "zstd");
        assert!(row.get("sha256").is_none());
    }

    let sub_store = rows.iter().find(|r| r["name"] == SUB_STORE).unwrap();
    assert!(sub_store["platform"].is_null());
    assert_eq!(
        sub_store["size"].as_u64(),
        Some(get_asset(SUB_STORE).unwrap().len() as u64)
    );

    let node = rows.iter().find(|r| r["name"] == NODE).unwrap();
    assert_eq!(node["platform"], "windows/x86_64");
}

// ────────────────────────────────────────────────────────────────────────────
// info
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_info_text() {
    let output = subpack(&["info", SUB_STORE]);
    assert!(output.status.success());

    let asset = get_asset(SUB_STORE).unwrap();
    let text = stdout(&output);
    assert!(text.contains("sub-store.bundle.js.zst"));
    assert!(text.contains(&format!("({} bytes)", asset.len())));
    assert!(text.contains(&asset.sha256_hex()));
}

#[test]
fn test_info_json() {
    let output = subpack(&["info", OVERRIDE_YAML, "--json"]);
    assert!(output.status.success());

    let asset = get_asset(OVERRIDE_YAML).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["name"], OVERRIDE_YAML);
    assert_eq!(json["file_name"], "ACL4SSR_Online_Full.yaml.zst");
    assert_eq!(json["embedded"], true);
    assert_eq!(json["sha256"], asset.sha256_hex());
}

#[test]
fn test_info_unknown_asset_fails() {
    let output = subpack(&["info", "python"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown asset: python"));
}

#[cfg(not(all(target_os = "windows", target_arch = "x86_64")))]
#[test]
fn test_info_excluded_asset_fails() {
    let output = subpack(&["info", NODE]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("only embedded in windows/x86_64 builds"), "{}", stderr);
}

// ────────────────────────────────────────────────────────────────────────────
// check
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_check_passes_on_shipped_assets() {
    let output = subpack(&["check", "--color", "never"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    assert!(text.contains(" PASS  sub-store"));
    assert!(text.contains(" PASS  override-yaml"));
    assert!(!text.contains("FAIL"));
    if is_embedded(NODE) {
        assert!(text.contains(" PASS  node"));
    } else {
        assert!(text.contains(" SKIP  node"));
    }
}

// ────────────────────────────────────────────────────────────────────────────
// global flags
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_color_rejects_unknown_value() {
    let output = subpack(&["list", "--color", "alwys"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value 'alwys'"), "{}", stderr);
}

#[test]
fn test_color_accepts_known_values() {
    for when in ["auto", "always", "never"] {
        let output = subpack(&["list", "--json", "--color", when]);
        assert!(output.status.success(), "--color {} failed", when);
    }
}
