//! Layering guardrails for the workspace.
//!
//! `minipas_core` is the vocabulary layer: it must stay dependency-free so every other crate can
//! share it. The syntax crate may depend on `minipas_core` but never on the driver crate.
//! These tests scan the manifests and fail if a forbidden entry appears in `[dependencies]`.

/// Return the crate names listed under `[dependencies]` in `manifest`.
fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let manifest = include_str!("../crates/minipas_core/Cargo.toml");
    let deps = dependencies(manifest);
    assert!(deps.is_empty(), "`minipas_core` must stay dependency-free; found {:?}", deps);
}

#[test]
fn syntax_does_not_depend_on_driver() {
    let manifest = include_str!("../crates/minipas_syntax/Cargo.toml");
    let deps = dependencies(manifest);
    assert!(deps.iter().any(|d| d == "minipas_core"));
    assert!(
        !deps.iter().any(|d| d == "minipas"),
        "`minipas_syntax` must not depend on the `minipas` driver crate"
    );
}

#[test]
fn test_tooling_stays_in_dev_dependencies() {
    let manifest = include_str!("../Cargo.toml");
    let deps = dependencies(manifest);
    for dev_only in ["insta", "proptest"] {
        assert!(
            !deps.iter().any(|d| d == dev_only),
            "`{}` must not appear in [dependencies]; use [dev-dependencies] instead",
            dev_only
        );
    }
}
