use crate::harness::TestContext;
use std::fs;

#[test]
fn build_emits_the_manifest_and_fingerprinted_icons() {
    let ctx = TestContext::new();

    ctx.init_site();
    ctx.cli().args(["build"]).assert().success();

    let manifest = ctx.read_text("public/manifest.webmanifest");
    assert!(manifest.contains("\"name\": \"Example Blog\""));
    assert!(manifest.contains("\"short_name\": \"Jane\""));
    assert!(manifest.contains("\"display\": \"standalone\""));
    assert!(manifest.contains("\"sizes\": \"192x192\""));
    assert!(manifest.contains("\"sizes\": \"512x512\""));
    assert!(manifest.contains("\"type\": \"image/png\""));

    let icons: Vec<String> = fs::read_dir(ctx.path("public/icons"))
        .expect("icons directory should exist")
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(icons.len(), 2);
    for size in [192, 512] {
        let prefix = format!("icon-{size}x{size}.");
        let name = icons
            .iter()
            .find(|name| name.starts_with(&prefix) && name.ends_with(".png"))
            .unwrap_or_else(|| panic!("missing {size}px icon in {icons:?}"));
        assert!(manifest.contains(name.as_str()), "manifest should reference {name}");
    }
}

#[test]
fn icons_are_resized_to_their_declared_dimensions() {
    let ctx = TestContext::new();

    ctx.init_site();
    ctx.cli().args(["build"]).assert().success();

    for entry in fs::read_dir(ctx.path("public/icons")).expect("icons directory should exist") {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        let icon = image::open(&path).expect("emitted icon should decode");
        let size = if name.starts_with("icon-192x192.") { 192 } else { 512 };
        assert_eq!(image::GenericImageView::dimensions(&icon), (size, size));
    }
}

#[test]
fn icon_fingerprints_follow_the_source_image() {
    let ctx = TestContext::new();

    ctx.init_site();
    ctx.cli().args(["build"]).assert().success();
    let first = reported_icon_paths(&ctx);
    assert_eq!(first.len(), 2);

    // Same source, same names.
    ctx.cli().args(["build"]).assert().success();
    assert_eq!(reported_icon_paths(&ctx), first);

    // New source, new names.
    ctx.write_bytes("assets/favicon.png", &crate::harness::site_fixtures::png_bytes(96, 96));
    ctx.cli().args(["build"]).assert().success();
    let replaced = reported_icon_paths(&ctx);
    assert_eq!(replaced.len(), 2);
    for path in &replaced {
        assert!(!first.contains(path), "fingerprint should change with the source: {path}");
    }
}

/// Icon artifact paths as recorded in the build report of the last run.
fn reported_icon_paths(ctx: &TestContext) -> Vec<String> {
    let report: serde_json::Value =
        serde_json::from_str(&ctx.read_text("public/build-report.json")).expect("report parses");
    let mut paths: Vec<String> = report["files"]
        .as_array()
        .expect("report lists files")
        .iter()
        .map(|file| file["path"].as_str().expect("path is a string").to_string())
        .filter(|path| path.starts_with("icons/"))
        .collect();
    paths.sort();
    paths
}
