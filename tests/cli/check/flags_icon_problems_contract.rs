use crate::harness::TestContext;
use crate::harness::site_fixtures::{STARTER_FAVICON, png_bytes};
use predicates::prelude::*;

const MANIFEST_SITE_TOML: &str = r##"[site_metadata]
title = "Example Blog"
name = "Jane Doe"
site_url = "https://example.com"
description = "A personal blog."

[site_metadata.hero]
heading = "Welcome."
max_width = 652

[[plugins]]
resolve = "manifest"

[plugins.options]
name = "Example Blog"
short_name = "Jane"
start_url = "/"
background_color = "#fff"
theme_color = "#fff"
display = "standalone"
icon = "assets/favicon.png"
"##;

#[test]
fn a_missing_manifest_icon_is_an_error() {
    let ctx = TestContext::new();

    ctx.write_site_toml(MANIFEST_SITE_TOML);

    ctx.cli()
        .args(["check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR] assets/favicon.png: manifest icon not found"));
}

#[test]
fn a_non_square_icon_warns() {
    let ctx = TestContext::new();

    ctx.write_site_toml(MANIFEST_SITE_TOML);
    ctx.write_bytes("assets/favicon.png", &png_bytes(64, 32));

    ctx.cli()
        .args(["check"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("64x32, not square"));
}

#[test]
fn an_undecodable_icon_is_an_error() {
    let ctx = TestContext::new();

    ctx.write_site_toml(MANIFEST_SITE_TOML);
    ctx.write_file("assets/favicon.png", "not an image");

    ctx.cli()
        .args(["check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR] assets/favicon.png"));
}

#[test]
fn the_starter_icon_passes_clean() {
    let ctx = TestContext::new();

    ctx.write_site_toml(MANIFEST_SITE_TOML);
    ctx.write_bytes("assets/favicon.png", STARTER_FAVICON);

    ctx.cli()
        .args(["check", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed."));
}
