use crate::harness::TestContext;
use crate::harness::site_fixtures::MINIMAL_SITE_TOML;
use predicates::prelude::*;

#[test]
fn build_rejects_a_config_with_an_invalid_site_url() {
    let ctx = TestContext::new();

    ctx.write_site_toml(&MINIMAL_SITE_TOML.replace("https://example.com", "ftp://example.com"));

    ctx.cli()
        .args(["build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for 'siteMetadata.siteUrl'"));

    assert!(!ctx.path("public").exists());
}

#[test]
fn build_rejects_a_config_that_does_not_parse() {
    let ctx = TestContext::new();

    ctx.write_site_toml("[site_metadata\ntitle = \"broken\"\n");

    ctx.cli()
        .args(["build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse site.toml"));
}

#[test]
fn build_reports_a_missing_configuration() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No site configuration found"));
}

#[test]
fn build_fails_when_the_manifest_icon_is_missing() {
    let ctx = TestContext::new();

    ctx.init_site();
    std::fs::remove_file(ctx.path("assets/favicon.png")).expect("remove starter icon");

    ctx.cli()
        .args(["build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("assets/favicon.png"))
        .stderr(predicate::str::contains("file not found"));
}
