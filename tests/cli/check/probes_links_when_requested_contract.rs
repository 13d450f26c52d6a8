use crate::harness::TestContext;
use predicates::prelude::*;

fn config_with_urls(site_url: &str, social_url: &str) -> String {
    format!(
        r#"[site_metadata]
title = "Example Blog"
name = "Jane Doe"
site_url = "{site_url}"
description = "A personal blog."

[site_metadata.hero]
heading = "Welcome."
max_width = 652

[[site_metadata.social]]
name = "github"
url = "{social_url}"
"#
    )
}

#[test]
fn check_links_passes_when_every_url_responds() {
    let mut server = mockito::Server::new();
    let root = server.mock("HEAD", "/").with_status(200).create();
    let profile = server.mock("HEAD", "/jane").with_status(200).create();

    let ctx = TestContext::new();
    ctx.write_site_toml(&config_with_urls(&server.url(), &format!("{}/jane", server.url())));

    ctx.cli()
        .args(["check", "--links"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed."));

    root.assert();
    profile.assert();
}

#[test]
fn check_links_warns_on_an_unreachable_url() {
    let mut server = mockito::Server::new();
    server.mock("HEAD", "/").with_status(200).create();
    server.mock("HEAD", "/gone").with_status(404).create();

    let ctx = TestContext::new();
    ctx.write_site_toml(&config_with_urls(&server.url(), &format!("{}/gone", server.url())));

    ctx.cli()
        .args(["check", "--links"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("[WARN] siteMetadata.social[0].url"))
        .stderr(predicate::str::contains("unreachable: HTTP 404"));
}

#[test]
fn check_without_the_flag_performs_no_probes() {
    let mut server = mockito::Server::new();
    let untouched = server.mock("HEAD", "/").expect(0).create();

    let ctx = TestContext::new();
    ctx.write_site_toml(&config_with_urls(&server.url(), &format!("{}/jane", server.url())));

    ctx.cli().args(["check"]).assert().success();

    untouched.assert();
}
