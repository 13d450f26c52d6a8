use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_rejects_a_title_containing_quotes() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "init",
            "--title",
            "My \"Blog\"",
            "--name",
            "Jane Doe",
            "--url",
            "https://example.com",
            "--description",
            "A personal blog.",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for 'siteMetadata.title'"));

    assert!(!ctx.path("site.toml").exists());
}

#[test]
fn init_rejects_a_url_containing_quotes() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "init",
            "--title",
            "Example Blog",
            "--name",
            "Jane Doe",
            "--url",
            "https://example.com/\"x",
            "--description",
            "A personal blog.",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for 'siteMetadata.siteUrl'"));

    assert!(!ctx.path("site.toml").exists());
}

#[test]
fn init_rejects_a_url_without_a_scheme() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "init",
            "--title",
            "Example Blog",
            "--name",
            "Jane Doe",
            "--url",
            "example.com",
            "--description",
            "A personal blog.",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for 'siteMetadata.siteUrl'"));

    assert!(!ctx.path("site.toml").exists());
}
