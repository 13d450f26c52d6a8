use crate::harness::TestContext;
use crate::harness::site_fixtures::{MINIMAL_SITE_TOML, MINIMAL_SITE_YML};
use predicates::prelude::*;

#[test]
fn build_from_legacy_yaml_emits_a_rename_note() {
    let ctx = TestContext::new();

    ctx.write_site_yml(MINIMAL_SITE_YML);

    ctx.cli()
        .args(["build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Built 4 artifact(s) into public/"))
        .stderr(predicate::str::contains("legacy site.yml"));

    assert!(ctx.path("public/partials/logo.html").exists());
}

#[test]
fn canonical_toml_wins_over_a_diverged_legacy_copy() {
    let ctx = TestContext::new();

    ctx.write_site_toml(MINIMAL_SITE_TOML);
    ctx.write_site_yml(&MINIMAL_SITE_YML.replace("Example Blog", "Old Blog"));

    ctx.cli()
        .args(["build"])
        .assert()
        .success()
        .stderr(predicate::str::contains("legacy").not());

    let export: serde_json::Value =
        serde_json::from_str(&ctx.read_text("public/site-config.json")).expect("export parses");
    assert_eq!(export["siteMetadata"]["title"], "Example Blog");
}
