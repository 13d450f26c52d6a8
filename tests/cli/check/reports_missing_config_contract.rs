use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn check_reports_when_no_configuration_exists() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "[ERROR] site.toml: no site configuration found (looked for site.toml and site.yml)",
        ));
}
