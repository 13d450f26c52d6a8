use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn check_passes_on_a_freshly_scaffolded_site() {
    let ctx = TestContext::new();

    ctx.init_site();

    ctx.cli()
        .args(["check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed."))
        .stderr(predicate::str::is_empty());
}
