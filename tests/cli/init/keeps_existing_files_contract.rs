use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn init_keeps_files_already_in_place() {
    let ctx = TestContext::new();

    ctx.write_bytes("assets/favicon.png", b"custom icon");

    ctx.cli()
        .args([
            "init",
            "--title",
            "Example Blog",
            "--name",
            "Jane Doe",
            "--url",
            "https://example.com",
            "--description",
            "A personal blog.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 file(s) written"))
        .stdout(predicate::str::contains("kept 1 existing file(s)"));

    let icon = fs::read(ctx.path("assets/favicon.png")).expect("icon should still exist");
    assert_eq!(icon, b"custom icon");
    assert!(ctx.path("site.toml").exists());
}
