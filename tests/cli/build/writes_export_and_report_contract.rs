use crate::harness::TestContext;
use sha2::{Digest, Sha256};
use std::fs;

#[test]
fn build_writes_the_published_json_export() {
    let ctx = TestContext::new();

    ctx.init_site();
    ctx.cli().args(["build"]).assert().success();

    let export: serde_json::Value =
        serde_json::from_str(&ctx.read_text("public/site-config.json")).expect("export parses");

    assert_eq!(export["siteMetadata"]["title"], "Example Blog");
    assert_eq!(export["siteMetadata"]["name"], "Jane Doe");
    assert_eq!(export["siteMetadata"]["siteUrl"], "https://example.com/");
    assert_eq!(export["siteMetadata"]["hero"]["maxWidth"], 652);

    let plugins = export["plugins"].as_array().expect("plugins serialize as an array");
    assert_eq!(plugins.len(), 2);
    assert_eq!(plugins[0]["resolve"], "theme-novela");
    assert_eq!(plugins[0]["options"]["contentPosts"], "content/posts");
    assert_eq!(plugins[0]["options"]["basePath"], "/");
    assert_eq!(plugins[0]["options"]["sources"]["local"], true);
    assert_eq!(plugins[1]["resolve"], "manifest");
    assert_eq!(plugins[1]["options"]["short_name"], "Jane");
    assert_eq!(plugins[1]["options"]["display"], "standalone");
}

#[test]
fn build_report_describes_every_artifact_but_itself() {
    let ctx = TestContext::new();

    ctx.init_site();
    ctx.cli().args(["build"]).assert().success();

    let report: serde_json::Value =
        serde_json::from_str(&ctx.read_text("public/build-report.json")).expect("report parses");

    assert_eq!(report["schema_version"], 1);
    assert_eq!(report["tool_version"], env!("CARGO_PKG_VERSION"));
    assert!(report["built_at"].as_str().is_some_and(|ts| ts.contains('T')));

    let files = report["files"].as_array().expect("report lists files");
    assert_eq!(files.len(), 6);
    assert!(files.iter().all(|file| file["path"] != "build-report.json"));

    let logo = files
        .iter()
        .find(|file| file["path"] == "partials/logo.html")
        .expect("report lists the logo partial");
    let on_disk = fs::read(ctx.path("public/partials/logo.html")).expect("artifact exists");
    assert_eq!(logo["bytes"], on_disk.len() as u64);
    assert_eq!(logo["sha256"], format!("{:x}", Sha256::digest(&on_disk)));
}
