//! Build command implementation.

use crate::app::api::{self, BuildOptions};
use crate::domain::AppError;

pub fn run_build(out: String, logo_fill: Option<String>) -> Result<(), AppError> {
    let options = BuildOptions { out_dir: out, logo_fill };
    let outcome = api::build(&options)?;

    if outcome.from_legacy {
        eprintln!("Note: built from legacy site.yml; rename it to site.toml.");
    }
    println!("✅ Built {} artifact(s) into {}/", outcome.artifacts.len(), outcome.out_dir);
    for artifact in &outcome.artifacts {
        println!("   {}/{}", outcome.out_dir, artifact);
    }
    Ok(())
}
