//! Init command implementation.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::StarterSite;

pub fn run_init(
    title: Option<String>,
    name: Option<String>,
    url: Option<String>,
    description: Option<String>,
) -> Result<(), AppError> {
    let Some(site) = collect_starter(title, name, url, description)? else {
        println!("Init cancelled.");
        return Ok(());
    };

    let outcome = crate::app::api::init(&site)?;
    println!("✅ Initialized site ({} file(s) written)", outcome.written.len());
    for path in &outcome.written {
        println!("   {}", path);
    }
    if !outcome.skipped.is_empty() {
        println!("   kept {} existing file(s)", outcome.skipped.len());
    }
    Ok(())
}

/// Fills the starter answers, prompting for whatever the flags left out.
/// Returns `None` when the user interrupts a prompt.
fn collect_starter(
    title: Option<String>,
    name: Option<String>,
    url: Option<String>,
    description: Option<String>,
) -> Result<Option<StarterSite>, AppError> {
    let Some(title) = value_or_prompt(title, "Site title", None)? else {
        return Ok(None);
    };
    let Some(name) = value_or_prompt(name, "Author name", None)? else {
        return Ok(None);
    };
    let Some(site_url) = value_or_prompt(url, "Site URL", Some("https://example.com"))? else {
        return Ok(None);
    };
    let Some(description) =
        value_or_prompt(description, "Description", Some("A personal blog."))?
    else {
        return Ok(None);
    };
    Ok(Some(StarterSite { title, name, site_url, description }))
}

fn value_or_prompt(
    value: Option<String>,
    prompt: &str,
    default: Option<&str>,
) -> Result<Option<String>, AppError> {
    if let Some(value) = value {
        return Ok(Some(value));
    }
    let mut input = Input::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::InternalError(format!("Failed to read {}: {}", prompt, err))),
    }
}
