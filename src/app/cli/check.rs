//! Check command implementation.

use crate::app::api::{self, CheckOptions};
use crate::domain::AppError;

pub fn run_check(strict: bool, links: bool) -> Result<i32, AppError> {
    let outcome = api::check(CheckOptions { strict, links })?;
    Ok(outcome.exit_code)
}
