//! Build report domain entity.
//!
//! Every `build` run writes a report next to the artifacts so a deploy step
//! can verify what was produced without re-reading the configuration.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const REPORT_SCHEMA_VERSION: u32 = 1;

/// The filename of the build report, relative to the output directory.
pub const REPORT_FILENAME: &str = "build-report.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    pub schema_version: u32,
    pub tool_version: String,
    /// RFC 3339 timestamp of the run.
    pub built_at: String,
    pub files: Vec<BuildReportEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReportEntry {
    pub path: String,
    pub bytes: u64,
    pub sha256: String,
}

impl BuildReport {
    pub fn new(built_at: String, files: Vec<BuildReportEntry>) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            built_at,
            files,
        }
    }

    pub fn to_json(&self) -> Result<String, crate::domain::AppError> {
        serde_json::to_string_pretty(self).map_err(|err| {
            crate::domain::AppError::InternalError(format!(
                "Failed to serialize build report: {}",
                err
            ))
        })
    }
}

impl BuildReportEntry {
    pub fn for_artifact(path: impl Into<String>, bytes: &[u8]) -> Self {
        Self { path: path.into(), bytes: bytes.len() as u64, sha256: hash_bytes(bytes) }
    }
}

pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Short content fingerprint used in artifact filenames.
pub fn fingerprint(bytes: &[u8]) -> String {
    hash_bytes(bytes)[..8].to_string()
}
