// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Marta Oliveira

//! Session persistence: whole-file JSON save and load.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::session::SessionRecord;

/// Well-known session filename. Each save replaces the previous one;
/// there is no history.
pub const SESSION_FILE_NAME: &str = "footprint_data.json";

/// Session file location next to the working directory.
pub fn default_session_path() -> PathBuf {
    PathBuf::from(SESSION_FILE_NAME)
}

/// Serialize the record as pretty JSON and replace `output`.
pub fn write_session(output: &Path, record: &SessionRecord) -> Result<()> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create session directory {:?}", parent))?;
    }

    let json = serde_json::to_vec_pretty(record).context("Failed to serialize session")?;
    fs::write(output, json).with_context(|| format!("Failed to write session file {:?}", output))
}

/// Read a previously saved session. A missing file is an error the caller
/// reports as the "no saved data" condition.
pub fn read_session(path: &Path) -> Result<SessionRecord> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Malformed session file {:?}", path))
}
