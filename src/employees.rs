//! Loads the employee roster that names the output files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SplitError};

#[derive(Deserialize)]
struct Roster {
    employees: Vec<String>,
}

/// Load employee names from a JSON file of the shape
/// `{"employees": ["name", ...]}`.
///
/// Names are returned sorted ascending by byte-wise ordinal comparison
/// (`Ord` for `String`); this ordering determines which source page each
/// name is paired with. Duplicates are kept.
///
/// Fails with [`SplitError::NotFound`] if the file does not exist and
/// [`SplitError::Format`] for any shape violation: invalid JSON, a missing
/// `employees` key, or a value that is not an array of strings.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SplitError::NotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path)?;
    let roster: Roster = serde_json::from_str(&raw).map_err(|e| SplitError::Format {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut names = roster.employees;
    names.sort();
    Ok(names)
}
