// Licensed under the Apache-2.0 license

//! Provenance metadata for generated artifacts.
//!
//! Generators stamp their output with a fixed notice plus a one-line source
//! string of the shape `Generated [from <revision> ]on <YYYY-MM-DD HH:MM>.`.
//! The revision clause is present only when a git revision can be resolved
//! for the working directory; any failure of the probe silently omits it.

use anyhow::{bail, Result};
use std::process::Command;

/// Fixed notice that a file is automatically generated.
pub fn generated_info() -> &'static str {
    "Automatically generated file"
}

/// One-line provenance string with an optional revision clause and the
/// current local time.
pub fn generated_source_info() -> String {
    let mut revision_info = String::new();
    if let Ok(revision) = git_revision() {
        revision_info = format!("from {revision} ");
    }
    let time_info = chrono::Local::now().format("%Y-%m-%d %H:%M");
    format!("Generated {revision_info}on {time_info}.")
}

/// Short hash of the checked-out git commit.
fn git_revision() -> Result<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()?;
    if !output.status.success() {
        bail!("git rev-parse exited with {}", output.status);
    }
    let revision = String::from_utf8(output.stdout)?;
    let revision = revision.trim();
    if revision.is_empty() {
        bail!("git rev-parse produced no output");
    }
    Ok(revision.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_source_info_shape() {
        let info = generated_source_info();
        assert!(info.starts_with("Generated "));
        assert!(info.ends_with('.'));
        // The timestamp clause is always present, revision or not.
        assert!(info.contains("on "));
    }
}
