// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Go module resolution
//!
//! The module path is read from the first line of `go.mod`, which `go mod
//! init` always writes as `module <path>`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Name of the Go module manifest
pub const MANIFEST: &str = "go.mod";

const MODULE_PREFIX: &str = "module ";

/// Errors that can occur while resolving the module
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The manifest is missing or unreadable
    #[error("cannot read {}: {source}", path.display())]
    Manifest {
        /// Path of the manifest
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Resolve the module path from the `go.mod` in `dir`
///
/// An empty manifest resolves to an empty module path.
///
/// # Errors
///
/// Returns `ModuleError::Manifest` if `go.mod` cannot be opened or read.
pub fn resolve(dir: &Path) -> Result<String, ModuleError> {
    let path = dir.join(MANIFEST);
    let manifest_error = |source: std::io::Error| ModuleError::Manifest {
        path: path.clone(),
        source,
    };

    let file = File::open(&path).map_err(manifest_error)?;
    let first_line = BufReader::new(file)
        .lines()
        .next()
        .transpose()
        .map_err(manifest_error)?
        .unwrap_or_default();

    let module = module_from_line(&first_line);
    debug!(path = %path.display(), module = %module, "resolved module");
    Ok(module)
}

/// Extract the module path from the first line of a manifest
#[must_use]
pub fn module_from_line(line: &str) -> String {
    let line = line.trim_end();
    line.strip_prefix(MODULE_PREFIX).unwrap_or(line).to_string()
}
