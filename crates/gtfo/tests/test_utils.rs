// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test utilities for gtfo integration tests
//!
//! This module provides utilities for:
//! - Temporary Go module directories
//! - Building `go test -json` event streams
//! - Running the gtfo binary

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicU32, Ordering};

use serde_json::json;

// ============================================================================
// Temporary Directory Management
// ============================================================================

/// Counter for generating unique test directory names
static TEST_DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A temporary directory that is automatically cleaned up when dropped
pub struct TempTestDir {
    path: PathBuf,
}

impl TempTestDir {
    /// Create a new temporary test directory
    ///
    /// The directory is created under the system temp directory with a
    /// unique name based on the test name and a counter.
    pub fn new(test_name: &str) -> Self {
        let counter = TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir_name = format!(
            "gtfo-test-{}-{}-{}",
            test_name,
            std::process::id(),
            counter
        );
        let path = std::env::temp_dir().join(dir_name);

        fs::create_dir_all(&path).expect("Failed to create temp test directory");

        Self { path }
    }

    /// Create a directory holding a go.mod for `module`
    pub fn with_module(test_name: &str, module: &str) -> Self {
        let temp = Self::new(test_name);
        temp.create_file("go.mod", &format!("module {module}\n\ngo 1.22\n"));
        temp
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a file within the temp directory with the given content
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }
}

impl Drop for TempTestDir {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}

// ============================================================================
// Event Streams
// ============================================================================

/// Builder for `go test -json` event streams
#[derive(Default)]
pub struct Stream {
    lines: Vec<String>,
}

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    fn event(mut self, action: &str, package: &str, test: &str, output: &str) -> Self {
        self.lines.push(
            json!({
                "Time": "2026-03-04T10:11:12.123456789+01:00",
                "Action": action,
                "Package": package,
                "Test": test,
                "Output": output,
            })
            .to_string(),
        );
        self
    }

    /// A test that prints `outputs` and then passes
    pub fn passing(self, package: &str, test: &str, outputs: &[&str]) -> Self {
        self.test(package, test, outputs, "pass")
    }

    /// A test that prints `outputs` and then fails
    pub fn failing(self, package: &str, test: &str, outputs: &[&str]) -> Self {
        self.test(package, test, outputs, "fail")
    }

    fn test(mut self, package: &str, test: &str, outputs: &[&str], result: &str) -> Self {
        self = self
            .event("run", package, test, "")
            .event("output", package, test, &format!("=== RUN   {test}\n"));
        for output in outputs {
            self = self.event("output", package, test, output);
        }
        let marker = if result == "pass" { "PASS" } else { "FAIL" };
        self.event(
            "output",
            package,
            test,
            &format!("--- {marker}: {test} (0.00s)\n"),
        )
        .event(result, package, test, "")
    }

    /// The package summary lines and package-level result
    pub fn package_result(self, package: &str, failed: bool) -> Self {
        if failed {
            self.event("output", package, "", "FAIL\n")
                .event("output", package, "", &format!("FAIL\t{package}\t0.105s\n"))
                .event("fail", package, "", "")
        } else {
            self.event("output", package, "", "PASS\n")
                .event("output", package, "", &format!("ok  \t{package}\t0.004s\n"))
                .event("pass", package, "", "")
        }
    }

    /// Append a raw line
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

// ============================================================================
// Binary
// ============================================================================

/// Run the gtfo binary in `dir` with `args`, feeding `stdin`
pub fn run_gtfo(dir: &Path, args: &[&str], stdin: &str) -> Output {
    run_gtfo_with_env(dir, args, stdin, &[])
}

/// Like [`run_gtfo`], with extra environment variables
pub fn run_gtfo_with_env(dir: &Path, args: &[&str], stdin: &str, env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_gtfo"));
    command
        .args(args)
        .current_dir(dir)
        .env_remove("GTFO_FORMAT")
        .env_remove("GTFO_DIR")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in env {
        command.env(key, value);
    }

    let mut child = command.spawn().expect("Failed to spawn gtfo");
    if let Some(mut pipe) = child.stdin.take() {
        // gtfo may exit before reading stdin, e.g. on a bad format
        let _ = pipe.write_all(stdin.as_bytes());
    }

    child.wait_with_output().expect("Failed to wait for gtfo")
}
