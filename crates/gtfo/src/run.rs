// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command orchestration
//!
//! Wires the parser and the formatter together: compile the format, read the
//! event stream, then print one rendered entry per failing test.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use gtfo_format::Formatter;
use gtfo_parser::{FailureRecord, parse_reader};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::module;

/// Exit code when no test failed
pub const EXIT_CLEAN: u8 = 0;
/// Exit code when at least one test failed
pub const EXIT_FAILURES: u8 = 1;
/// Exit code when gtfo itself could not complete
pub const EXIT_ERROR: u8 = 2;

/// Run gtfo over `input`, writing the result to `output`
///
/// Returns the number of failing tests found.
///
/// # Errors
///
/// Fails if the configuration is invalid, the format does not compile, the
/// input is not a valid event stream, or writing the output fails. Nothing is
/// written in the first three cases.
pub fn run(config: &Config, input: impl BufRead, output: &mut impl Write) -> Result<usize> {
    config.validate()?;

    if config.json {
        let records = parse_reader(input).context("failed to parse go test output")?;
        write_json(&records, output)?;
        return Ok(records.len());
    }

    let module = resolve_module(config.manifest_dir().as_deref());

    let formatter =
        Formatter::prepare(&config.format, module).context("failed to compile the format")?;

    let records = parse_reader(input).context("failed to parse go test output")?;
    info!(failures = records.len(), "parsed go test output");

    for record in &records {
        output.write_all(formatter.format(record).as_bytes())?;
    }
    output.flush()?;

    Ok(records.len())
}

/// Map the result of [`run`] to a process exit code
#[must_use]
pub fn exit_code(result: &Result<usize>) -> u8 {
    match result {
        Ok(0) => EXIT_CLEAN,
        Ok(_) => EXIT_FAILURES,
        Err(_) => EXIT_ERROR,
    }
}

/// Resolve the module, degrading to an empty one when go.mod is unavailable
fn resolve_module(dir: Option<&Path>) -> String {
    let Some(dir) = dir else {
        warn!(error = "no working directory", "Couldn't figure out the current module");
        return String::new();
    };

    match module::resolve(dir) {
        Ok(module) => module,
        Err(e) => {
            warn!(error = %e, "Couldn't figure out the current module");
            String::new()
        }
    }
}

fn write_json(records: &[FailureRecord], output: &mut impl Write) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *output, record)?;
        output.write_all(b"\n")?;
    }
    output.flush()?;
    debug!(records = records.len(), "wrote JSON records");
    Ok(())
}
