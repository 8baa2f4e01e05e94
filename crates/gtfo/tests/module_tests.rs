// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Tests for module resolution from go.mod

mod test_utils;

use gtfo::module::{self, ModuleError};
use test_utils::TempTestDir;

const MODULE: &str = "bit.ly/3dKQQSt";

#[test]
fn test_no_mod() {
    let temp = TempTestDir::new("no_mod");
    let err = module::resolve(temp.path()).expect_err("Should fail");
    assert!(matches!(err, ModuleError::Manifest { .. }));
}

#[test]
fn test_with_mod() {
    let temp = TempTestDir::with_module("with_mod", MODULE);
    let found = module::resolve(temp.path()).expect("Should resolve");
    assert_eq!(found, MODULE);
}

#[test]
fn test_empty_mod() {
    let temp = TempTestDir::new("empty_mod");
    temp.create_file("go.mod", "");
    let found = module::resolve(temp.path()).expect("Should resolve");
    assert_eq!(found, "");
}

#[test]
fn test_crlf_mod() {
    let temp = TempTestDir::new("crlf_mod");
    temp.create_file("go.mod", "module example.com/m\r\n\r\ngo 1.22\r\n");
    let found = module::resolve(temp.path()).expect("Should resolve");
    assert_eq!(found, "example.com/m");
}

#[test]
fn test_mod_is_a_directory() {
    let temp = TempTestDir::new("mod_dir");
    temp.create_file("go.mod/keep", "");
    assert!(module::resolve(temp.path()).is_err());
}
