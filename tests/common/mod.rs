// ponte - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Helpers for running the `ponte` binary against scripts written to a
//! temporary working directory.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use tempfile::TempDir;

/// Script name the binary loads when given no arguments.
pub const DEFAULT_SCRIPT: &str = "03-funcao.lua";

/// A temporary working directory holding `03-funcao.lua` with `source`.
pub fn workdir_with(source: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join(DEFAULT_SCRIPT), source).expect("write script");
    dir
}

/// A `ponte` command running inside `dir` with no configuration from the
/// surrounding environment.
pub fn ponte_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ponte").expect("ponte binary");
    cmd.current_dir(dir)
        .env_remove("PONTE_SCRIPT")
        .env_remove("RUST_LOG");
    cmd
}
