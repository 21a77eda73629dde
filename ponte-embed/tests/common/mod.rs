// ponte-embed - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared helpers for ponte-embed integration tests.
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

#[allow(unused_imports)]
pub use ponte_embed::{Engine, Error, NativeRegistry, Value};

/// Create an engine with `source` already executed.
pub fn engine_with(source: &str) -> Engine {
    let engine = Engine::new().expect("engine should start");
    engine.exec(source).expect("source should run");
    engine
}

/// Registry holding a single `soma_10` native that adds 10 to its argument.
pub fn soma_10_registry() -> NativeRegistry {
    let mut natives = NativeRegistry::new();
    natives.register("soma_10", |x: f64| Ok(x + 10.0));
    natives
}

/// Write `source` to `name` inside a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn script_file(name: &str, source: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(name);
    fs::write(&path, source).expect("write script");
    (dir, path)
}
