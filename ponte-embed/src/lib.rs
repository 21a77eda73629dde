// ponte-embed - Embedding API for Lua
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # ponte-embed
//!
//! A small embedding API for calling between Rust and Lua 5.4.
//!
//! This crate owns the interpreter setup, installs Rust functions that
//! scripts can call, and checks values crossing back into Rust.
//!
//! ## Quick Start
//!
//! ```rust
//! use ponte_embed::Engine;
//!
//! let engine = Engine::new().unwrap();
//! let result = engine.eval("return 1 + 2").unwrap();
//! assert_eq!(result.as_integer(), Some(3));
//! ```
//!
//! ## Registering Native Functions
//!
//! Natives are collected in a [`NativeRegistry`] and installed when the
//! engine is created:
//!
//! ```rust
//! use ponte_embed::{Engine, NativeRegistry};
//!
//! let mut natives = NativeRegistry::new();
//! natives.register("soma_10", |x: f64| Ok(x + 10.0));
//!
//! let engine = Engine::with_natives(natives).unwrap();
//! engine.exec("function calculo(x, y) return soma_10(x) + y end").unwrap();
//! let z: f64 = engine.call("calculo", (1.0, 2.0)).unwrap();
//! assert_eq!(z, 13.0);
//! ```

mod convert;
mod engine;
mod error;
mod natives;

pub use convert::FromScriptValue;
pub use engine::Engine;
pub use error::{Error, Result, script_message};
pub use natives::NativeRegistry;

// Re-export interpreter types for convenience
pub use mlua::{Function, Lua, Value};
