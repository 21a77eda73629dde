// ponte-embed - Native function registry
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Named table of Rust functions exposed to scripts.
//!
//! A [`NativeRegistry`] is filled before the interpreter exists and handed
//! to [`Engine::with_natives`](crate::Engine::with_natives), which installs
//! every entry as a global. Arguments and results are marshaled by `mlua`,
//! so a native declared as `Fn(f64) -> mlua::Result<f64>` receives one
//! number and leaves one number for the caller.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use mlua::{FromLuaMulti, Function, IntoLuaMulti, Lua};

use crate::error::Result;

type Installer = Box<dyn FnOnce(&Lua) -> mlua::Result<Function>>;

/// Registry mapping global names to native functions.
#[derive(Default)]
pub struct NativeRegistry {
    entries: BTreeMap<String, Installer>,
}

impl NativeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        NativeRegistry::default()
    }

    /// Register `func` under the global `name`.
    ///
    /// Registering the same name again replaces the earlier function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ponte_embed::{Engine, NativeRegistry};
    ///
    /// let mut natives = NativeRegistry::new();
    /// natives.register("dobro", |x: f64| Ok(x * 2.0));
    ///
    /// let engine = Engine::with_natives(natives).unwrap();
    /// let result: f64 = engine.call("dobro", 21.0).unwrap();
    /// assert_eq!(result, 42.0);
    /// ```
    pub fn register<A, R, F>(&mut self, name: &str, func: F) -> &mut Self
    where
        A: FromLuaMulti + 'static,
        R: IntoLuaMulti + 'static,
        F: Fn(A) -> mlua::Result<R> + 'static,
    {
        let installer: Installer =
            Box::new(move |lua: &Lua| lua.create_function(move |_, args: A| func(args)));
        if self.entries.insert(name.to_string(), installer).is_some() {
            debug!("native `{}` replaced", name);
        }
        self
    }

    /// Returns true if a native is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered natives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no natives are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, in sorted order. `install` binds them in this order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Create every registered function and bind it as a global of `lua`.
    pub fn install(self, lua: &Lua) -> Result<()> {
        let globals = lua.globals();
        for (name, installer) in self.entries {
            let func = installer(lua)?;
            globals.set(name.as_str(), func)?;
            debug!("registered native `{}`", name);
        }
        Ok(())
    }
}

impl fmt::Debug for NativeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeRegistry")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
