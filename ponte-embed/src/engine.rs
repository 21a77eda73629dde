// ponte-embed - Engine implementation
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The Engine struct - main entry point for embedding Lua.

use std::path::Path;

use log::{debug, info};
use mlua::{IntoLua, IntoLuaMulti, Lua, LuaOptions, StdLib, Value};

use crate::convert::FromScriptValue;
use crate::error::{Error, Result, script_message};
use crate::natives::NativeRegistry;

/// An embedded Lua 5.4 interpreter.
///
/// `Engine` owns its execution context exclusively. Dropping it, or calling
/// [`Engine::close`], releases the interpreter; after that the context can
/// no longer be reached.
///
/// # Thread Safety
///
/// **`Engine` is NOT thread-safe.** The underlying Lua state is built
/// without the `send` feature. Create one `Engine` per thread if needed.
///
/// # Example
///
/// ```rust
/// use ponte_embed::Engine;
///
/// let engine = Engine::new().unwrap();
/// engine.exec("function soma(x, y) return x + y end").unwrap();
/// let result: f64 = engine.call("soma", (10, 20)).unwrap();
/// assert_eq!(result, 30.0);
/// ```
pub struct Engine {
    lua: Lua,
}

impl Engine {
    /// Create a new Engine with every standard library loaded, `debug`
    /// included.
    pub fn new() -> Result<Self> {
        Engine::with_natives(NativeRegistry::new())
    }

    /// Create a new Engine and install the given native functions as
    /// globals.
    pub fn with_natives(natives: NativeRegistry) -> Result<Self> {
        // SAFETY: only the `debug` library is added on top of the safe set.
        // Scripts can use it to inspect their own stack and upvalues; no
        // native code loading (`ffi`) is available on Lua 5.4.
        let lua = unsafe { Lua::unsafe_new_with(StdLib::ALL, LuaOptions::default()) };
        debug!("installing {} native function(s)", natives.len());
        natives.install(&lua)?;
        Ok(Engine { lua })
    }

    /// Run a chunk of Lua code for its side effects.
    pub fn exec(&self, code: &str) -> Result<()> {
        self.lua.load(code).exec()?;
        Ok(())
    }

    /// Evaluate a chunk of Lua code and return its first value.
    ///
    /// Expressions are accepted as well as statement blocks; a block
    /// without `return` evaluates to `nil`.
    pub fn eval(&self, code: &str) -> Result<Value> {
        Ok(self.lua.load(code).eval::<Value>()?)
    }

    /// Load and run a Lua script file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (not found, permission denied)
    /// - The file contains syntax errors
    /// - Running its top-level chunk raises an error
    pub fn eval_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("loading script {}", path.display());

        let code = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.lua
            .load(&code[..])
            .set_name(format!("@{}", path.display()))
            .exec()
            .map_err(|e| Error::Load {
                path: path.to_path_buf(),
                message: script_message(&e),
            })
    }

    /// Get a global value. Undefined globals read as `nil`.
    pub fn get(&self, name: &str) -> Result<Value> {
        Ok(self.lua.globals().get::<Value>(name)?)
    }

    /// Set a global value.
    pub fn set(&self, name: &str, value: impl IntoLua) -> Result<()> {
        self.lua.globals().set(name, value)?;
        Ok(())
    }

    /// Returns true if the global `name` holds a function.
    pub fn is_callable(&self, name: &str) -> Result<bool> {
        Ok(matches!(self.get(name)?, Value::Function(_)))
    }

    /// Call the global function `name` with `args`, expecting one result.
    ///
    /// Extra results are discarded and a missing result reads as `nil`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotCallable`] if `name` is not bound to a function
    /// - [`Error::Call`] if the function raises an error, carrying the
    ///   script's message
    /// - [`Error::ResultType`] if the result cannot be converted to `R`
    ///
    /// # Example
    ///
    /// ```rust
    /// use ponte_embed::{Engine, Error};
    ///
    /// let engine = Engine::new().unwrap();
    /// engine.exec("calculo = 42").unwrap();
    /// let err = engine.call::<f64>("calculo", (1, 2)).unwrap_err();
    /// assert!(matches!(err, Error::NotCallable { .. }));
    /// ```
    pub fn call<R: FromScriptValue>(&self, name: &str, args: impl IntoLuaMulti) -> Result<R> {
        let func = match self.get(name)? {
            Value::Function(func) => func,
            other => return Err(Error::not_callable(name, other.type_name())),
        };

        debug!("calling `{}`", name);
        let result = func
            .call::<Value>(args)
            .map_err(|e| Error::call(name, &e))?;

        let got = result.type_name();
        R::from_script_value(&self.lua, result)
            .ok_or_else(|| Error::result_type(name, R::EXPECTED, got))
    }

    /// Get access to the underlying Lua state.
    ///
    /// This is useful for advanced use cases the Engine API does not cover.
    #[must_use]
    pub fn lua(&self) -> &Lua {
        &self.lua
    }

    /// Release the interpreter.
    pub fn close(self) {
        debug!("closing interpreter");
        drop(self.lua);
    }
}

// Note: Default is intentionally not implemented for Engine because
// installing natives can fail. Call Engine::new() and handle the Result.
