// ponte-embed - Error types
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for the embedding boundary.
//!
//! Display text is what the host prints before terminating, so it is kept
//! stable and matches the messages scripts are tested against.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for embedding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading scripts or calling into them.
#[derive(Debug, Error)]
pub enum Error {
    /// The script file could not be read.
    #[error("erro ao ler o script `{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The script failed to compile or raised an error while running its
    /// top-level chunk.
    #[error("erro ao carregar o script `{}': {message}", .path.display())]
    Load { path: PathBuf, message: String },

    /// The named global exists but is not a function, or is absent.
    #[error("`{name}' não é uma função")]
    NotCallable { name: String, got: &'static str },

    /// The script function raised an error while being called.
    #[error("erro ao rotar a função `{name}': {message}")]
    Call { name: String, message: String },

    /// The script function returned a value of the wrong type.
    #[error("função `{name}' precisa retornar {expected}")]
    ResultType {
        name: String,
        expected: &'static str,
        got: &'static str,
    },

    /// Any other interpreter failure (creating functions, touching globals).
    #[error(transparent)]
    Lua(#[from] mlua::Error),
}

impl Error {
    /// Create a not-callable error for `name`.
    pub fn not_callable(name: impl Into<String>, got: &'static str) -> Self {
        Error::NotCallable {
            name: name.into(),
            got,
        }
    }

    /// Create a call error for `name` from the interpreter's error.
    pub fn call(name: impl Into<String>, err: &mlua::Error) -> Self {
        Error::Call {
            name: name.into(),
            message: script_message(err),
        }
    }

    /// Create a result type error for `name`.
    pub fn result_type(name: impl Into<String>, expected: &'static str, got: &'static str) -> Self {
        Error::ResultType {
            name: name.into(),
            expected,
            got,
        }
    }
}

/// Extract the message a script raised, as Lua itself would report it.
///
/// Runtime and syntax errors carry the `chunk:line:` prefix produced by
/// Lua. Tracebacks appended by the call machinery are removed, and errors
/// raised from inside native callbacks are unwrapped to their cause.
pub fn script_message(err: &mlua::Error) -> String {
    match err {
        mlua::Error::RuntimeError(msg) => strip_traceback(msg).to_string(),
        mlua::Error::SyntaxError { message, .. } => strip_traceback(message).to_string(),
        mlua::Error::CallbackError { cause, .. } => script_message(cause),
        other => strip_traceback(&other.to_string()).to_string(),
    }
}

fn strip_traceback(msg: &str) -> &str {
    match msg.find("\nstack traceback:") {
        Some(idx) => &msg[..idx],
        None => msg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_callable_message() {
        let err = Error::not_callable("calculo", "number");
        assert_eq!(err.to_string(), "`calculo' não é uma função");
    }

    #[test]
    fn result_type_message() {
        let err = Error::result_type("calculo", "um número", "string");
        assert_eq!(err.to_string(), "função `calculo' precisa retornar um número");
    }

    #[test]
    fn call_message_drops_traceback() {
        let lua_err = mlua::Error::RuntimeError(
            "script.lua:2: boom\nstack traceback:\n\t[C]: in ?".to_string(),
        );
        let err = Error::call("calculo", &lua_err);
        assert_eq!(
            err.to_string(),
            "erro ao rotar a função `calculo': script.lua:2: boom"
        );
    }

    #[test]
    fn callback_error_unwraps_cause() {
        let cause = mlua::Error::RuntimeError("inner failure".to_string());
        let wrapped = mlua::Error::CallbackError {
            traceback: "stack traceback:".to_string(),
            cause: std::sync::Arc::new(cause),
        };
        assert_eq!(script_message(&wrapped), "inner failure");
    }

    #[test]
    fn io_message_names_path() {
        let err = Error::Io {
            path: PathBuf::from("03-funcao.lua"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "erro ao ler o script `03-funcao.lua': not found"
        );
    }
}
