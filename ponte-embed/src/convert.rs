// ponte-embed - Call boundary conversions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Conversion of script results into Rust values.
//!
//! [`FromScriptValue`] decides whether a value returned from a script
//! function is acceptable as a given Rust type. Numeric and string checks
//! follow Lua's own coercion rules, so a function returning `"42"` is
//! accepted where a number is expected, exactly as `lua_isnumber` would.
//!
//! | Rust Type | Accepted Lua values | `EXPECTED` |
//! |-----------|---------------------|------------|
//! | `f64` | number, numeric string | `um número` |
//! | `i64` | integer, integral float, integral string | `um inteiro` |
//! | `String` | string, number | `uma string` |
//! | `bool` | boolean | `um booleano` |
//! | `Value` | anything | `um valor` |

use mlua::{Lua, Value};

/// Convert a value returned by a script into a Rust type.
pub trait FromScriptValue: Sized {
    /// Description of the expected value, used in error messages.
    const EXPECTED: &'static str;

    /// Returns `None` if `value` is not acceptable as `Self`.
    fn from_script_value(lua: &Lua, value: Value) -> Option<Self>;
}

impl FromScriptValue for Value {
    const EXPECTED: &'static str = "um valor";

    fn from_script_value(_lua: &Lua, value: Value) -> Option<Self> {
        Some(value)
    }
}

impl FromScriptValue for f64 {
    const EXPECTED: &'static str = "um número";

    fn from_script_value(lua: &Lua, value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(n),
            Value::Integer(i) => Some(i as f64),
            Value::String(_) => lua.coerce_number(value).ok().flatten(),
            _ => None,
        }
    }
}

impl FromScriptValue for i64 {
    const EXPECTED: &'static str = "um inteiro";

    fn from_script_value(lua: &Lua, value: Value) -> Option<Self> {
        match value {
            Value::Integer(i) => Some(i),
            Value::Number(_) | Value::String(_) => lua.coerce_integer(value).ok().flatten(),
            _ => None,
        }
    }
}

impl FromScriptValue for String {
    const EXPECTED: &'static str = "uma string";

    fn from_script_value(lua: &Lua, value: Value) -> Option<Self> {
        match value {
            Value::String(_) | Value::Integer(_) | Value::Number(_) => {
                let s = lua.coerce_string(value).ok().flatten()?;
                s.to_str().ok().map(|s| s.to_string())
            }
            _ => None,
        }
    }
}

impl FromScriptValue for bool {
    const EXPECTED: &'static str = "um booleano";

    fn from_script_value(_lua: &Lua, value: Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lua_str(lua: &Lua, s: &str) -> Value {
        Value::String(lua.create_string(s).unwrap())
    }

    #[test]
    fn number_accepts_integers_and_numeric_strings() {
        let lua = Lua::new();
        assert_eq!(f64::from_script_value(&lua, Value::Integer(7)), Some(7.0));
        assert_eq!(f64::from_script_value(&lua, Value::Number(2.5)), Some(2.5));
        assert_eq!(f64::from_script_value(&lua, lua_str(&lua, "10")), Some(10.0));
    }

    #[test]
    fn number_rejects_non_numeric() {
        let lua = Lua::new();
        assert_eq!(f64::from_script_value(&lua, lua_str(&lua, "abc")), None);
        assert_eq!(f64::from_script_value(&lua, Value::Nil), None);
        assert_eq!(f64::from_script_value(&lua, Value::Boolean(true)), None);
    }

    #[test]
    fn integer_rejects_fractional() {
        let lua = Lua::new();
        assert_eq!(i64::from_script_value(&lua, Value::Number(3.0)), Some(3));
        assert_eq!(i64::from_script_value(&lua, Value::Number(3.5)), None);
    }

    #[test]
    fn string_accepts_numbers() {
        let lua = Lua::new();
        assert_eq!(
            String::from_script_value(&lua, Value::Integer(5)),
            Some("5".to_string())
        );
        assert_eq!(String::from_script_value(&lua, Value::Nil), None);
    }

    #[test]
    fn bool_is_strict() {
        let lua = Lua::new();
        assert_eq!(bool::from_script_value(&lua, Value::Boolean(false)), Some(false));
        assert_eq!(bool::from_script_value(&lua, Value::Integer(0)), None);
    }
}
