// ponte - Calls from the host into the script
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use ponte_embed::{Engine, Result};

/// Name of the script function the host calls.
pub const CALCULO: &str = "calculo";

/// Call the script's `calculo(x, y)` and return its numeric result.
///
/// Fails if `calculo` is not a function, raises an error, or returns
/// something that is not a number. Nothing is left behind in the engine
/// on either path.
pub fn chamar_calculo(engine: &Engine, x: f64, y: f64) -> Result<f64> {
    engine.call::<f64>(CALCULO, (x, y))
}
