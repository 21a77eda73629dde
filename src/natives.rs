// ponte - Native functions exposed to the script
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use ponte_embed::NativeRegistry;

use crate::printf::fixed;

/// Global name under which [`soma_10`] is visible to scripts.
pub const SOMA_10: &str = "funcao_c_soma_10";

/// Constant added by [`soma_10`].
pub const INCREMENT: f64 = 10.0;

/// Adds [`INCREMENT`] to `x`.
pub fn soma_10(x: f64) -> f64 {
    x + INCREMENT
}

/// Natives installed into every engine the host creates.
pub fn registry() -> NativeRegistry {
    let mut natives = NativeRegistry::new();
    natives.register(SOMA_10, |x: f64| {
        println!("Valor no topo da pilha {}", fixed(x));
        Ok(soma_10(x))
    });
    natives
}
