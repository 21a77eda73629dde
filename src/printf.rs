// ponte - Number formatting for program output
// Copyright (c) 2025 Tom Waddington. MIT licensed.

/// Format `x` the way C's `printf("%f")` does: six decimals for finite
/// values, `inf`/`-inf` and `nan`/`-nan` otherwise.
pub fn fixed(x: f64) -> String {
    let sign = if x.is_sign_negative() { "-" } else { "" };
    if x.is_nan() {
        format!("{}nan", sign)
    } else if x.is_infinite() {
        format!("{}inf", sign)
    } else {
        format!("{:.6}", x)
    }
}
