//! Numeric helpers shared by the value model and the rule matchers.

/// Maximum absolute difference between two reals that still compare equal.
///
/// The bound is inclusive: `|a - b| <= REAL_EQUALITY_TOLERANCE` matches.
pub const REAL_EQUALITY_TOLERANCE: f64 = 1e-5;

/// Relative tolerance used when comparing quantities after unit conversion.
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Compares two reals by their signed difference against [`REAL_EQUALITY_TOLERANCE`].
pub fn approximately_equals(a: f64, b: f64) -> bool {
    (a - b).abs() <= REAL_EQUALITY_TOLERANCE
}

/// Compares two reals relative to the larger magnitude, never tighter than
/// [`RELATIVE_TOLERANCE`] in absolute terms.
pub fn relatively_equals(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= RELATIVE_TOLERANCE * scale
}

/// Greatest common divisor. `gcd(0, 0)` is 0.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
