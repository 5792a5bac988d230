/// Largest integral value not greater than `n`, as an `f64`.
///
/// NaN and infinities are returned unchanged.
pub fn floor(n: f64) -> f64 {
    n.floor()
}
