//! Key/square-value pairs.

/// Pair `k` with the square of `v`.
///
/// `v` may be any numeric type that converts to `f64` without loss
/// (`i8`..`i32`, `u8`..`u32`, `f32`, `f64`); the square is always an `f64`.
pub fn to_kv<V: Into<f64>>(k: &str, v: V) -> (String, f64) {
    let v: f64 = v.into();
    (k.to_string(), v * v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_integers_as_f64() {
        assert_eq!(to_kv("eggs", 3), ("eggs".to_string(), 9.0));
        assert_eq!(to_kv("neg", -4_i16), ("neg".to_string(), 16.0));
        assert_eq!(to_kv("byte", 255_u8), ("byte".to_string(), 65025.0));
    }

    #[test]
    fn squares_floats() {
        assert_eq!(to_kv("school", 0.5), ("school".to_string(), 0.25));
        assert_eq!(to_kv("single", 1.5_f32), ("single".to_string(), 2.25));
    }

    #[test]
    fn keeps_key_verbatim() {
        let (key, _) = to_kv("", 1);
        assert!(key.is_empty());
        let (key, _) = to_kv("ümlaut key", 1);
        assert_eq!(key, "ümlaut key");
    }
}
