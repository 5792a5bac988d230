//! Multiplier closures.

/// Build a function that multiplies its argument by `multiplier`.
///
/// The multiplier is copied into the closure when it is created, so each
/// returned function is independent of the caller's variables and of every
/// other returned function.
pub fn make_multiplier(multiplier: f64) -> impl Fn(f64) -> f64 {
    move |value| multiplier * value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_by_captured_value() {
        let double = make_multiplier(2.0);
        assert_eq!(double(3.0), 6.0);
        assert_eq!(double(-1.5), -3.0);
    }

    #[test]
    fn instances_are_independent() {
        let double = make_multiplier(2.0);
        let triple = make_multiplier(3.0);
        assert_eq!(double(10.0), 20.0);
        assert_eq!(triple(10.0), 30.0);
        assert_eq!(double(10.0), 20.0);
    }

    #[test]
    fn later_changes_to_source_do_not_leak() {
        let mut factor = 2.22;
        let scaled = make_multiplier(factor);
        factor = 100.0;
        assert_eq!(factor, 100.0);
        assert_eq!(scaled(1.0), 2.22);
    }

    #[test]
    fn usable_as_boxed_callable() {
        let fns: Vec<Box<dyn Fn(f64) -> f64>> = vec![
            Box::new(make_multiplier(0.5)),
            Box::new(make_multiplier(4.0)),
        ];
        let results: Vec<f64> = fns.iter().map(|f| f(8.0)).collect();
        assert_eq!(results, vec![4.0, 32.0]);
    }
}
