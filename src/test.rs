/// Check for equality between two components allowing for rounding errors in
/// the last decimal place.
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!(
            $actual as $crate::Component,
            $expected as $crate::Component,
            epsilon = 1.0e-3
        );
    }};
}
