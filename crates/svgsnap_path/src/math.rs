/// Rounds to the given number of decimal places, with halves going to the even neighbour
///
/// Values too large to scale have no fraction left to round and are returned as they are.
pub fn to_fixed(data: f64, precision: i32) -> f64 {
    let pow = 10.0_f64.powi(precision);
    let scaled = data * pow;
    if !scaled.is_finite() {
        return data;
    }
    scaled.round_ties_even() / pow
}

#[test]
fn to_fixed_rounding() {
    assert_eq!(to_fixed(0.1 + 0.2, 6), 0.3);
    assert_eq!(to_fixed(1.000_000_4, 6), 1.0);
    assert_eq!(to_fixed(1.000_000_6, 6), 1.000_001);
    assert_eq!(to_fixed(2.5, 0), 2.0);
    assert_eq!(to_fixed(-3.5, 0), -4.0);
    assert_eq!(to_fixed(1e303, 6), 1e303);
    assert_eq!(to_fixed(-f64::MAX, 6), -f64::MAX);
}
