use super::*;

#[test]
fn endpoints_are_fixed() {
    let e = Ease::FastOutSlowIn;
    assert!(e.apply(0.0).abs() < 1e-9);
    assert!((e.apply(1.0) - 1.0).abs() < 1e-9);
}

#[test]
fn input_is_clamped() {
    let e = Ease::FastOutSlowIn;
    assert_eq!(e.apply(-3.0), e.apply(0.0));
    assert_eq!(e.apply(7.0), e.apply(1.0));
}

#[test]
fn curve_is_monotonic() {
    let e = Ease::FastOutSlowIn;
    let mut prev = e.apply(0.0);
    for i in 1..=100 {
        let v = e.apply(f64::from(i) / 100.0);
        assert!(v + 1e-9 >= prev, "at {i}");
        prev = v;
    }
}

#[test]
fn fast_out_slow_in_leads_linear_past_midpoint() {
    let v = Ease::FastOutSlowIn.apply(0.5);
    assert!(v > 0.7 && v < 0.85, "got {v}");
    assert!(Ease::FastOutSlowIn.apply(0.1) < 0.1);
}

#[test]
fn serializes_as_snake_case() {
    let json = serde_json::to_string(&Ease::FastOutSlowIn).unwrap();
    assert_eq!(json, "\"fast_out_slow_in\"");
}
