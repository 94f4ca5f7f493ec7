use super::*;

#[test]
fn clamp_keeps_values_inside_the_range() {
    assert_eq!(clamp_max_results(10, 20), 10);
    assert_eq!(clamp_max_results(3, 20), 3);
    assert_eq!(clamp_max_results(20, 20), 20);
}

#[test]
fn clamp_raises_tiny_requests_to_the_floor() {
    assert_eq!(clamp_max_results(0, 20), MIN_RESULTS);
    assert_eq!(clamp_max_results(1, 20), MIN_RESULTS);
}

#[test]
fn clamp_caps_at_the_configured_ceiling() {
    assert_eq!(clamp_max_results(500, 20), 20);
    assert_eq!(clamp_max_results(51, 50), 50);
}

#[test]
fn clamp_tolerates_a_ceiling_below_the_floor() {
    assert_eq!(clamp_max_results(10, 1), MIN_RESULTS);
}
