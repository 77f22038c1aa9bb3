use super::*;

#[test]
fn formats_minutes_and_padded_seconds() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(59.0), "0:59");
    assert_eq!(format_time(60.0), "1:00");
    assert_eq!(format_time(75.0), "1:15");
    assert_eq!(format_time(3661.0), "61:01");
}

#[test]
fn fractional_seconds_floor() {
    assert_eq!(format_time(59.99), "0:59");
    assert_eq!(format_time(0.4), "0:00");
}

#[test]
fn degenerate_inputs_render_zero() {
    assert_eq!(format_time(-3.0), "0:00");
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(f64::INFINITY), "0:00");
}

#[test]
fn progress_uses_placeholder_for_unknown_duration() {
    assert_eq!(format_progress(30.0, Some(120.0)), "0:30 / 2:00");
    assert_eq!(format_progress(5.0, None), "0:05 / 0:00");
}
