use profitrider::errors::AppError;
use profitrider::{ClockTime, compute_duration, normalize_time};

fn norm(raw: &str) -> String {
    normalize_time(raw)
        .expect("valid time")
        .expect("non-empty time")
        .to_string()
}

fn t(raw: &str) -> ClockTime {
    raw.parse().expect("valid time")
}

#[test]
fn test_24h_input_is_zero_padded() {
    assert_eq!(norm("18:30"), "18:30");
    assert_eq!(norm("6:05"), "06:05");
    assert_eq!(norm("00:00"), "00:00");
    assert_eq!(norm("23:59"), "23:59");
    assert_eq!(norm("  7:45  "), "07:45");
}

#[test]
fn test_12h_input_converts_to_24h() {
    assert_eq!(norm("6:00 PM"), "18:00");
    assert_eq!(norm("06:00 pm"), "18:00");
    assert_eq!(norm("6:00pm"), "18:00");
    assert_eq!(norm("11:15 AM"), "11:15");
    assert_eq!(norm("12:00 PM"), "12:00");
    assert_eq!(norm("12:30 AM"), "00:30");
    assert_eq!(norm("12:05am"), "00:05");
    assert_eq!(norm("12:00 AM"), "00:00");
    assert_eq!(norm("1:05 pm"), "13:05");
    assert_eq!(norm("11:59 PM"), "23:59");
}

#[test]
fn test_normalizing_twice_gives_same_value() {
    for raw in ["6:00 PM", "12:30am", "9:07", "23:00"] {
        let once = norm(raw);
        assert_eq!(norm(&once), once);
    }
}

#[test]
fn test_empty_input_is_none() {
    assert!(normalize_time("").expect("empty ok").is_none());
    assert!(normalize_time("   ").expect("blank ok").is_none());
}

#[test]
fn test_invalid_input_is_rejected() {
    for raw in ["24:00", "12:60", "13:00 PM", "0:30 AM", "18", "6pm", "6:5 PM", "18:30:00", "abc"] {
        match normalize_time(raw) {
            Err(AppError::InvalidTimeFormat(v)) => assert_eq!(v, raw.trim()),
            other => panic!("expected InvalidTimeFormat for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_from_str_rejects_empty() {
    assert!("".parse::<ClockTime>().is_err());
}

#[test]
fn test_duration_same_day() {
    assert_eq!(compute_duration(t("18:00"), t("22:00")), 4.0);
    assert_eq!(compute_duration(t("09:15"), t("11:45")), 2.5);
}

#[test]
fn test_duration_crosses_midnight() {
    assert_eq!(compute_duration(t("22:00"), t("02:00")), 4.0);
    assert_eq!(compute_duration(t("10:00 PM"), t("6:30 AM")), 8.5);
    assert_eq!(compute_duration(t("11:30 PM"), t("12:00 AM")), 0.5);
}

#[test]
fn test_duration_equal_times_is_zero() {
    assert_eq!(compute_duration(t("18:00"), t("18:00")), 0.0);
}

#[test]
fn test_duration_stays_within_one_day() {
    for (s, e) in [("00:00", "23:59"), ("23:59", "00:00"), ("12:00", "11:59")] {
        let h = compute_duration(t(s), t(e));
        assert!((0.0..24.0).contains(&h), "{s}-{e} gave {h}");
    }
}
