use chrono::NaiveDate;
use profitrider::core::calculator::summary::{SummaryPeriod, build_summary};
use profitrider::models::profile::{CourierProfile, RentFrequency};
use profitrider::models::session::Session;
use profitrider::{ClockTime, SessionDraft};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn session(id: i64, date: NaiveDate, start: &str, gross: f64, fee: f64) -> Session {
    let mut draft = SessionDraft::new(
        date,
        start.parse::<ClockTime>().expect("start"),
        "22:00".parse::<ClockTime>().expect("end"),
    );
    draft.platform_id = Some(1);
    draft.total_orders = Some(4);
    draft.total_distance_km = 10.0;
    draft.gross_earnings = gross;
    draft.fuel_cost = 5.0;

    Session {
        id,
        draft,
        platform_name: "Glovo".into(),
        platform_fee: fee,
        created_at: "2025-09-01 22:00:00".into(),
    }
}

#[test]
fn test_period_bounds() {
    // 2025-09-04 is a Thursday
    let thu = day(2025, 9, 4);
    assert_eq!(SummaryPeriod::Today.bounds(thu), (thu, thu));
    assert_eq!(SummaryPeriod::Week.bounds(thu), (day(2025, 9, 1), thu));
    assert_eq!(SummaryPeriod::Month.bounds(thu), (day(2025, 9, 1), thu));

    let sun = day(2025, 9, 7);
    assert_eq!(SummaryPeriod::Week.bounds(sun).0, day(2025, 9, 1));
    assert_eq!(SummaryPeriod::Month.bounds(day(2025, 10, 1)).0, day(2025, 10, 1));
}

#[test]
fn test_period_codes() {
    assert_eq!(SummaryPeriod::from_code("WEEK"), Some(SummaryPeriod::Week));
    assert_eq!(SummaryPeriod::from_code("today"), Some(SummaryPeriod::Today));
    assert_eq!(SummaryPeriod::from_code("year"), None);
}

#[test]
fn test_totals_with_fees_and_rent() {
    let profile = CourierProfile {
        rent_amount: 70.0,
        rent_frequency: RentFrequency::Weekly,
        ..CourierProfile::default()
    };

    let sessions = vec![
        session(1, day(2025, 9, 1), "18:00", 60.0, 6.0),
        session(2, day(2025, 9, 1), "20:00", 40.0, 4.0),
        session(3, day(2025, 9, 2), "18:00", 50.0, 0.0),
        // outside the range
        session(4, day(2025, 8, 31), "18:00", 999.0, 0.0),
    ];

    let s = build_summary(&sessions, &profile, day(2025, 9, 1), day(2025, 9, 3), 5);

    assert_eq!(s.session_count, 3);
    assert_eq!(s.active_days, 2);
    assert_eq!(s.total_orders, 12);
    assert_eq!(s.total_earnings, 150.0);
    assert_eq!(s.estimated_costs, 15.0);
    assert_eq!(s.platform_fees, 10.0);
    assert!((s.rent - 20.0).abs() < 1e-9);
    assert!((s.total_costs - 45.0).abs() < 1e-9);
    assert!((s.total_net_profit - 105.0).abs() < 1e-9);

    // 4h + 2h + 4h
    assert!((s.total_hours - 10.0).abs() < 1e-9);
    assert!((s.avg_profit_per_hour - 10.5).abs() < 1e-9);
    assert!((s.profit_per_km - 3.5).abs() < 1e-9);
    assert!((s.profit_per_order - 8.75).abs() < 1e-9);

    assert_eq!(s.chart.len(), 2);
    assert_eq!(s.chart[0].date, day(2025, 9, 1));
    assert!((s.chart[0].costs - 30.0).abs() < 1e-9);
    assert!((s.chart[0].profit - 70.0).abs() < 1e-9);
}

#[test]
fn test_recent_sessions_newest_first_and_limited() {
    let profile = CourierProfile::default();
    let sessions = vec![
        session(1, day(2025, 9, 1), "18:00", 10.0, 0.0),
        session(2, day(2025, 9, 3), "18:00", 10.0, 0.0),
        session(3, day(2025, 9, 3), "20:00", 10.0, 0.0),
        session(4, day(2025, 9, 2), "18:00", 10.0, 0.0),
    ];

    let s = build_summary(&sessions, &profile, day(2025, 9, 1), day(2025, 9, 7), 3);
    let ids: Vec<i64> = s.recent.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 2, 4]);
    assert_eq!(s.session_count, 4);
}

#[test]
fn test_empty_period_is_all_zero() {
    let profile = CourierProfile {
        rent_amount: 20.0,
        ..CourierProfile::default()
    };
    let s = build_summary(&[], &profile, day(2025, 9, 1), day(2025, 9, 7), 5);

    assert_eq!(s.session_count, 0);
    assert_eq!(s.rent, 0.0);
    assert_eq!(s.total_net_profit, 0.0);
    assert_eq!(s.avg_profit_per_hour, 0.0);
    assert_eq!(s.profit_per_order, 0.0);
    assert!(s.chart.is_empty());
}
