//! Golden values for the coordinate and time model.

use yantra_time::{
    CivilTime, Instant, SolarTimeModel, TimeError, day_of_year, local_solar_time, make_coordinate,
};

#[test]
fn coordinate_contract() {
    assert!(matches!(
        make_coordinate(91.0, 0.0, 0.0),
        Err(TimeError::InvalidCoordinate(_))
    ));
    assert!(matches!(
        make_coordinate(0.0, -200.0, 0.0),
        Err(TimeError::InvalidCoordinate(_))
    ));
    let delhi = make_coordinate(28.6139, 77.2090, 216.0).unwrap();
    assert_eq!(delhi.latitude_deg(), 28.6139);
}

#[test]
fn day_of_year_covers_full_range() {
    assert_eq!(day_of_year(2024, 1, 1), 1);
    assert_eq!(day_of_year(2024, 12, 31), 366);
    assert_eq!(day_of_year(2023, 12, 31), 365);
    // Every day in a leap year maps to a distinct ordinal.
    let mut prev = 0;
    for month in 1..=12 {
        let days = yantra_time::days_in_month(2024, month).unwrap();
        for day in 1..=days {
            let n = day_of_year(2024, month, day);
            assert_eq!(n, prev + 1);
            prev = n;
        }
    }
}

#[test]
fn jaipur_morning_hour_angle() {
    // 09:00 IST at Jaipur (75.8243E): UTC 03:30, solar hour 3.5 + 5.0550 = 8.555
    let jaipur = make_coordinate(26.9245, 75.8243, 431.0).unwrap();
    let t = Instant::from_civil(&CivilTime::new(2024, 6, 21, 9, 0, 0.0, 330)).unwrap();
    let lst = local_solar_time(&jaipur, t, SolarTimeModel::Mean);
    assert!((lst.solar_hour - 8.554_953).abs() < 1e-5, "{}", lst.solar_hour);
    assert!((lst.hour_angle_deg - (-51.6757)).abs() < 1e-3, "{}", lst.hour_angle_deg);
    // Civil hour label is still 9.
    assert_eq!(t.civil_hour(), 9);
}

#[test]
fn parsed_instant_matches_constructed() {
    let parsed: CivilTime = "2024-06-21T09:00:00+05:30".parse().unwrap();
    let a = Instant::from_civil(&parsed).unwrap();
    let b = Instant::from_civil(&CivilTime::utc(2024, 6, 21, 3, 30, 0.0)).unwrap();
    assert_eq!(a.utc_seconds(), b.utc_seconds());
}
