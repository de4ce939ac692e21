//! Display formatting shared by the dashboard pages.

use chrono::{DateTime, Utc};
use shared_types::{GeoPoint, RideStatus};
use shared_ui::BadgeVariant;

/// Format a fare or earnings amount with two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

pub fn format_km(km: f64) -> String {
    format!("{km:.1} km")
}

/// "Jan 20, 2026 9:35 PM", or an em dash when the timestamp is missing.
pub fn format_datetime(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(ts) => ts.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => "\u{2014}".to_string(),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Parse a coordinate pair typed into the booking form.
/// Returns `None` for blank, malformed or out-of-range input.
pub fn parse_point(lat: &str, lng: &str) -> Option<GeoPoint> {
    let lat = lat.trim().parse::<f64>().ok()?;
    let lng = lng.trim().parse::<f64>().ok()?;
    let point = GeoPoint::new(lat, lng);
    point.is_valid().then_some(point)
}

pub fn status_variant(status: RideStatus) -> BadgeVariant {
    match status {
        RideStatus::Requested => BadgeVariant::Secondary,
        RideStatus::Accepted => BadgeVariant::Primary,
        RideStatus::PickedUp | RideStatus::InTransit => BadgeVariant::Warning,
        RideStatus::Completed => BadgeVariant::Success,
        RideStatus::Cancelled => BadgeVariant::Destructive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money(12.5), "$12.50");
        assert_eq!(format_money(0.0), "$0.00");
    }

    #[test]
    fn datetime_uses_twelve_hour_clock() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 20, 21, 35, 0).unwrap();
        assert_eq!(format_datetime(Some(ts)), "Jan 20, 2026 9:35 PM");
        assert_eq!(format_datetime(None), "\u{2014}");
    }

    #[test]
    fn parse_point_rejects_bad_input() {
        assert_eq!(
            parse_point(" 23.78 ", "90.40"),
            Some(GeoPoint::new(23.78, 90.40))
        );
        assert_eq!(parse_point("", "90.40"), None);
        assert_eq!(parse_point("abc", "90.40"), None);
        assert_eq!(parse_point("95.0", "90.40"), None);
    }

    #[test]
    fn finished_rides_have_distinct_badges() {
        assert_eq!(status_variant(RideStatus::Completed), BadgeVariant::Success);
        assert_eq!(status_variant(RideStatus::Cancelled), BadgeVariant::Destructive);
    }
}
