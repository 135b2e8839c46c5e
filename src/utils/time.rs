use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Human readable form used in listings, e.g. `2024-03-05 at 14:07`.
pub fn format_display(dt: DateTime<Utc>) -> String {
    format!("{} at {}", dt.format("%Y-%m-%d"), dt.format("%H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_date_and_minutes() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 59).unwrap();
        assert_eq!(format_display(dt), "2024-03-05 at 14:07");
    }
}
