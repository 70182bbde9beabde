use chrono::{DateTime, Local, Utc};

/// Group digits in thousands: 1234567 -> "1,234,567"
pub fn fmt_points(points: u64) -> String {
    let digits = points.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}

/// Server timestamps are shown in local time
pub fn fmt_updated_at(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(fmt_points(0), "0");
        assert_eq!(fmt_points(999), "999");
        assert_eq!(fmt_points(1000), "1,000");
        assert_eq!(fmt_points(1234567), "1,234,567");
    }
}
