use chrono::{DateTime, Utc};

/// Format a monetary amount as a whole-rupee figure with thousands
/// separators, e.g. `Rs. 1,250`. Fractions are rounded; totals are shown as
/// whole currency throughout the UI.
pub fn format_currency(amount: f64) -> String {
    let whole = amount.round() as i64;
    let sign = if whole < 0 { "-" } else { "" };
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("Rs. {sign}{grouped}")
}

pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn currency_is_whole_rupees_with_separators() {
        assert_eq!(format_currency(200.0), "Rs. 200");
        assert_eq!(format_currency(1250.0), "Rs. 1,250");
        assert_eq!(format_currency(1_000_000.0), "Rs. 1,000,000");
    }

    #[test]
    fn currency_rounds_fractions() {
        assert_eq!(format_currency(249.6), "Rs. 250");
        assert_eq!(format_currency(249.4), "Rs. 249");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_the_grouping() {
        assert_eq!(format_currency(-1250.0), "Rs. -1,250");
    }

    #[test]
    fn date_is_minute_precision() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 59).unwrap();
        assert_eq!(format_date(&ts), "2024-03-05 14:30");
    }
}
