use chrono::NaiveDate;

use crate::error::DashboardError;

/// Render an ISO date as "Nov 15, 2025", passing anything unparseable through
pub fn display_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Parse a display amount such as "$2,500" into whole dollars
pub fn parse_currency(amount: &str) -> Result<u64, DashboardError> {
    let digits: String = amount
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    digits
        .parse::<u64>()
        .map_err(|_| DashboardError::InvalidAmount(amount.to_string()))
}

/// "$12.4K"
pub fn compact_currency(amount: u64) -> String {
    format!("${:.1}K", amount as f64 / 1000.0)
}

/// "$94,300"
pub fn whole_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

/// Guess a site address from the business name when none is on record
pub fn derive_website_url(business_name: &str) -> String {
    let slug: String = business_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    format!("https://www.{}.com", slug)
}

/// Length of a bar for `value` scaled so that `max` fills `width`
pub fn bar_width(value: u64, max: u64, width: u16) -> u16 {
    if max == 0 {
        return 0;
    }
    let scaled = (value.min(max) as u128 * width as u128) / max as u128;
    scaled as u16
}

pub fn average(values: &[u64]) -> u64 {
    if values.is_empty() {
        return 0;
    }
    values.iter().sum::<u64>() / values.len() as u64
}

/// Parse "#rrggbb" into its channels
pub fn hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_short_month() {
        assert_eq!(display_date("2025-11-15"), "Nov 15, 2025");
        assert_eq!(display_date("2026-01-05"), "Jan 5, 2026");
    }

    #[test]
    fn bad_dates_pass_through() {
        assert_eq!(display_date("November 2025"), "November 2025");
        assert_eq!(display_date(""), "");
    }

    #[test]
    fn currency_strings_parse() {
        assert_eq!(parse_currency("$2,500"), Ok(2500));
        assert_eq!(parse_currency("$149"), Ok(149));
        assert_eq!(
            parse_currency("TBD"),
            Err(DashboardError::InvalidAmount("TBD".to_string()))
        );
    }

    #[test]
    fn currency_formats() {
        assert_eq!(compact_currency(12400), "$12.4K");
        assert_eq!(compact_currency(15683), "$15.7K");
        assert_eq!(whole_currency(94300), "$94,300");
        assert_eq!(whole_currency(358), "$358");
        assert_eq!(whole_currency(1234567), "$1,234,567");
    }

    #[test]
    fn website_url_strips_punctuation() {
        assert_eq!(
            derive_website_url("Elite Electric Co."),
            "https://www.eliteelectricco.com"
        );
        assert_eq!(
            derive_website_url("Mike's Plumbing Services"),
            "https://www.mikesplumbingservices.com"
        );
    }

    #[test]
    fn bars_scale_to_width() {
        assert_eq!(bar_width(18200, 18200, 40), 40);
        assert_eq!(bar_width(9100, 18200, 40), 20);
        assert_eq!(bar_width(99999, 18200, 40), 40);
        assert_eq!(bar_width(10, 0, 40), 0);
    }

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(average(&[]), 0);
        assert_eq!(average(&[10, 20, 30]), 20);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(hex_color("#2563eb"), Some((0x25, 0x63, 0xeb)));
        assert_eq!(hex_color("2563eb"), None);
        assert_eq!(hex_color("#25g3eb"), None);
        assert_eq!(hex_color("#fff"), None);
        // from_str_radix alone would take a sign per channel
        assert_eq!(hex_color("#+1+2+3"), None);
    }
}
