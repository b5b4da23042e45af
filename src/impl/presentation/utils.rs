use chrono::{DateTime, NaiveDate, Utc};
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use serde::Serializer;

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format cash amount with leading currency symbol, the currency's number of
/// decimal places and thousands separators (ex. `-$1,234.50`).
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let scale = 10_i64.pow(decimal_places);
    // Rounding in minor units carries into the integer part (0.999 -> 1.00).
    let minor_units = (amount.abs() * scale as f64).round() as i64;
    let sign = if amount < 0.0 && minor_units != 0 { "-" } else { "" };
    let integer_part = (minor_units / scale).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{}{}", sign, currency.symbol(), integer_part)
    } else {
        format!(
            "{}{}{}.{:0width$}",
            sign,
            currency.symbol(),
            integer_part,
            minor_units % scale,
            width = decimal_places as usize,
        )
    }
}

/// Short month and year (`Aug 2025`).
pub(crate) fn period_label(month_start: NaiveDate) -> String {
    month_start.format("%b %Y").to_string()
}

/// Calendar period (`2025-08`).
pub(crate) fn period_string(month_start: NaiveDate) -> String {
    month_start.format("%Y-%m").to_string()
}

/// ISO-8601 UTC with millisecond precision (`2025-08-01T00:00:00.000Z`).
pub(crate) fn serialize_iso_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
}

pub(crate) fn serialize_optional_iso_date<S: Serializer>(
    date: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match date {
        Some(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
        None => serializer.serialize_none(),
    }
}
