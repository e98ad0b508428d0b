//! Plain-number formatting in the en-US style the dashboard uses.
//!
//! - [`format_number`]: thousands separators, fixed fractional digits.
//! - [`format_currency`]: fiat amounts with a currency symbol.
//! - [`format_compact`]: short-scale suffixes (`K`, `M`, `B`, `T`) with two
//!   significant digits below ten and whole numbers above.
//!
//! Fractional rounding follows Rust's float formatting, which resolves
//! exact binary ties to even. Real inputs almost never hit an exact tie.

/// Short-scale tiers, smallest first.
const COMPACT_TIERS: [(f64, &str); 5] = [
    (1.0, ""),
    (1e3, "K"),
    (1e6, "M"),
    (1e9, "B"),
    (1e12, "T"),
];

/// Inserts `,` every three digits from the right of an integer string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "∞" } else { "-∞" }.to_string())
    } else {
        None
    }
}

/// Formats `value` with grouped thousands and exactly `decimals` fraction
/// digits: `1234.5` → `"1,234.50"`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if let Some(s) = non_finite(value) {
        return s;
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let sign = if value < 0.0 { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, group_thousands(whole))
    } else {
        format!("{}{}.{}", sign, group_thousands(whole), frac)
    }
}

fn trim_fraction(s: String) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Formats a fiat amount en-US style: `1234.5, "USD"` → `"$1,234.50"`.
///
/// Dollar, euro, pound and yen get their symbol (yen has no minor unit).
/// Any other ISO code is written out in front of the amount.
pub fn format_currency(value: f64, currency: &str) -> String {
    if let Some(s) = non_finite(value) {
        return s;
    }
    let code = currency.trim().to_ascii_uppercase();
    let (symbol, decimals) = match code.as_str() {
        "USD" => ("$".to_string(), 2),
        "EUR" => ("€".to_string(), 2),
        "GBP" => ("£".to_string(), 2),
        "JPY" => ("¥".to_string(), 0),
        _ => (format!("{code}\u{a0}"), 2),
    };
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, format_number(value.abs(), decimals))
}

/// Whole numbers from 10 up, two significant digits below that.
fn compact_digits(scaled: f64) -> String {
    if scaled >= 10.0 {
        return format!("{:.0}", scaled);
    }
    if scaled == 0.0 {
        return "0".to_string();
    }
    let magnitude = scaled.log10().floor() as i32;
    let decimals = (1 - magnitude).max(0) as usize;
    trim_fraction(format!("{:.*}", decimals, scaled))
}

/// Compact short-scale rendering: `1234` → `"1.2K"`, `12_345` → `"12K"`,
/// `1_500_000` → `"1.5M"`.
///
/// Values that round up to the next tier are promoted, so `999_999`
/// becomes `"1M"` rather than `"1000K"`.
pub fn format_compact(value: f64) -> String {
    if let Some(s) = non_finite(value) {
        return s;
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    let mut tier = COMPACT_TIERS
        .iter()
        .rposition(|(threshold, _)| abs >= *threshold)
        .unwrap_or(0);
    loop {
        let (divisor, suffix) = COMPACT_TIERS[tier];
        let digits = compact_digits(abs / divisor);
        let promoted = tier + 1 < COMPACT_TIERS.len()
            && digits.parse::<f64>().map_or(false, |d| d >= 1000.0);
        if promoted {
            tier += 1;
            continue;
        }
        return format!("{}{}{}", sign, digits, suffix);
    }
}
