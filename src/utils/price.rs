/// Formats a price as whole US dollars, e.g. `$1,235`.
///
/// Non-finite values render as `$0.00` so a bad input never reaches the
/// storefront unformatted.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "$0.00".to_string();
    }

    let rounded = price.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = (rounded.abs() as i64).to_string();

    format!("{sign}${}", group_thousands(&digits))
}

/// Formats a price with cents, e.g. `$1,234.56`.
pub fn format_price_with_decimals(price: f64) -> String {
    if !price.is_finite() {
        return "$0.00".to_string();
    }

    let sign = if price < 0.0 { "-" } else { "" };
    let cents = (price.abs() * 100.0).round() as i64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    format!("{sign}${}.{fraction:02}", group_thousands(&whole))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
