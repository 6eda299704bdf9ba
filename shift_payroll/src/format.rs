//! Currency and number-input formatting in the Vietnamese convention:
//! `.` groups thousands and amounts are shown in whole dong.

use crate::engine::round_currency;

/// Currency suffix, separated from the amount by a non-breaking space.
pub const CURRENCY_SUFFIX: &str = "\u{a0}₫";

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Formats an amount as whole dong, e.g. `230.769 ₫`.
pub fn format_currency(amount: f64) -> String {
    let rounded = round_currency(amount);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}{}{}", sign, group_thousands(&digits), CURRENCY_SUFFIX)
}

/// Keeps only the digits of `text` and groups them in thousands, as the
/// allowance and salary inputs display them while typing.
pub fn format_input_number(text: &str) -> String {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    group_thousands(&digits)
}

/// Parses a grouped number input.  Separators are dropped and the
/// leading integer is read; anything unparsable is 0.
pub fn parse_input_number(text: &str) -> i64 {
    let clean: String = text.chars().filter(|c| *c != '.').collect();
    let clean = clean.trim_start();
    let (negative, rest) = match clean.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, clean.strip_prefix('+').unwrap_or(clean)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    match rest[..end].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}
