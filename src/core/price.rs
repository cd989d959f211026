// src/core/price.rs
// Best-effort price text normalization.
// Handles "$1,299.99" (US) and "1.299,99 €" (EU) style strings; ambiguous
// inputs are resolved by heuristics and may be wrong-but-plausible.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Turn raw price text into a decimal, or `None` if nothing usable is left.
///
/// Separator rules, applied to the text after dropping everything that is
/// not a digit, `,` or `.`:
/// - both `,` and `.` present: whichever occurs last is the decimal point,
///   the other one is a thousands separator;
/// - only `,`: decimal if exactly two characters follow the last one
///   (`"19,99"`), thousands otherwise (`"1,234"` → 1234). Every comma becomes
///   a point in the decimal case, so `"1,234,56"` does not parse;
/// - only `.`: a single dot is the decimal point; with several dots the last
///   one is decimal only when followed by exactly two characters
///   (`"1.234.56"`), otherwise they are all thousands (`"1.234.567"`).
pub fn normalize_price(text: &str) -> Option<Decimal> {
    let t: String = text
        .chars()
        .filter_map(|c| match c {
            ',' | '.' => Some(c),
            _ => decimal_digit(c),
        })
        .collect();
    if t.is_empty() {
        return None;
    }

    let last_comma = t.rfind(',');
    let last_dot = t.rfind('.');

    let canonical = match (last_comma, last_dot) {
        (Some(c), Some(d)) if c > d => t.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => t.replace(',', ""),
        (Some(c), None) => {
            if t[c + 1..].len() == 2 {
                t.replace(',', ".")
            } else {
                t.replace(',', "")
            }
        }
        (None, Some(d)) => {
            let dots = t.matches('.').count();
            if dots < 2 {
                t
            } else if t[d + 1..].len() == 2 {
                join_decimal(&t[..d], &t[d + 1..])
            } else {
                t.replace('.', "")
            }
        }
        (None, None) => t,
    };

    parse_decimal(&canonical)
}

/// `int_part` with its thousands dots dropped, then `.` and the fraction.
fn join_decimal(int_part: &str, frac: &str) -> String {
    let mut out = int_part.replace('.', "");
    out.push('.');
    out.push_str(frac);
    out
}

/// Zero code points of the decimal digit runs seen on shop pages
/// (Arabic-Indic, Persian, Devanagari, Bengali, Thai, full-width and friends).
const DIGIT_ZEROS: [u32; 19] = [
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x17E0, 0x1810, 0xFF10,
];

/// ASCII form of a decimal digit from any of the runs above.
fn decimal_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    let cp = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&cp))
        .and_then(|zero| char::from_digit(cp - zero, 10))
}

/// Parse a canonical "digits[.digits]" string. Tolerates a bare leading or
/// trailing point ("5." / ".5"); anything else malformed is `None`.
fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.strip_suffix('.').unwrap_or(s);
    if s.is_empty() || s.matches('.').count() > 1 {
        return None;
    }
    let owned;
    let s = if s.starts_with('.') {
        owned = format!("0{s}");
        owned.as_str()
    } else {
        s
    };
    Decimal::from_str(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn us_format_with_currency() {
        assert_eq!(normalize_price("$1,299.99"), Some(dec("1299.99")));
    }

    #[test]
    fn eu_format() {
        assert_eq!(normalize_price("1.299,99"), Some(dec("1299.99")));
        assert_eq!(normalize_price("1.299,99 €"), Some(dec("1299.99")));
    }

    #[test]
    fn three_digit_comma_tail_is_thousands() {
        // Ambiguous on purpose: could be 1.234 in some locales.
        assert_eq!(normalize_price("1,234"), Some(dec("1234")));
    }

    #[test]
    fn two_digit_comma_tail_is_decimal() {
        assert_eq!(normalize_price("19,99"), Some(dec("19.99")));
        // every comma turns into a point: "1.234.56" is not a number
        assert_eq!(normalize_price("1,234,56"), None);
    }

    #[test]
    fn nothing_to_parse() {
        assert_eq!(normalize_price(""), None);
        assert_eq!(normalize_price("€"), None);
        assert_eq!(normalize_price("Currently unavailable."), None);
        assert_eq!(normalize_price(","), None);
        assert_eq!(normalize_price("."), None);
        assert_eq!(normalize_price("$ ,"), None);
    }

    #[test]
    fn dots_only() {
        assert_eq!(normalize_price("1.234.567"), Some(dec("1234567")));
        assert_eq!(normalize_price("1.234.56"), Some(dec("1234.56")));
        assert_eq!(normalize_price("12.99"), Some(dec("12.99")));
        assert_eq!(normalize_price("1.234"), Some(dec("1.234")));
    }

    #[test]
    fn digits_only() {
        assert_eq!(normalize_price("USD 42"), Some(dec("42")));
    }

    #[test]
    fn dangling_separators() {
        assert_eq!(normalize_price("5."), Some(dec("5")));
        assert_eq!(normalize_price(".50"), Some(dec("0.50")));
        assert_eq!(normalize_price("12,"), Some(dec("12")));
    }

    #[test]
    fn conflicting_separators_fail_instead_of_panicking() {
        // dot last → commas dropped, but two dots remain
        assert_eq!(normalize_price("1,2.3.4"), None);
    }

    #[test]
    fn output_is_a_fixed_point() {
        for raw in ["$1,299.99", "1.299,99", "1,234", "19,99", "1.234.567", "0.05", "7"] {
            let first = normalize_price(raw).unwrap();
            assert_eq!(normalize_price(&first.to_string()), Some(first), "input {raw}");
        }
    }

    #[test]
    fn non_ascii_decimal_digits() {
        assert_eq!(normalize_price("١٢٣"), Some(dec("123")));
        assert_eq!(normalize_price("１２８０円"), Some(dec("1280")));
        assert_eq!(normalize_price("₹ १,२९९.५०"), Some(dec("1299.50")));
        // superscripts and fractions are not decimal digits
        assert_eq!(normalize_price("²½"), None);
    }

    #[test]
    fn never_negative() {
        assert_eq!(normalize_price("-5.00"), Some(dec("5.00")));
    }
}
