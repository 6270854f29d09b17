// File: crates/accrue-core/src/format.rs
// Summary: Number formatting with grouped thousands (tick labels and currency label).

/// Insert `,` every three digits of an unsigned integer string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fixed-point formatting with grouped thousands, e.g. `1,234.50`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int, frac) = match fixed.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (fixed.as_str(), None),
    };
    // no "-0" after rounding
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int));
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Grouped, at most three fraction digits, trailing zeros dropped
/// (en-US `toLocaleString` style).
pub fn format_locale(value: f64) -> String {
    let mut s = format_grouped(value, 3);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

/// Currency label text: `prefix` followed by the grouped value.
pub fn format_currency(prefix: &str, value: f64) -> String {
    format!("{prefix}{}", format_locale(value))
}

/// Value tick label; precision follows the tick step.
pub fn format_tick(value: f64, step: f64) -> String {
    format_grouped(value, precision_for_step(step))
}

/// Fraction digits needed to tell ticks `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_sign_positive() {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_every_three_digits() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("123456"), "123,456");
    }

    #[test]
    fn locale_trims_fraction() {
        assert_eq!(format_locale(120.0), "120");
        assert_eq!(format_locale(1234.5), "1,234.5");
        assert_eq!(format_locale(0.12345), "0.123");
        assert_eq!(format_locale(-98765.4321), "-98,765.432");
    }

    #[test]
    fn currency_uses_prefix() {
        assert_eq!(format_currency("NT$ ", 1_500_000.0), "NT$ 1,500,000");
    }

    #[test]
    fn rounding_to_zero_drops_sign() {
        assert_eq!(format_grouped(-0.0001, 2), "0.00");
    }

    #[test]
    fn tick_precision_tracks_step() {
        assert_eq!(format_tick(1500.0, 500.0), "1,500");
        assert_eq!(format_tick(0.4, 0.2), "0.4");
        assert_eq!(format_tick(1.25, 0.05), "1.25");
    }
}
