//! Number formatting for the visitor counter.

/// Format with `,` thousands separators and up to three fraction digits,
/// matching what `Number.prototype.toLocaleString("en-US")` shows.
///
/// # Examples
///
/// ```
/// use contracts::shared::number_format::format_grouped;
/// assert_eq!(format_grouped(1234567.0), "1,234,567");
/// assert_eq!(format_grouped(1234.5), "1,234.5");
/// ```
pub fn format_grouped(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, d.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Insert separators every 3 digits from the right
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0" after rounding is shown as "0"
    let sign = if grouped.chars().all(|c| c == '0' || c == ',') && decimal_part.is_empty() {
        ""
    } else {
        sign
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped_integers() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(42.0), "42");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(1234567.0), "1,234,567");
        assert_eq!(format_grouped(-1234.0), "-1,234");
    }

    #[test]
    fn test_format_grouped_fractions() {
        assert_eq!(format_grouped(1234.5), "1,234.5");
        assert_eq!(format_grouped(0.12345), "0.123");
        assert_eq!(format_grouped(-0.0001), "0");
    }
}
