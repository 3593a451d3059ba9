// ---------------------------------------------------------------------------
// Number formatting for display
// ---------------------------------------------------------------------------

/// Fixed-point with `decimals` places and comma thousands separators:
/// `1234567.891` → `"1,234,567.89"`.
pub fn thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Avoid "-0.00" for values that round to zero.
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Like [`thousands`] but with an explicit `+` on positive deltas. Values
/// that round to zero carry no sign.
pub fn signed(value: f64, decimals: usize) -> String {
    let body = thousands(value, decimals);
    let nonzero = body.chars().any(|c| c.is_ascii_digit() && c != '0');
    if value > 0.0 && nonzero {
        format!("+{body}")
    } else {
        body
    }
}

/// A cell value as shown in tables: plain numbers get separators, anything
/// else is shown as-is.
pub fn cell(raw: &str, decimals: usize) -> String {
    match crate::data::model::coerce_cell(raw) {
        Ok(v) => thousands(v, decimals),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(thousands(60.0, 2), "60.00");
        assert_eq!(thousands(999.999, 2), "1,000.00");
        assert_eq!(thousands(100000.0, 0), "100,000");
    }

    #[test]
    fn negatives_keep_sign() {
        assert_eq!(thousands(-1234.5, 1), "-1,234.5");
        assert_eq!(thousands(-0.001, 2), "0.00");
    }

    #[test]
    fn signed_deltas() {
        assert_eq!(signed(20.0, 2), "+20.00");
        assert_eq!(signed(-20.0, 2), "-20.00");
        assert_eq!(signed(0.0, 2), "0.00");
        assert_eq!(signed(0.004, 2), "0.00");
        assert_eq!(signed(-0.004, 2), "0.00");
        assert_eq!(signed(0.005, 0), "0");
    }

    #[test]
    fn cells_fall_back_to_raw_text() {
        assert_eq!(cell("1500", 2), "1,500.00");
        assert_eq!(cell("n/a", 2), "n/a");
    }
}
