//! Number and stack-row formatting for the display

/// Format like C's `%g`: `precision` significant digits, trailing zeros
/// removed, scientific notation outside `1e-4 <= |x| < 10^precision`
pub(crate) fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    // Round first; the exponent of the rounded value picks the notation
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific.clone();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific.clone();
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Display rows for the stack, numbered `rows` down to 1
///
/// `recent` holds the top values, nearest-to-top first, so row 1 is
/// `recent[0]`. Rows beyond its length carry no value.
pub(crate) fn stack_rows(recent: &[f64], rows: usize) -> Vec<(usize, Option<f64>)> {
    (1..=rows)
        .rev()
        .map(|row| (row, recent.get(row - 1).copied()))
        .collect()
}

/// Width of the row-number column
pub(crate) fn index_width(rows: usize) -> usize {
    rows.to_string().len()
}
