//! en-US display formatting for the coin table and ticker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Positive
        } else {
            Trend::Negative
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Positive => "text-success",
            Trend::Negative => "text-danger",
        }
    }
}

/// Prices: always two fraction digits, e.g. `67,012.50`.
pub fn format_price(value: f64) -> String {
    group_thousands(&format!("{:.2}", value))
}

/// Market cap and volume: at most three fraction digits, trailing zeros dropped.
pub fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        return "0".to_string();
    }
    group_thousands(trimmed)
}

pub fn format_change(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn format_symbol(symbol: &str) -> String {
    symbol.to_uppercase()
}

fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return number.to_string();
    }

    let mut grouped = String::with_capacity(number.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
