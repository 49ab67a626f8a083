use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};

/// Shown as the total whenever it cannot be computed. Plain space, unlike
/// formatted amounts.
pub const ZERO_TOTAL: &str = "0,00 NOK";

const NBSP: char = '\u{a0}';
const MINUS: char = '\u{2212}';
const INFINITY: &str = "∞";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// `no-NO`; macrolanguage tag that resolves to Bokmål data.
    Norwegian,
    /// `nb-NO`
    NorwegianBokmal,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Norwegian => "no-NO",
            Locale::NorwegianBokmal => "nb-NO",
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Locale::Norwegian | Locale::NorwegianBokmal => ',',
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Locale::Norwegian | Locale::NorwegianBokmal => NBSP,
        }
    }
}

/// Currency style with the ISO code displayed after the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub locale: Locale,
    pub currency: &'static str,
    pub fraction_digits: u32,
}

/// Used for the market price line.
pub const MARKET: CurrencyFormat = CurrencyFormat {
    locale: Locale::Norwegian,
    currency: "NOK",
    fraction_digits: 2,
};

/// Used for the order total.
pub const TOTAL: CurrencyFormat = CurrencyFormat {
    locale: Locale::NorwegianBokmal,
    currency: "NOK",
    fraction_digits: 2,
};

/// Render a double the way the browser's currency formatter does: shortest
/// round-trip digits, rounded half away from zero. The sign bit is honoured,
/// so negative zero shows a minus.
pub fn format_currency(value: f64, format: CurrencyFormat) -> String {
    if value.is_nan() {
        return format!("NaN{NBSP}{}", format.currency);
    }
    let sign = if value.is_sign_negative() {
        MINUS.to_string()
    } else {
        String::new()
    };
    let number = if value.is_infinite() {
        INFINITY.to_string()
    } else {
        format_decimal(value.abs(), format)
    };
    format!("{sign}{number}{NBSP}{}", format.currency)
}

pub fn format_minor_units(minor: i64, format: CurrencyFormat) -> String {
    format_currency(minor as f64 / 100.0, format)
}

fn format_decimal(value: f64, format: CurrencyFormat) -> String {
    let scale = format.fraction_digits as usize;
    // `Display` for f64 gives the shortest digits that round-trip.
    let shortest = BigDecimal::from_str(&value.to_string()).unwrap_or_default();
    let rounded = shortest.with_scale_round(scale as i64, RoundingMode::HalfUp);
    let (digits, _) = rounded.as_bigint_and_exponent();

    let digits = format!("{:0>width$}", digits.to_string(), width = scale + 1);
    let (int, frac) = digits.split_at(digits.len() - scale);

    let mut out = group_thousands(int, format.locale.group_separator());
    if !frac.is_empty() {
        out.push(format.locale.decimal_separator());
        out.push_str(frac);
    }
    out
}

fn group_thousands(int: &str, separator: char) -> String {
    let mut out = String::with_capacity(int.len() + int.len() / 3 * 2);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
