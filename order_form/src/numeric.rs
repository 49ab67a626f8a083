use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;

use crate::error::AmountError;

/// Accept a comma as decimal separator. Only the first comma is rewritten.
pub fn normalize_decimal(text: &str) -> String {
    text.replacen(',', ".", 1)
}

/// Normalize then parse, the way both form fields read their text.
pub fn parse_field(text: &str) -> Result<f64, AmountError> {
    parse_amount(&normalize_decimal(text))
}

/// Parse `text` with browser number-conversion rules: surrounding whitespace
/// is ignored, blank means zero, and decimal, exponent, `Infinity` and
/// `0x`/`0o`/`0b` literals are accepted. Values round to the nearest double,
/// so huge literals become infinite and tiny ones a signed zero.
pub fn parse_amount(text: &str) -> Result<f64, AmountError> {
    let trimmed = text.trim_matches(is_number_whitespace);
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    if let Some((radix, digits)) = radix_literal(trimmed) {
        return parse_radix_digits(digits, radix).ok_or_else(|| not_a_number(text));
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if unsigned == "Infinity" {
        return Ok(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let literal = DecimalLiteral::scan(unsigned).ok_or_else(|| not_a_number(text))?;
    f64::from_str(&literal.canonical(negative)).map_err(|_| not_a_number(text))
}

fn not_a_number(text: &str) -> AmountError {
    AmountError::NotANumber(text.to_string())
}

fn is_number_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn all_digits(s: &str, radix: u32) -> bool {
    s.chars().all(|c| c.is_digit(radix))
}

fn radix_literal(s: &str) -> Option<(u32, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() || !all_digits(digits, radix) {
        return None;
    }
    // Go through decimal text so long literals still round correctly.
    let value = BigInt::parse_bytes(digits.as_bytes(), radix)?;
    f64::from_str(&value.to_string()).ok()
}

/// `digits [. digits] [e [+-] digits]`, either side of the dot may be empty
/// but not both.
struct DecimalLiteral<'a> {
    int: &'a str,
    frac: &'a str,
    exp: &'a str,
}

impl<'a> DecimalLiteral<'a> {
    fn scan(s: &'a str) -> Option<Self> {
        let (mantissa, exp) = match s.find(|c: char| c == 'e' || c == 'E') {
            Some(i) => (&s[..i], Some(&s[i + 1..])),
            None => (s, None),
        };

        let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int.is_empty() && frac.is_empty() {
            return None;
        }
        if !all_digits(int, 10) || !all_digits(frac, 10) {
            return None;
        }

        let exp = match exp {
            Some(e) => {
                let digits = e.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(e);
                if digits.is_empty() || !all_digits(digits, 10) {
                    return None;
                }
                e
            }
            None => "0",
        };

        Some(Self { int, frac, exp })
    }

    fn canonical(&self, negative: bool) -> String {
        format!(
            "{}{}.{}e{}",
            if negative { "-" } else { "" },
            if self.int.is_empty() { "0" } else { self.int },
            if self.frac.is_empty() { "0" } else { self.frac },
            self.exp,
        )
    }
}
