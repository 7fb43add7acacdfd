//! Kubernetes resource quantity parsing ("250m", "1.5Gi", "12e3", ...).
//!
//! Values are computed exactly as a fraction and rounded up to the next
//! integer in the requested unit, the same way the API server reports
//! milli-values and byte values.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("empty quantity")]
    Empty,

    #[error("invalid number in quantity '{0}'")]
    InvalidNumber(String),

    #[error("unknown suffix '{suffix}' in quantity '{value}'")]
    UnknownSuffix { value: String, suffix: String },

    #[error("quantity '{0}' is out of range")]
    OutOfRange(String),
}

const MAX_DECIMAL_EXPONENT: i32 = 30;

/// Exact rational value: `numerator / denominator`, denominator > 0.
#[derive(Debug, Clone, Copy)]
struct Fraction {
    numerator: i128,
    denominator: i128,
}

impl Fraction {
    fn scale_decimal(self, exponent: i32, raw: &str) -> Result<Self, QuantityError> {
        if exponent.abs() > MAX_DECIMAL_EXPONENT {
            return Err(QuantityError::OutOfRange(raw.to_string()));
        }
        let factor = 10i128.pow(exponent.unsigned_abs());
        let overflow = || QuantityError::OutOfRange(raw.to_string());
        if exponent >= 0 {
            Ok(Self {
                numerator: self.numerator.checked_mul(factor).ok_or_else(overflow)?,
                ..self
            })
        } else {
            Ok(Self {
                denominator: self.denominator.checked_mul(factor).ok_or_else(overflow)?,
                ..self
            })
        }
    }

    fn scale_binary(self, shift: u32, raw: &str) -> Result<Self, QuantityError> {
        let numerator = self
            .numerator
            .checked_mul(1i128 << shift)
            .ok_or_else(|| QuantityError::OutOfRange(raw.to_string()))?;
        Ok(Self { numerator, ..self })
    }

    /// `ceil(value * multiplier)`, with the magnitude rounded away from zero.
    fn ceil_times(self, multiplier: i128, raw: &str) -> Result<i64, QuantityError> {
        let overflow = || QuantityError::OutOfRange(raw.to_string());
        let scaled = self.numerator.checked_mul(multiplier).ok_or_else(overflow)?;
        let magnitude = scaled.unsigned_abs();
        let denominator = self.denominator.unsigned_abs();
        let mut whole = magnitude / denominator;
        if magnitude % denominator != 0 {
            whole += 1;
        }
        let whole = i64::try_from(whole).map_err(|_| overflow())?;
        Ok(if scaled < 0 { -whole } else { whole })
    }
}

fn parse(raw: &str) -> Result<Fraction, QuantityError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(QuantityError::Empty);
    }

    let (negative, unsigned) = match value.as_bytes()[0] {
        b'-' => (true, &value[1..]),
        b'+' => (false, &value[1..]),
        _ => (false, value),
    };

    let number_end = unsigned
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(unsigned.len());
    let (number, suffix) = unsigned.split_at(number_end);

    let (integer_part, fraction_part) = match number.split_once('.') {
        Some((i, f)) => (i, f),
        None => (number, ""),
    };
    if (integer_part.is_empty() && fraction_part.is_empty()) || fraction_part.contains('.') {
        return Err(QuantityError::InvalidNumber(raw.to_string()));
    }

    let digits = format!("{integer_part}{fraction_part}");
    let mut numerator: i128 = digits
        .parse()
        .map_err(|_| QuantityError::InvalidNumber(raw.to_string()))?;
    if negative {
        numerator = -numerator;
    }

    let fraction = Fraction { numerator, denominator: 1 }
        .scale_decimal(-(fraction_part.len() as i32), raw)?;

    apply_suffix(fraction, suffix, raw)
}

fn apply_suffix(fraction: Fraction, suffix: &str, raw: &str) -> Result<Fraction, QuantityError> {
    let decimal = |exp: i32| fraction.scale_decimal(exp, raw);
    let binary = |shift: u32| fraction.scale_binary(shift, raw);

    match suffix {
        "" => Ok(fraction),
        "n" => decimal(-9),
        "u" => decimal(-6),
        "m" => decimal(-3),
        "k" => decimal(3),
        "M" => decimal(6),
        "G" => decimal(9),
        "T" => decimal(12),
        "P" => decimal(15),
        "E" => decimal(18),
        "Ki" => binary(10),
        "Mi" => binary(20),
        "Gi" => binary(30),
        "Ti" => binary(40),
        "Pi" => binary(50),
        "Ei" => binary(60),
        other if other.len() > 1 && (other.starts_with('e') || other.starts_with('E')) => {
            let exponent: i32 = other[1..].parse().map_err(|_| QuantityError::UnknownSuffix {
                value: raw.to_string(),
                suffix: other.to_string(),
            })?;
            decimal(exponent)
        }
        other => Err(QuantityError::UnknownSuffix {
            value: raw.to_string(),
            suffix: other.to_string(),
        }),
    }
}

/// CPU quantity in milli-cores, rounded up.
pub fn parse_cpu_millis(raw: &str) -> Result<i64, QuantityError> {
    parse(raw)?.ceil_times(1000, raw)
}

/// Memory quantity in bytes, rounded up.
pub fn parse_memory_bytes(raw: &str) -> Result<i64, QuantityError> {
    parse(raw)?.ceil_times(1, raw)
}

/// Renders milli-cores as whole cores when exact, otherwise with the `m` suffix.
pub fn format_cpu_millis(millis: i64) -> String {
    if millis % 1000 == 0 {
        (millis / 1000).to_string()
    } else {
        format!("{millis}m")
    }
}

/// Renders bytes with the largest binary suffix that divides the value exactly.
pub fn format_memory_bytes(bytes: i64) -> String {
    const SUFFIXES: [(&str, u32); 6] = [
        ("Ei", 60),
        ("Pi", 50),
        ("Ti", 40),
        ("Gi", 30),
        ("Mi", 20),
        ("Ki", 10),
    ];

    if bytes == 0 {
        return "0".to_string();
    }
    for (suffix, shift) in SUFFIXES {
        let unit = 1i64 << shift;
        if bytes % unit == 0 {
            return format!("{}{}", bytes / unit, suffix);
        }
    }
    bytes.to_string()
}
