#![forbid(unsafe_code)]

//! Strict text-to-number conversion for option values
//!
//! Three parsers cover the three kinds of numeric destination:
//! - [`parse_signed`]: base-10 integer, optional sign
//! - [`parse_unsigned`]: base-10 integer, a minus sign is rejected outright
//! - [`parse_float`]: decimal floating literal, `inf` and `nan` spellings
//!
//! All three skip leading whitespace, require at least one digit, and
//! reject any trailing characters. [`convert`] selects the parser from the
//! destination's [`NumericKind`], narrows the result to the destination
//! type and checks the caller's bounds.

use std::ops::RangeBounds;
use thiserror::Error;

/// Why a value could not be converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Nothing that looks like a number was found
    #[error("no digits")]
    NoDigits,

    /// A number was found but other characters follow it
    #[error("trailing characters after number")]
    TrailingCharacters,

    /// A minus sign was given for an unsigned destination
    #[error("negative value for unsigned option")]
    NegativeUnsigned,

    /// The value does not fit the destination type or the caller's bounds
    #[error("value out of range")]
    OutOfRange,
}

/// Which parser a destination type uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Signed,
    Unsigned,
    Float,
}

/// A primitive numeric type an option value can be converted into
pub trait Numeric: Copy + PartialOrd {
    const KIND: NumericKind;

    /// Narrow a parsed signed value; `None` if it does not fit
    fn from_i64(value: i64) -> Option<Self>;

    /// Narrow a parsed unsigned value; `None` if it does not fit
    fn from_u64(value: u64) -> Option<Self>;

    /// Narrow a parsed floating value; `None` if it does not fit
    fn from_f64(value: f64) -> Option<Self>;
}

macro_rules! impl_integer {
    ($kind:expr => $($ty:ty),+) => {
        $(
            impl Numeric for $ty {
                const KIND: NumericKind = $kind;

                fn from_i64(value: i64) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }

                fn from_u64(value: u64) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }

                fn from_f64(_value: f64) -> Option<Self> {
                    None
                }
            }
        )+
    };
}

impl_integer!(NumericKind::Signed => i8, i16, i32, i64, isize);
impl_integer!(NumericKind::Unsigned => u8, u16, u32, u64, usize);

impl Numeric for f64 {
    const KIND: NumericKind = NumericKind::Float;

    fn from_i64(value: i64) -> Option<Self> {
        Some(value as f64)
    }

    fn from_u64(value: u64) -> Option<Self> {
        Some(value as f64)
    }

    fn from_f64(value: f64) -> Option<Self> {
        Some(value)
    }
}

impl Numeric for f32 {
    const KIND: NumericKind = NumericKind::Float;

    fn from_i64(value: i64) -> Option<Self> {
        Some(value as f32)
    }

    fn from_u64(value: u64) -> Option<Self> {
        Some(value as f32)
    }

    fn from_f64(value: f64) -> Option<Self> {
        let narrowed = value as f32;
        if value.is_finite() && narrowed.is_infinite() {
            None
        } else {
            Some(narrowed)
        }
    }
}

/// Convert `text` into `T`, checking it lies within `bounds`
pub fn convert<T, R>(text: &str, bounds: &R) -> Result<T, ConversionError>
where
    T: Numeric,
    R: RangeBounds<T>,
{
    let value = match T::KIND {
        NumericKind::Signed => T::from_i64(parse_signed(text)?),
        NumericKind::Unsigned => T::from_u64(parse_unsigned(text)?),
        NumericKind::Float => T::from_f64(parse_float(text)?),
    }
    .ok_or(ConversionError::OutOfRange)?;

    // NaN compares unordered with everything, itself included
    if value.partial_cmp(&value).is_none() || !bounds.contains(&value) {
        return Err(ConversionError::OutOfRange);
    }
    Ok(value)
}

/// Parse a base-10 signed integer
pub fn parse_signed(text: &str) -> Result<i64, ConversionError> {
    let number = integer_span(skip_space(text))?;
    number.parse().map_err(|_| ConversionError::OutOfRange)
}

/// Parse a base-10 unsigned integer, rejecting any minus sign
pub fn parse_unsigned(text: &str) -> Result<u64, ConversionError> {
    let text = skip_space(text);
    if text.starts_with('-') {
        return Err(ConversionError::NegativeUnsigned);
    }
    let number = integer_span(text)?;
    number.parse().map_err(|_| ConversionError::OutOfRange)
}

/// Parse a decimal floating-point literal
pub fn parse_float(text: &str) -> Result<f64, ConversionError> {
    let text = skip_space(text);
    match text.parse::<f64>() {
        Ok(value) => {
            // A finite literal too large for f64 parses as infinity
            if value.is_infinite() && !spells_infinity(text) {
                return Err(ConversionError::OutOfRange);
            }
            Ok(value)
        }
        Err(_) => {
            let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
            let unsigned = unsigned.strip_prefix('.').unwrap_or(unsigned);
            if unsigned.starts_with(|c: char| c.is_ascii_digit()) {
                Err(ConversionError::TrailingCharacters)
            } else {
                Err(ConversionError::NoDigits)
            }
        }
    }
}

/// Leading whitespace as the C library classifies it, including vertical tab
fn skip_space(text: &str) -> &str {
    text.trim_start_matches([' ', '\t', '\n', '\x0b', '\x0c', '\r'])
}

/// Split off an optional sign and a run of digits; nothing may follow
fn integer_span(text: &str) -> Result<&str, ConversionError> {
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return Err(ConversionError::NoDigits);
    }
    let end = sign_len + digits;
    if end != text.len() {
        return Err(ConversionError::TrailingCharacters);
    }
    Ok(text)
}

fn spells_infinity(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
