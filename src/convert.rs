//! Bounds-checked conversion of option values

pub mod numeric;

pub use numeric::{
    ConversionError, Numeric, NumericKind, convert, parse_float, parse_signed, parse_unsigned,
};
