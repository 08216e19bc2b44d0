#![forbid(unsafe_code)]

//! Typed accessors offered to the scan loop
//!
//! Each accessor names a short form, a long form, or both, and a
//! destination. It tries the short form first, then the long form, and
//! reports whether it consumed the pending option.

use crate::convert::{Numeric, convert};
use crate::error::ArgvError;
use crate::scanner::Argv;
use std::ops::RangeBounds;

impl Argv {
    /// Set `value` to true if the pending option is this flag
    pub fn flag<'l>(
        &mut self,
        short: impl Into<Option<char>>,
        long: impl Into<Option<&'l str>>,
        value: &mut bool,
    ) -> bool {
        let taken = self.take_switch(short.into(), long.into());
        if taken {
            *value = true;
        }
        taken
    }

    /// Increment `value` if the pending option is this counter
    ///
    /// Repeats such as `-vvv` or `-v -v -v` each count once.
    pub fn counter<'l>(
        &mut self,
        short: impl Into<Option<char>>,
        long: impl Into<Option<&'l str>>,
        value: &mut u32,
    ) -> bool {
        let taken = self.take_switch(short.into(), long.into());
        if taken {
            *value = value.saturating_add(1);
        }
        taken
    }

    /// Capture the value of a string option
    ///
    /// # Errors
    ///
    /// [`ArgvError::MissingArgument`] if the option has no value.
    pub fn option<'l>(
        &mut self,
        short: impl Into<Option<char>>,
        long: impl Into<Option<&'l str>>,
        value: &mut Option<String>,
    ) -> Result<bool, ArgvError> {
        match self.take_value(short.into(), long.into())? {
            Some((_, text)) => {
                *value = Some(text);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Capture and convert the value of a numeric option
    ///
    /// `bounds` is inclusive of whatever its range type includes; pass `..`
    /// to accept the whole range of `T`.
    ///
    /// # Errors
    ///
    /// - [`ArgvError::MissingArgument`] if the option has no value
    /// - [`ArgvError::InvalidArgument`] if the value is not a number of the
    ///   right kind or lies outside `bounds`
    pub fn number<'l, T, R>(
        &mut self,
        short: impl Into<Option<char>>,
        long: impl Into<Option<&'l str>>,
        value: &mut T,
        bounds: R,
    ) -> Result<bool, ArgvError>
    where
        T: Numeric,
        R: RangeBounds<T>,
    {
        let Some((option, text)) = self.take_value(short.into(), long.into())? else {
            return Ok(false);
        };
        match convert(&text, &bounds) {
            Ok(converted) => {
                *value = converted;
                Ok(true)
            }
            Err(_) => Err(self.report(ArgvError::InvalidArgument {
                value: text,
                option,
            })),
        }
    }

    fn take_switch(&mut self, short: Option<char>, long: Option<&str>) -> bool {
        short.is_some_and(|c| self.take_short(c)) || long.is_some_and(|l| self.take_long(l))
    }

    /// The matched option's display form and its value
    fn take_value(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
    ) -> Result<Option<(String, String)>, ArgvError> {
        if let Some(c) = short
            && let Some(text) = self.take_short_with_arg(c)?
        {
            return Ok(Some((format!("-{}", c), text)));
        }
        if let Some(l) = long
            && let Some(text) = self.take_long_with_arg(l)?
        {
            return Ok(Some((l.to_string(), text)));
        }
        Ok(None)
    }
}
