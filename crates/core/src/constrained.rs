//! Smart-constructor helpers for constrained primitive values.
//!
//! Each helper takes the field name (used in the error text), the value
//! constructor, the bounds or pattern, and the raw input, and returns either
//! the constructed value or exactly one descriptive error. Accumulating
//! several fields' errors happens a layer up, in [`Validated`].
//!
//! The error message templates are part of the observable contract of the
//! types built on top of these helpers; changing them breaks compatibility
//! tests downstream.

use regex::Regex;
use rust_decimal::Decimal;

use crate::validated::Validated;

/// A compiled match pattern that must cover the whole input.
///
/// The regex is compiled with `\A(?:…)\z` anchors so a match is never a
/// substring match, while error messages show the original un-anchored text.
#[derive(Debug)]
pub struct Pattern {
    text: &'static str,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern.
    ///
    /// Panics if `text` is not a valid regex. Patterns are fixed at compile
    /// time, so a malformed one is a defect in the calling crate, not an
    /// input error.
    pub fn new(text: &'static str) -> Self {
        let regex = Regex::new(&format!(r"\A(?:{text})\z"))
            .unwrap_or_else(|error| panic!("invalid pattern '{text}': {error}"));
        Self { text, regex }
    }

    pub fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// The un-anchored source text, as shown in error messages.
    pub fn text(&self) -> &str {
        self.text
    }
}

/// Create a constrained string.
///
/// Errors if the input is empty or longer than `max_len` characters.
pub fn create_string<T>(
    field_name: &str,
    ctor: impl FnOnce(String) -> T,
    max_len: usize,
    raw: &str,
) -> Validated<T, String> {
    if raw.is_empty() {
        Validated::invalid(format!("{field_name} must not be empty"))
    } else if raw.chars().count() > max_len {
        Validated::invalid(format!("{field_name} must not be more than {max_len} chars"))
    } else {
        Validated::valid(ctor(raw.to_owned()))
    }
}

/// Create an optional constrained string.
///
/// Empty input is `None`, not an error; over-length input is still an error.
pub fn create_string_option<T>(
    field_name: &str,
    ctor: impl FnOnce(String) -> T,
    max_len: usize,
    raw: &str,
) -> Validated<Option<T>, String> {
    if raw.is_empty() {
        Validated::valid(None)
    } else if raw.chars().count() > max_len {
        Validated::invalid(format!("{field_name} must not be more than {max_len} chars"))
    } else {
        Validated::valid(Some(ctor(raw.to_owned())))
    }
}

/// Create a constrained integer. The below-minimum check runs first.
pub fn create_int<T>(
    field_name: &str,
    ctor: impl FnOnce(i32) -> T,
    min: i32,
    max: i32,
    value: i32,
) -> Validated<T, String> {
    if value < min {
        Validated::invalid(format!("{field_name}: Must not be less than {min}"))
    } else if value > max {
        Validated::invalid(format!("{field_name}: Must not be greater than {max}"))
    } else {
        Validated::valid(ctor(value))
    }
}

/// Create a constrained decimal. The below-minimum check runs first.
///
/// The bound values keep their scale when rendered into the error message
/// (`0.05`, not `0.05000`), so pick bound constants with the scale the
/// message should show.
pub fn create_decimal<T>(
    field_name: &str,
    ctor: impl FnOnce(Decimal) -> T,
    min: Decimal,
    max: Decimal,
    value: Decimal,
) -> Validated<T, String> {
    if value < min {
        Validated::invalid(format!("{field_name}: Must not be less than {min}"))
    } else if value > max {
        Validated::invalid(format!("{field_name}: Must not be greater than {max}"))
    } else {
        Validated::valid(ctor(value))
    }
}

/// Create a constrained string that must match `pattern` in full.
pub fn create_like<T>(
    field_name: &str,
    ctor: impl FnOnce(String) -> T,
    pattern: &Pattern,
    raw: &str,
) -> Validated<T, String> {
    if raw.is_empty() {
        Validated::invalid(format!("{field_name} must not be empty"))
    } else if pattern.matches(raw) {
        Validated::valid(ctor(raw.to_owned()))
    } else {
        Validated::invalid(format!(
            "{field_name}: '{raw}' must match the pattern '{}'",
            pattern.text()
        ))
    }
}
