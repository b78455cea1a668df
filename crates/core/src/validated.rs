//! Accumulating validation result.
//!
//! [`Validated`] is either a success value or **one or more** errors. Unlike
//! `Result`, combining several `Validated` values does not stop at the first
//! failure: every error from every failing input is collected, in input
//! order. That makes it the right shape for form-style validation, where the
//! caller wants to hear about all bad fields at once.
//!
//! Two composition modes exist and must not be conflated:
//!
//! - [`combine!`](crate::combine) (and [`Validated::zip`]) for *independent*
//!   validations: errors accumulate.
//! - [`Validated::and_then`] for *dependent* validations: the first failure
//!   wins, because the next step cannot run without the previous value.

/// A value that passed validation, or the full list of reasons it did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<T, E> {
    /// The value passed validation.
    Valid(T),
    /// One or more validation errors, in the order they were found.
    ///
    /// The vector is never empty: every constructor and combinator in this
    /// module only produces `Invalid` carrying at least one error.
    Invalid(Vec<E>),
}

impl<T, E> Validated<T, E> {
    pub fn valid(value: T) -> Self {
        Validated::Valid(value)
    }

    pub fn invalid(error: E) -> Self {
        Validated::Invalid(vec![error])
    }

    /// Build an `Invalid` from an already-collected error list.
    ///
    /// `errors` must be non-empty.
    pub fn invalid_all(errors: Vec<E>) -> Self {
        debug_assert!(!errors.is_empty(), "Invalid requires at least one error");
        Validated::Invalid(errors)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validated<U, E> {
        match self {
            Validated::Valid(value) => Validated::Valid(f(value)),
            Validated::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Map the error payload element-wise, preserving the full error list.
    pub fn map_err<F>(self, f: impl FnMut(E) -> F) -> Validated<T, F> {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(errors) => Validated::Invalid(errors.into_iter().map(f).collect()),
        }
    }

    /// Chain a dependent validation: stop at the first failure.
    ///
    /// Use this when the next validation cannot run without the current
    /// value (an order quantity needs the already-validated product code).
    /// Independent validations accumulate with [`combine!`](crate::combine)
    /// instead.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Validated<U, E>) -> Validated<U, E> {
        match self {
            Validated::Valid(value) => f(value),
            Validated::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Pair two independent validations, accumulating errors from both.
    pub fn zip<U>(self, other: Validated<U, E>) -> Validated<(T, U), E> {
        match (self, other) {
            (Validated::Valid(a), Validated::Valid(b)) => Validated::Valid((a, b)),
            (Validated::Invalid(mut left), Validated::Invalid(right)) => {
                left.extend(right);
                Validated::Invalid(left)
            }
            (Validated::Invalid(errors), _) | (_, Validated::Invalid(errors)) => {
                Validated::Invalid(errors)
            }
        }
    }

    pub fn into_result(self) -> Result<T, Vec<E>> {
        match self {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(errors) => Err(errors),
        }
    }
}

/// Accumulate a sequence of validations into one: all values (in order) or
/// the concatenation of every element's error list (in order).
///
/// This is the list form of [`combine!`](crate::combine):
///
/// ```ignore
/// let lines: Validated<Vec<ValidatedOrderLine>, ValidationError> =
///     raw_lines.iter().map(validate_line).collect();
/// ```
impl<T, E> FromIterator<Validated<T, E>> for Validated<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Validated<T, E>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for item in iter {
            match item {
                Validated::Valid(value) => values.push(value),
                Validated::Invalid(mut item_errors) => errors.append(&mut item_errors),
            }
        }
        if errors.is_empty() {
            Validated::Valid(values)
        } else {
            Validated::Invalid(errors)
        }
    }
}

/// Combine independent validations applicatively.
///
/// If every input is `Valid`, the bound names hold the unwrapped values and
/// the body expression builds the result. Otherwise the outcome is `Invalid`
/// with the errors of *every* failing input, concatenated in argument order.
///
/// ```ignore
/// combine!(
///     first_name = String50::new("FirstName", raw.first_name),
///     last_name = String50::new("LastName", raw.last_name)
///     => PersonalName { first_name, last_name }
/// )
/// ```
#[macro_export]
macro_rules! combine {
    ($($name:ident = $validated:expr),+ $(,)? => $build:expr) => {{
        let mut __errors = ::std::vec::Vec::new();
        $(
            let $name = match $validated {
                $crate::validated::Validated::Valid(value) => ::core::option::Option::Some(value),
                $crate::validated::Validated::Invalid(mut errors) => {
                    __errors.append(&mut errors);
                    ::core::option::Option::None
                }
            };
        )+
        match ($($name,)+) {
            ($(::core::option::Option::Some($name),)+) => {
                debug_assert!(__errors.is_empty());
                $crate::validated::Validated::Valid($build)
            }
            _ => $crate::validated::Validated::Invalid(__errors),
        }
    }};
}
