use super::{IntoOperand, Validator};
use crate::message::quote_name;
use crate::types::ValidationResult;
use core::fmt::Debug;

/// Primitive numbers that can be validated by sign, magnitude and divisibility.
///
/// Integer types report every value as a finite whole number; floating-point
/// types override the classification methods.
pub trait Numeric: Copy + Debug + PartialOrd {
    /// The additive identity.
    fn zero() -> Self;

    /// Remainder of `self / divisor`. `divisor` is never zero.
    ///
    /// Must not overflow: `MIN % -1` for signed integers is `0`.
    fn remainder(self, divisor: Self) -> Self;

    /// `true` unless the value is NaN.
    #[inline]
    fn is_number(self) -> bool {
        true
    }

    /// `true` unless the value is NaN or infinite.
    #[inline]
    fn is_finite_number(self) -> bool {
        true
    }

    /// `true` if the value has no fractional part.
    #[inline]
    fn is_whole(self) -> bool {
        true
    }
}

macro_rules! impl_numeric_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn remainder(self, divisor: Self) -> Self {
                    self.wrapping_rem(divisor)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn remainder(self, divisor: Self) -> Self {
                    self % divisor
                }

                #[inline]
                fn is_number(self) -> bool {
                    !self.is_nan()
                }

                #[inline]
                fn is_finite_number(self) -> bool {
                    self.is_finite()
                }

                #[inline]
                fn is_whole(self) -> bool {
                    self.is_finite() && self.fract() == 0.0
                }
            }
        )*
    };
}

impl_numeric_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

/// `factor != 0 && (value == 0 || value % factor == 0)`.
fn is_multiple<N: Numeric>(value: N, factor: N) -> bool {
    let zero = N::zero();
    factor != zero && (value == zero || value.remainder(factor) == zero)
}

impl<N: Numeric> Validator<N> {
    #[track_caller]
    fn check_sign(self, predicate: fn(N, N) -> bool, requirement: &str) -> ValidationResult<Self> {
        self.check(
            |value| predicate(*value, N::zero()),
            |validator| {
                validator.message(format!("{} {requirement}.", quote_name(&validator.name)))
            },
        )
    }

    /// Ensures that the value is less than zero.
    #[track_caller]
    pub fn is_negative(self) -> ValidationResult<Self> {
        self.check_sign(|value, zero| value < zero, "must be negative")
    }

    /// Ensures that the value is zero or greater.
    #[track_caller]
    pub fn is_not_negative(self) -> ValidationResult<Self> {
        self.check_sign(|value, zero| value >= zero, "may not be negative")
    }

    #[track_caller]
    pub fn is_zero(self) -> ValidationResult<Self> {
        self.check_sign(|value, zero| value == zero, "must be zero")
    }

    #[track_caller]
    pub fn is_not_zero(self) -> ValidationResult<Self> {
        self.check_sign(|value, zero| value != zero, "may not be zero")
    }

    /// Ensures that the value is greater than zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::require_that;
    ///
    /// let error = require_that(0, "count")?.is_positive().unwrap_err();
    /// assert_eq!(error.message(), "\"count\" must be positive.\ncount: 0");
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn is_positive(self) -> ValidationResult<Self> {
        self.check_sign(|value, zero| value > zero, "must be positive")
    }

    /// Ensures that the value is zero or less.
    #[track_caller]
    pub fn is_not_positive(self) -> ValidationResult<Self> {
        self.check_sign(|value, zero| value <= zero, "may not be positive")
    }

    /// Ensures that the value is a multiple of `factor`.
    ///
    /// Zero is a multiple of every non-zero factor; nothing is a multiple of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::check_if;
    ///
    /// assert!(!check_if(12, "size")?.is_multiple_of(4)?.validation_failed());
    /// assert!(!check_if(0, "size")?.is_multiple_of(4)?.validation_failed());
    /// assert!(check_if(0, "size")?.is_multiple_of(0)?.validation_failed());
    /// assert!(!check_if(i32::MIN, "size")?.is_multiple_of(-1)?.validation_failed());
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn is_multiple_of<O: IntoOperand<N>>(self, factor: O) -> ValidationResult<Self> {
        let factor = factor.into_operand();
        self.check_against(&factor, "must be a multiple of", |value, factor| {
            is_multiple(*value, *factor)
        })
    }

    #[track_caller]
    pub fn is_not_multiple_of<O: IntoOperand<N>>(self, factor: O) -> ValidationResult<Self> {
        let factor = factor.into_operand();
        self.check_against(&factor, "may not be a multiple of", |value, factor| {
            !is_multiple(*value, *factor)
        })
    }

    /// Ensures that the value is not NaN.
    #[track_caller]
    pub fn is_number(self) -> ValidationResult<Self> {
        self.check_sign(|value, _| value.is_number(), "must be a number")
    }

    /// Ensures that the value is NaN.
    #[track_caller]
    pub fn is_not_number(self) -> ValidationResult<Self> {
        self.check_sign(|value, _| !value.is_number(), "may not be a number")
    }

    #[track_caller]
    pub fn is_finite(self) -> ValidationResult<Self> {
        self.check_sign(|value, _| value.is_finite_number(), "must be a finite number")
    }

    /// Ensures that the value is positive or negative infinity.
    #[track_caller]
    pub fn is_infinite(self) -> ValidationResult<Self> {
        self.check_sign(
            |value, _| value.is_number() && !value.is_finite_number(),
            "must be an infinite number",
        )
    }

    /// Ensures that the value has no fractional part.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::check_if;
    ///
    /// assert!(!check_if(4.0, "ratio")?.is_whole_number()?.validation_failed());
    /// assert!(check_if(4.5, "ratio")?.is_whole_number()?.validation_failed());
    /// assert!(check_if(f64::NAN, "ratio")?.is_whole_number()?.validation_failed());
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn is_whole_number(self) -> ValidationResult<Self> {
        self.check_sign(|value, _| value.is_whole(), "must be a whole number")
    }

    #[track_caller]
    pub fn is_not_whole_number(self) -> ValidationResult<Self> {
        self.check_sign(|value, _| !value.is_whole(), "may not be a whole number")
    }
}
