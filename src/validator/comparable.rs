use super::{with_operand, IntoOperand, Operand, Validator};
use crate::message::quote_name;
use crate::types::{ContextValue, ValidationError, ValidationResult};
use core::fmt::Debug;
use core::panic::Location;

/// Whether the upper bound of a range is part of it.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Upper {
    Exclusive,
    Inclusive,
}

impl<T: Debug + PartialOrd> Validator<T> {
    /// Ensures that the value is less than `maximum_exclusive`.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::require_that;
    ///
    /// require_that(3, "index")?.is_less_than(5)?;
    /// assert!(require_that(5, "index")?.is_less_than(5).is_err());
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn is_less_than<O: IntoOperand<T>>(self, maximum_exclusive: O) -> ValidationResult<Self> {
        let limit = maximum_exclusive.into_operand();
        self.check_against(&limit, "must be less than", |value, limit| value < limit)
    }

    /// Ensures that the value is less than or equal to `maximum_inclusive`.
    #[track_caller]
    pub fn is_less_than_or_equal_to<O>(self, maximum_inclusive: O) -> ValidationResult<Self>
    where
        O: IntoOperand<T>,
    {
        let limit = maximum_inclusive.into_operand();
        self.check_against(&limit, "must be less than or equal to", |value, limit| value <= limit)
    }

    /// Ensures that the value is greater than `minimum_exclusive`.
    #[track_caller]
    pub fn is_greater_than<O>(self, minimum_exclusive: O) -> ValidationResult<Self>
    where
        O: IntoOperand<T>,
    {
        let limit = minimum_exclusive.into_operand();
        self.check_against(&limit, "must be greater than", |value, limit| value > limit)
    }

    /// Ensures that the value is greater than or equal to `minimum_inclusive`.
    #[track_caller]
    pub fn is_greater_than_or_equal_to<O>(self, minimum_inclusive: O) -> ValidationResult<Self>
    where
        O: IntoOperand<T>,
    {
        let limit = minimum_inclusive.into_operand();
        self.check_against(&limit, "must be greater than or equal to", |value, limit| {
            value >= limit
        })
    }

    /// Ensures that `minimum_inclusive <= value < maximum_exclusive`.
    ///
    /// A minimum greater than the maximum is rejected eagerly with
    /// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument).
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::check_if;
    ///
    /// let messages = check_if(10, "percent")?.is_between(0, 10)?.else_get_messages();
    /// assert_eq!(messages, ["\"percent\" is out of bounds.\npercent: 10\nbounds : [0, 10)"]);
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn is_between<L, U>(
        self,
        minimum_inclusive: L,
        maximum_exclusive: U,
    ) -> ValidationResult<Self>
    where
        L: IntoOperand<T>,
        U: IntoOperand<T>,
    {
        let minimum = minimum_inclusive.into_operand();
        self.in_bounds(minimum, maximum_exclusive.into_operand(), Upper::Exclusive)
    }

    /// Ensures that `minimum_inclusive <= value <= maximum_inclusive`.
    #[track_caller]
    pub fn is_between_closed<L, U>(
        self,
        minimum_inclusive: L,
        maximum_inclusive: U,
    ) -> ValidationResult<Self>
    where
        L: IntoOperand<T>,
        U: IntoOperand<T>,
    {
        let minimum = minimum_inclusive.into_operand();
        self.in_bounds(minimum, maximum_inclusive.into_operand(), Upper::Inclusive)
    }

    #[track_caller]
    fn in_bounds(
        self,
        minimum: Operand<T>,
        maximum: Operand<T>,
        upper: Upper,
    ) -> ValidationResult<Self> {
        self.require_operand_name(&minimum)?;
        self.require_operand_name(&maximum)?;
        let (low, high) = (minimum.value(), maximum.value());
        if low > high {
            return Err(ValidationError::invalid_argument(format!(
                "{} may not be greater than {}.\nminimum: {low:?}\nmaximum: {high:?}",
                minimum.name().map_or_else(|| "minimum".to_string(), quote_name),
                maximum.name().map_or_else(|| "maximum".to_string(), quote_name),
            ))
            .at(Location::caller()));
        }

        let closing = if upper == Upper::Inclusive { ']' } else { ')' };
        self.check(
            |value| {
                value >= low
                    && match upper {
                        Upper::Exclusive => value < high,
                        Upper::Inclusive => value <= high,
                    }
            },
            |validator| {
                let bounds = format!("[{}, {}{closing}", minimum.describe(), maximum.describe());
                let name = quote_name(&validator.name);
                let message = validator.message(format!("{name} is out of bounds."));
                with_operand(with_operand(message, &minimum), &maximum)
                    .with_context(ContextValue::Scalar(bounds), "bounds")
            },
        )
    }
}
