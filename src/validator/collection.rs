use super::{IntoOperand, Operand, Validator};
use crate::message::quote_name;
use crate::types::{
    duplicates, sorted_if_unsorted, ContextValue, Difference, ValidationResult, ValidationTarget,
};
use core::cmp::Ordering;
use core::fmt::Debug;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// A value with a number of entries: a collection or a map.
pub trait Container {
    /// The number of entries.
    fn size(&self) -> usize;
}

/// A collection whose elements can be compared against other sequences.
pub trait Elements: Container {
    type Item;

    /// `true` if the collection rejects duplicate elements.
    const UNIQUE: bool;

    /// References to the elements, in iteration order.
    fn elements(&self) -> Vec<&Self::Item>;
}

impl<E> Container for Vec<E> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<E> Elements for Vec<E> {
    type Item = E;
    const UNIQUE: bool = false;

    fn elements(&self) -> Vec<&E> {
        self.iter().collect()
    }
}

impl<E> Container for VecDeque<E> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<E> Elements for VecDeque<E> {
    type Item = E;
    const UNIQUE: bool = false;

    fn elements(&self) -> Vec<&E> {
        self.iter().collect()
    }
}

impl<E> Container for BTreeSet<E> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<E> Elements for BTreeSet<E> {
    type Item = E;
    const UNIQUE: bool = true;

    fn elements(&self) -> Vec<&E> {
        self.iter().collect()
    }
}

impl<E, S> Container for HashSet<E, S> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<E, S> Elements for HashSet<E, S> {
    type Item = E;
    const UNIQUE: bool = true;

    fn elements(&self) -> Vec<&E> {
        self.iter().collect()
    }
}

impl<C: Container + Debug> Validator<C> {
    #[track_caller]
    pub fn is_empty(self) -> ValidationResult<Self> {
        self.check(
            |value| value.size() == 0,
            |validator| {
                validator.message(format!("{} must be empty.", quote_name(&validator.name)))
            },
        )
    }

    #[track_caller]
    pub fn is_not_empty(self) -> ValidationResult<Self> {
        self.check(
            |value| value.size() != 0,
            |validator| {
                validator.message(format!("{} may not be empty.", quote_name(&validator.name)))
            },
        )
    }

    /// Validates the number of entries, under the name `"<name>.size()"`.
    #[track_caller]
    pub fn size(self) -> ValidationResult<Validator<usize>> {
        self.project("size()", |value| value.size())
    }
}

/// Context entries explaining why a collection check failed.
type Diagnostics = Vec<(&'static str, ContextValue)>;

fn list<E: Debug>(elements: &[&E]) -> ContextValue {
    ContextValue::list(elements.iter().copied())
}

impl<C> Validator<C>
where
    C: Elements + Debug,
    C::Item: PartialEq + PartialOrd + Debug,
{
    /// Evaluates a check against the elements of a `Valid` value.
    ///
    /// `evaluate` returns `Err` with extra context entries when the check fails.
    /// `Undefined` values fail without evaluation.
    #[track_caller]
    fn check_elements<F>(
        mut self,
        text: String,
        operand: Option<(String, ContextValue)>,
        evaluate: F,
    ) -> ValidationResult<Self>
    where
        F: FnOnce(&[&C::Item]) -> Result<(), Diagnostics>,
    {
        if self.on_null()? {
            return Ok(self);
        }
        let outcome = match &self.value {
            ValidationTarget::Valid(value) => evaluate(&value.elements()),
            ValidationTarget::Null | ValidationTarget::Undefined => Err(Diagnostics::new()),
        };
        if let Err(diagnostics) = outcome {
            let mut message = self.message(text);
            if let Some((name, value)) = operand {
                message = message.with_context(value, name);
            }
            for (name, value) in diagnostics {
                message = message.with_context(value, name);
            }
            self.fail(message)?;
        }
        Ok(self)
    }

    /// Compares the elements against another sequence.
    #[track_caller]
    fn check_difference<F>(
        self,
        other: &Operand<Vec<C::Item>>,
        text: String,
        evaluate: F,
    ) -> ValidationResult<Self>
    where
        F: FnOnce(&Difference<&C::Item>) -> Result<(), Diagnostics>,
    {
        self.require_operand_name(other)?;
        let equality = self.configuration.equality_method();
        let others: Vec<&C::Item> = other.value().iter().collect();
        self.check_elements(text, other.context(), |actual| {
            evaluate(&Difference::actual_vs_other(actual, &others, equality))
        })
    }

    /// Ensures that the collection contains `element`.
    #[track_caller]
    pub fn contains<O: IntoOperand<C::Item>>(self, element: O) -> ValidationResult<Self> {
        let element = element.into_operand();
        let equality = self.configuration.equality_method();
        self.check_against(&element, "must contain", |value, element| {
            value.elements().into_iter().any(|candidate| equality.equals(candidate, element))
        })
    }

    #[track_caller]
    pub fn does_not_contain<O: IntoOperand<C::Item>>(self, element: O) -> ValidationResult<Self> {
        let element = element.into_operand();
        let equality = self.configuration.equality_method();
        self.check_against(&element, "may not contain", |value, element| {
            !value.elements().into_iter().any(|candidate| equality.equals(candidate, element))
        })
    }

    /// Ensures that the collection consists of the same elements as `expected`, in any order.
    ///
    /// Multiplicity is ignored. On failure the message lists the `missing` and
    /// `unwanted` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::check_if;
    ///
    /// let messages = check_if(vec![1, 2, 3], "actual")?
    ///     .contains_exactly(vec![2, 3, 4])?
    ///     .else_get_messages();
    /// assert_eq!(
    ///     messages[0],
    ///     "\"actual\" must consist of the elements [2, 3, 4], regardless of their order.\n\
    ///      actual  : [1, 2, 3]\n\
    ///      missing : [4]\n\
    ///      unwanted: [1]"
    /// );
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn contains_exactly<O>(self, expected: O) -> ValidationResult<Self>
    where
        O: IntoOperand<Vec<C::Item>>,
    {
        let expected = expected.into_operand();
        let text = format!(
            "{} must consist of {}, regardless of their order.",
            quote_name(&self.name),
            elements_of(&expected)
        );
        self.check_difference(&expected, text, |difference| {
            if difference.are_the_same() {
                Ok(())
            } else {
                Err(vec![
                    ("missing", list(difference.only_in_other())),
                    ("unwanted", list(difference.only_in_actual())),
                ])
            }
        })
    }

    /// Ensures that the collection does not consist of exactly the elements of `unwanted`.
    #[track_caller]
    pub fn does_not_contain_exactly<O>(self, unwanted: O) -> ValidationResult<Self>
    where
        O: IntoOperand<Vec<C::Item>>,
    {
        let unwanted = unwanted.into_operand();
        let text = format!(
            "{} may not consist of {}, regardless of their order.",
            quote_name(&self.name),
            elements_of(&unwanted)
        );
        self.check_difference(&unwanted, text, |difference| {
            if difference.are_different() {
                Ok(())
            } else {
                Err(Diagnostics::new())
            }
        })
    }

    /// Ensures that the collection contains at least one element of `expected`.
    #[track_caller]
    pub fn contains_any<O: IntoOperand<Vec<C::Item>>>(self, expected: O) -> ValidationResult<Self> {
        let expected = expected.into_operand();
        let text = format!(
            "{} must contain any of the elements present in {}.",
            quote_name(&self.name),
            expected.describe()
        );
        self.check_difference(&expected, text, |difference| {
            if difference.common().is_empty() {
                Err(Diagnostics::new())
            } else {
                Ok(())
            }
        })
    }

    /// Ensures that the collection contains no element of `unwanted`.
    ///
    /// On failure the message lists the `elementsToRemove`.
    #[track_caller]
    pub fn does_not_contain_any<O>(self, unwanted: O) -> ValidationResult<Self>
    where
        O: IntoOperand<Vec<C::Item>>,
    {
        let unwanted = unwanted.into_operand();
        let text = format!(
            "{} may not contain any of the elements present in {}.",
            quote_name(&self.name),
            unwanted.describe()
        );
        self.check_difference(&unwanted, text, |difference| {
            if difference.common().is_empty() {
                Ok(())
            } else {
                Err(vec![("elementsToRemove", list(difference.common()))])
            }
        })
    }

    /// Ensures that the collection contains every element of `expected`.
    ///
    /// On failure the message lists the `missing` elements.
    #[track_caller]
    pub fn contains_all<O: IntoOperand<Vec<C::Item>>>(self, expected: O) -> ValidationResult<Self> {
        let expected = expected.into_operand();
        let text = format!(
            "{} must contain all the elements present in {}.",
            quote_name(&self.name),
            expected.describe()
        );
        self.check_difference(&expected, text, |difference| {
            if difference.only_in_other().is_empty() {
                Ok(())
            } else {
                Err(vec![("missing", list(difference.only_in_other()))])
            }
        })
    }

    /// Ensures that at least one element of `unwanted` is absent from the collection.
    #[track_caller]
    pub fn does_not_contain_all<O>(self, unwanted: O) -> ValidationResult<Self>
    where
        O: IntoOperand<Vec<C::Item>>,
    {
        let unwanted = unwanted.into_operand();
        let text = format!(
            "{} may contain some, but not all, the elements present in {}.",
            quote_name(&self.name),
            unwanted.describe()
        );
        self.check_difference(&unwanted, text, |difference| {
            if difference.only_in_other().is_empty() {
                Err(Diagnostics::new())
            } else {
                Ok(())
            }
        })
    }

    /// Ensures that no element appears more than once.
    ///
    /// On failure the message lists the `duplicates`.
    #[track_caller]
    pub fn does_not_contain_duplicates(self) -> ValidationResult<Self> {
        let text = format!("{} may not contain any duplicate elements.", quote_name(&self.name));
        let equality = self.configuration.equality_method();
        self.check_elements(text, None, |actual| {
            let duplicates = duplicates(actual, equality, C::UNIQUE);
            if duplicates.is_empty() {
                Ok(())
            } else {
                Err(vec![("duplicates", list(&duplicates))])
            }
        })
    }

    /// Ensures that the elements are ordered according to `comparator`.
    ///
    /// On failure the message lists the `expected` order.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::check_if;
    ///
    /// let messages = check_if(vec![3, 1, 2], "actual")?
    ///     .is_sorted(|a: &i32, b: &i32| a.cmp(b))?
    ///     .else_get_messages();
    /// assert_eq!(
    ///     messages[0],
    ///     "\"actual\" must be sorted.\nactual  : [3, 1, 2]\nexpected: [1, 2, 3]"
    /// );
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn is_sorted<F>(self, mut comparator: F) -> ValidationResult<Self>
    where
        F: FnMut(&C::Item, &C::Item) -> Ordering,
    {
        let text = format!("{} must be sorted.", quote_name(&self.name));
        self.check_elements(text, None, |actual| {
            match sorted_if_unsorted(actual, |first, second| comparator(first, second)) {
                None => Ok(()),
                Some(sorted) => Err(vec![("expected", list(&sorted))]),
            }
        })
    }

    /// Validates the elements as a list, under the name `"<name>.as_list()"`.
    #[track_caller]
    pub fn as_list(self) -> ValidationResult<Validator<Vec<C::Item>>>
    where
        C::Item: Clone,
    {
        self.project("as_list()", |value| value.elements().into_iter().cloned().collect())
    }
}

/// Describes an operand's elements: `the elements [1, 2]` when anonymous,
/// `the same elements as "expected"` when named.
fn elements_of<E: Debug>(operand: &Operand<Vec<E>>) -> String {
    match operand.name() {
        Some(_) => format!("the same elements as {}", operand.describe()),
        None => format!("the elements {}", operand.describe()),
    }
}
