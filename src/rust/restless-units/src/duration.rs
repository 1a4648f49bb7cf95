// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use num_traits::{AsPrimitive, Float};
use std::fmt::Result as FormatterResult;
use std::fmt::{self, Debug, Display, Formatter};

/// A duration tagged with its unit.
///
/// Repetition delays and decoherence constants are both carried as
/// `Duration<Seconds>`, so a delay can only be compared against, or divided by,
/// a quantity of the same unit.
///
/// # Type Parameter
/// - `U`: The unit of the value (a zero-sized marker)
/// - `T`: The underlying value (typically a floating point number)
///
/// # Examples
/// ```rust
/// use restless_units::duration::seconds;
///
/// let rep_delay = seconds(0.5);
/// let t1 = seconds(2.0);
/// assert_eq!(rep_delay.ratio(t1), 0.25);
/// ```
#[derive(Clone, Copy)]
pub struct Duration<U, T = f64> {
    value: T,
    unit: U,
}

impl<U, T: Float> Duration<U, T> {
    /// The raw value, expressed in unit `U`.
    pub fn value(&self) -> T {
        self.value
    }

    /// Ratio of two durations of the same unit.
    pub fn ratio(self, other: Self) -> T {
        self.value / other.value
    }

    /// Whether the duration is finite and strictly greater than zero.
    pub fn is_positive_finite(&self) -> bool {
        self.value.is_finite() && self.value > T::zero()
    }
}

impl<T: Float, U> PartialEq for Duration<U, T> {
    fn eq(&self, other: &Self) -> bool {
        let a = self.value;
        let b = other.value;
        if a.is_zero() && b.is_zero() {
            true
        } else {
            a == b
        }
    }
}

impl<T: Float, U> PartialOrd for Duration<U, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Debug, U> Debug for Duration<U, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatterResult {
        f.debug_struct("Duration")
            .field("value", &self.value)
            .field("unit", &std::any::type_name::<U>())
            .finish()
    }
}

fn round_to_significant_digits(x: f64, n: u32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        x
    } else {
        let order = x.abs().log10().floor();
        let scale = 10f64.powf((n as f64) - 1.0 - order);
        (x * scale).round() / scale
    }
}

impl<U, T> Display for Duration<U, T>
where
    T: Display + Debug + AsPrimitive<f64> + Float,
    U: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            Display::fmt(&self.value, f)?;
        } else {
            // Round slightly below epsilon so accumulated float noise does not
            // end up in error messages.
            let significand_digits = (-T::epsilon().log10() - T::one()).as_() as u32;
            let value = round_to_significant_digits(self.value.as_(), significand_digits);
            Debug::fmt(&value, f)?;
        }
        write!(f, " ")?;
        self.unit.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Seconds;

impl Display for Seconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatterResult {
        write!(f, "s")
    }
}

impl<T: Float, U: Default> From<T> for Duration<U, T> {
    fn from(value: T) -> Self {
        Duration {
            value,
            unit: U::default(),
        }
    }
}

pub const fn seconds<T>(value: T) -> Duration<Seconds, T> {
    Duration {
        value,
        unit: Seconds,
    }
}

/// Durations serialize as their bare value, in the unit of the type.
#[cfg(feature = "serde")]
mod serde_impl {
    use super::Duration;
    use num_traits::Float;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<U, T: Serialize> Serialize for Duration<U, T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.value.serialize(serializer)
        }
    }

    impl<'de, U: Default, T: Float + Deserialize<'de>> Deserialize<'de> for Duration<U, T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            T::deserialize(deserializer).map(Duration::from)
        }
    }
}
