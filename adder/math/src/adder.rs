use {
    crate::{MathError, MathResult, Number},
    serde::{Deserialize, Serialize},
    std::str::FromStr,
    strum_macros::{Display, EnumString},
};

/// What to do when the sum of two operands does not fit the operand type.
#[derive(
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OverflowMode {
    /// Wrap around at the type's boundary, as plain machine addition does.
    #[default]
    Wrapping,
    /// Report the overflow as a [`MathError::OverflowAdd`].
    Checked,
    /// Clamp to the type's minimum or maximum.
    Saturating,
}

/// Add two integers the way the host's native integer arithmetic does.
///
/// The result wraps around on overflow, in debug and release builds alike.
#[inline]
pub fn sum<T>(a: T, b: T) -> T
where
    T: Number,
{
    a.wrapping_add(b)
}

/// Add two integers, failing if the sum is not representable.
#[inline]
pub fn checked_sum<T>(a: T, b: T) -> MathResult<T>
where
    T: Number,
{
    a.checked_add(b)
}

/// Add two integers, clamping the sum to the type's bounds.
#[inline]
pub fn saturating_sum<T>(a: T, b: T) -> T
where
    T: Number,
{
    a.saturating_add(b)
}

/// Parse a decimal string into an operand.
pub fn parse_operand<T>(s: &str) -> MathResult<T>
where
    T: FromStr,
    <T as FromStr>::Err: ToString,
{
    T::from_str(s).map_err(|err| MathError::parse_number::<T, _, _>(s, err))
}

/// Adds operands under a fixed [`OverflowMode`].
///
/// An `Adder` holds no state besides its mode, so it can be copied freely and
/// shared across threads.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adder {
    mode: OverflowMode,
}

impl Adder {
    pub const fn new(mode: OverflowMode) -> Self {
        Self { mode }
    }

    pub const fn mode(&self) -> OverflowMode {
        self.mode
    }

    /// Add two operands. Only fails in [`OverflowMode::Checked`].
    pub fn add<T>(&self, a: T, b: T) -> MathResult<T>
    where
        T: Number,
    {
        match self.mode {
            OverflowMode::Wrapping => Ok(sum(a, b)),
            OverflowMode::Checked => checked_sum(a, b),
            OverflowMode::Saturating => Ok(saturating_sum(a, b)),
        }
    }

    /// Add any number of operands, left to right, starting from zero.
    pub fn add_all<T, I>(&self, operands: I) -> MathResult<T>
    where
        T: Number,
        I: IntoIterator<Item = T>,
    {
        operands
            .into_iter()
            .try_fold(T::ZERO, |acc, operand| self.add(acc, operand))
    }
}

// ----------------------------------- tests -----------------------------------
