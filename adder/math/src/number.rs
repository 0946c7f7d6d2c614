use {
    crate::{MathError, MathResult, NumberConst},
    bnum::types::{I256, I512, U256, U512},
};

/// Describes the additions that every operand type must implement.
///
/// The three methods differ only in what happens when the true sum does not
/// fit in `Self`.
pub trait Number: Sized + Copy + NumberConst {
    fn checked_add(self, other: Self) -> MathResult<Self>;

    fn wrapping_add(self, other: Self) -> Self;

    fn saturating_add(self, other: Self) -> Self;

    #[inline]
    fn checked_add_assign(&mut self, other: Self) -> MathResult<()> {
        *self = self.checked_add(other)?;
        Ok(())
    }

    #[inline]
    fn wrapping_add_assign(&mut self, other: Self) {
        *self = self.wrapping_add(other);
    }

    #[inline]
    fn saturating_add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_number {
    ($t:ty) => {
        impl Number for $t {
            fn checked_add(self, other: Self) -> MathResult<Self> {
                self.checked_add(other)
                    .ok_or_else(|| MathError::overflow_add(self, other))
            }

            fn wrapping_add(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            fn saturating_add(self, other: Self) -> Self {
                self.saturating_add(other)
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_number!($t);
        )+
    };
}

impl_number! {
    u8, u16, u32, u64, u128, usize, U256, U512,
    i8, i16, i32, i64, i128, isize, I256, I512,
}

// ----------------------------------- tests -----------------------------------
