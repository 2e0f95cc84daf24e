//! Core traits for conversion inputs
//!
//! These traits describe what a temperature value has to be before it can be
//! converted. Keep them small: a number that widens to `f64`, and a check
//! that it is a real number at all.

/// Numeric types accepted by the generic dispatcher.
///
/// Any primitive integer or float converts; everything else is rejected at
/// compile time. Wide integers that exceed `f64` precision are rounded the
/// same way an `as` cast rounds them.
pub trait Numeric: Copy {
    /// Widen the value to `f64`
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is physically valid (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
