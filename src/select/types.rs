//! Core trait for selectable values.

/// A value that can be ranked by the selection engine.
///
/// Values must be cheaply copyable and comparable with `<`. Each type names
/// a sentinel: the minimal representable value of its domain, used to
/// pre-fill the working set under [`Initialization::Sentinel`].
///
/// Built-in implementations exist for all primitive integer and float types.
///
/// # Sentinel Leak
///
/// Sentinel initialization is only exact when every input value is strictly
/// greater than [`Value::sentinel`]. Otherwise a sentinel can survive into
/// the result. This is boundary behaviour, not an error.
///
/// [`Initialization::Sentinel`]: super::Initialization::Sentinel
pub trait Value: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns the minimal representable value (conceptually negative infinity).
    fn sentinel() -> Self;

    /// Returns `false` for values outside the total order (e.g. NaN).
    fn is_comparable(&self) -> bool {
        true
    }
}

macro_rules! impl_integer_value {
    ($($t:ty),*) => {
        $(
            impl Value for $t {
                fn sentinel() -> Self {
                    <$t>::MIN
                }
            }
        )*
    };
}

impl_integer_value!(i8, i16, i32, i64, i128, isize);
impl_integer_value!(u8, u16, u32, u64, u128, usize);

impl Value for f64 {
    fn sentinel() -> Self {
        f64::NEG_INFINITY
    }

    fn is_comparable(&self) -> bool {
        !self.is_nan()
    }
}

impl Value for f32 {
    fn sentinel() -> Self {
        f32::NEG_INFINITY
    }

    fn is_comparable(&self) -> bool {
        !self.is_nan()
    }
}
