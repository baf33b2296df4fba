//! The minimum separation allowed between kept points.
use crate::error::{ReductionError, Result};
use metfor::{Feet, Km, Meters, Quantity};

/// Minimum allowed distance between two kept points.
///
/// A plain `f64` is used as-is and must be in the same unit as the points. The metfor length
/// types are converted to meters, so the points must be in meters when using them.
///
/// # Examples
///
/// ```rust
/// use metfor::{Km, Meters};
/// use point_density::Radius;
///
/// assert_eq!(Radius::from(Km(175.0)), Radius::from(175_000.0));
/// assert_eq!(Radius::from(Meters(20.0)).value(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Radius(f64);

impl Radius {
    /// The raw value of the radius.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// A zero radius keeps every point.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Check the radius can be used for a reduction, it must be finite and not negative.
    pub(crate) fn validate(self) -> Result<Self> {
        if self.0.is_nan() || self.0.is_infinite() {
            Err(ReductionError::InvalidRadius)
        } else if self.0 < 0.0 {
            Err(ReductionError::NegativeRadius)
        } else {
            Ok(self)
        }
    }
}

impl From<f64> for Radius {
    #[inline]
    fn from(val: f64) -> Self {
        Radius(val)
    }
}

macro_rules! radius_from_length {
    ($($length:ty),*) => {
        $(
            impl From<$length> for Radius {
                #[inline]
                fn from(val: $length) -> Self {
                    Radius(Meters::from(val).unpack())
                }
            }
        )*
    };
}

radius_from_length!(Km, Feet);

impl From<Meters> for Radius {
    #[inline]
    fn from(val: Meters) -> Self {
        Radius(val.unpack())
    }
}
