//! Ranking points that compete for the same neighborhood.
//!
//! A higher priority point is finalized first and claims its neighborhood. Values that are
//! missing, like a NaN or an `Optioned` with no value, rank below every present value.
use chrono::{DateTime, NaiveDateTime, TimeZone};
use itertools::Itertools;
use optional::{Noned, Optioned};
use std::cmp::Ordering;

/// A value that can rank observations against each other.
pub trait Priority {
    /// This value carries no usable ranking and should be processed last.
    fn is_missing(&self) -> bool {
        false
    }

    /// Compare two values that are not missing. `Ordering::Greater` means `self` outranks
    /// `other`.
    fn rank_cmp(&self, other: &Self) -> Ordering;
}

/// Compare two priorities including missing values, which rank below everything else.
pub(crate) fn compare<P: Priority + ?Sized>(a: &P, b: &P) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.rank_cmp(b),
    }
}

/// Order the indexes of `priority` from highest to lowest. Equal priorities keep their input
/// order.
pub(crate) fn processing_order<P: Priority>(priority: &[P]) -> Vec<usize> {
    (0..priority.len())
        .sorted_by(|&i, &j| compare(&priority[j], &priority[i]))
        .collect()
}

macro_rules! ordered_priority {
    ($($t:ty),*) => {
        $(
            impl Priority for $t {
                #[inline]
                fn rank_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

ordered_priority!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char);

macro_rules! float_priority {
    ($($t:ty),*) => {
        $(
            impl Priority for $t {
                #[inline]
                fn is_missing(&self) -> bool {
                    self.is_nan()
                }

                #[inline]
                fn rank_cmp(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other).unwrap_or(Ordering::Equal)
                }
            }
        )*
    };
}

float_priority!(f32, f64);

impl<T: Priority> Priority for Option<T> {
    #[inline]
    fn is_missing(&self) -> bool {
        self.as_ref().map(T::is_missing).unwrap_or(true)
    }

    #[inline]
    fn rank_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => compare(a, b),
            (a, b) => a.is_some().cmp(&b.is_some()),
        }
    }
}

impl<T> Priority for Optioned<T>
where
    T: Noned + Copy + Priority,
{
    #[inline]
    fn is_missing(&self) -> bool {
        self.is_none() || self.unpack().is_missing()
    }

    #[inline]
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.into_option().rank_cmp(&other.into_option())
    }
}

/// The most recent observation wins.
impl Priority for NaiveDateTime {
    #[inline]
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// The most recent observation wins.
impl<Tz: TimeZone> Priority for DateTime<Tz> {
    #[inline]
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl<T: Priority + ?Sized> Priority for &T {
    #[inline]
    fn is_missing(&self) -> bool {
        (**self).is_missing()
    }

    #[inline]
    fn rank_cmp(&self, other: &Self) -> Ordering {
        (**self).rank_cmp(*other)
    }
}
