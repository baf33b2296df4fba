//! Apply a selection mask to the observations that go with the thinned points.
use crate::error::{ReductionError, Result};
use itertools::izip;

/// Keep the values whose mask entry is `true`, in their original order.
///
/// # Examples
///
/// ```rust
/// use point_density::apply_mask;
///
/// let temperatures = [12.5, 11.0, 9.8];
/// let kept = apply_mask(&temperatures, &[true, false, true]).unwrap();
/// assert_eq!(kept, vec![12.5, 9.8]);
///
/// assert!(apply_mask(&temperatures, &[true]).is_err());
/// ```
pub fn apply_mask<T: Clone>(values: &[T], mask: &[bool]) -> Result<Vec<T>> {
    if values.len() != mask.len() {
        return Err(ReductionError::MaskLengthMismatch {
            values: values.len(),
            mask: mask.len(),
        });
    }

    Ok(izip!(values, mask)
        .filter(|&(_, &keep)| keep)
        .map(|(val, _)| val.clone())
        .collect())
}

/// Indexes of the kept entries.
///
/// # Examples
///
/// ```rust
/// use point_density::kept_indices;
///
/// assert_eq!(kept_indices(&[false, true, true, false]), vec![1, 2]);
/// ```
pub fn kept_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &keep)| if keep { Some(i) } else { None })
        .collect()
}

/// Number of kept entries.
#[inline]
pub fn kept_count(mask: &[bool]) -> usize {
    mask.iter().filter(|&&keep| keep).count()
}
