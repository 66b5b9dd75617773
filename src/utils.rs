use crate::error::BucketError;
use ndarray::{s, ArrayBase, ArrayView1, Data, Ix1};

/// Fails unless `x` and `y` have the same shape.
pub(crate) fn check_shape(x_shape: &[usize], y_shape: &[usize]) -> Result<(), BucketError> {
    if x_shape != y_shape {
        return Err(BucketError::ShapeMismatch {
            x_shape: x_shape.to_vec(),
            y_shape: y_shape.to_vec(),
        });
    }
    Ok(())
}

/// Views `a[..-1]` and `a[1..]`, i.e the starts and the ends of the buckets.
///
/// Returns `None` when `a` has less than two samples.
pub(crate) fn consecutive<S, T>(a: &ArrayBase<S, Ix1>) -> Option<(ArrayView1<'_, T>, ArrayView1<'_, T>)>
where
    S: Data<Elem = T>,
{
    if a.len() < 2 {
        return None;
    }
    Some((a.slice(s![..-1]), a.slice(s![1..])))
}

#[cfg(test)]
pub(crate) fn l2_diff<S1, S2, T, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> T
where
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    T: num_traits::Float + core::iter::Sum,
    D: ndarray::Dimension,
{
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum::<T>()
        .sqrt()
}
