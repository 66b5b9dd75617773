use super::BucketKind;
use crate::{error::BucketError, traits::Bucketing, traits::Scalar, utils::check_shape};
use log::trace;
use ndarray::{Array1, Array2, ArrayBase, ArrayView2, Axis, Data, Ix1, Ix2};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

impl<Sx, Sy, T> Bucketing<ArrayBase<Sy, Ix1>> for ArrayBase<Sx, Ix1>
where
    Sx: Data<Elem = T>,
    Sy: Data<Elem = T>,
    T: Scalar,
{
    type Output = Result<Array1<T>, BucketError>;
    fn bucket(&self, y: &ArrayBase<Sy, Ix1>, kind: BucketKind) -> Self::Output {
        kind.apply(self, y)
    }
}

/// One curve per column: `x[[i, c]]` and `y[[i, c]]` are the coordinates of
/// sample `i` of curve `c`. Buckets are computed along `Axis(0)`, the result
/// has shape `(n_samples - 1, n_curves)`.
impl<Sx, Sy, T> Bucketing<ArrayBase<Sy, Ix2>> for ArrayBase<Sx, Ix2>
where
    Sx: Data<Elem = T>,
    Sy: Data<Elem = T>,
    T: Scalar,
{
    type Output = Result<Array2<T>, BucketError>;
    fn bucket(&self, y: &ArrayBase<Sy, Ix2>, kind: BucketKind) -> Self::Output {
        check_shape(self.shape(), y.shape())?;
        let (n_samples, n_curves) = self.dim();
        trace!(
            "{:?} buckets of {} curves with {} samples each",
            kind,
            n_curves,
            n_samples
        );
        let mut buckets = Array2::zeros((n_samples.saturating_sub(1), n_curves));
        fill_columns(self.view(), y.view(), &mut buckets, kind);
        Ok(buckets)
    }
}

#[cfg(not(feature = "rayon"))]
fn fill_columns<T: Scalar>(
    x: ArrayView2<T>,
    y: ArrayView2<T>,
    buckets: &mut Array2<T>,
    kind: BucketKind,
) {
    buckets
        .axis_iter_mut(Axis(1))
        .zip(x.axis_iter(Axis(1)))
        .zip(y.axis_iter(Axis(1)))
        .for_each(|((out, x_col), y_col)| kind.fill(x_col, y_col, out));
}

#[cfg(feature = "rayon")]
fn fill_columns<T: Scalar>(
    x: ArrayView2<T>,
    y: ArrayView2<T>,
    buckets: &mut Array2<T>,
    kind: BucketKind,
) {
    buckets
        .axis_iter_mut(Axis(1))
        .into_par_iter()
        .zip(x.axis_iter(Axis(1)).into_par_iter())
        .zip(y.axis_iter(Axis(1)).into_par_iter())
        .for_each(|((out, x_col), y_col)| kind.fill(x_col, y_col, out));
}
