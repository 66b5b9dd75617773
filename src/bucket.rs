//! Bucket distances of a single curve.
mod batch;

use crate::{
    error::BucketError,
    traits::Scalar,
    utils::{check_shape, consecutive},
};
use ndarray::{Array1, ArrayBase, ArrayView1, ArrayViewMut1, Data, Ix1, Zip};

/// How the distance of a bucket is measured.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKind {
    /// Euclidean length of the segment joining the two samples, see
    /// [`curve_bucket`].
    #[default]
    Curve,
    /// Width of the segment along the x axis, see [`x_bucket`].
    X,
    /// See [`y_bucket`].
    ///
    /// **Currently measured along the x axis**, exactly like [`BucketKind::X`].
    Y,
}

impl BucketKind {
    /// Computes the buckets of the curve sampled at `(x, y)` with the function
    /// matching `self`.
    pub fn apply<Sx, Sy, T>(
        &self,
        x: &ArrayBase<Sx, Ix1>,
        y: &ArrayBase<Sy, Ix1>,
    ) -> Result<Array1<T>, BucketError>
    where
        Sx: Data<Elem = T>,
        Sy: Data<Elem = T>,
        T: Scalar,
    {
        check_shape(x.shape(), y.shape())?;
        let mut buckets = Array1::zeros(x.len().saturating_sub(1));
        self.fill(x.view(), y.view(), buckets.view_mut());
        Ok(buckets)
    }

    /// Writes the buckets of `(x, y)` into `out`.
    ///
    /// `x` and `y` must have the same length `n` and `out` the length `n - 1`
    /// (or 0 when `n < 2`).
    fn fill<T: Scalar>(&self, x: ArrayView1<T>, y: ArrayView1<T>, out: ArrayViewMut1<T>) {
        match self {
            Self::Curve => segment_length(x, y, out),
            // y buckets are measured along x too.
            Self::X | Self::Y => abs_step(x, out),
        }
    }
}

/// Euclidean distance between consecutive samples `(x[i], y[i])` and
/// `(x[i+1], y[i+1])`.
///
/// The output has one element less than the inputs, it is empty when the
/// inputs have less than two samples.
///
/// # Errors
/// [`BucketError::ShapeMismatch`] when `x` and `y` have different lengths.
///
/// # Example
/// ```
/// use bucketing::curve_bucket;
/// use ndarray::array;
///
/// let buckets = curve_bucket(&array![0., 3.], &array![0., 4.]).unwrap();
/// assert_eq!(buckets, array![5.]);
/// ```
pub fn curve_bucket<Sx, Sy, T>(
    x: &ArrayBase<Sx, Ix1>,
    y: &ArrayBase<Sy, Ix1>,
) -> Result<Array1<T>, BucketError>
where
    Sx: Data<Elem = T>,
    Sy: Data<Elem = T>,
    T: Scalar,
{
    BucketKind::Curve.apply(x, y)
}

/// Absolute difference `|x[i+1] - x[i]|` between consecutive abscissas.
///
/// `y` is only used to check the shapes.
///
/// # Errors
/// [`BucketError::ShapeMismatch`] when `x` and `y` have different lengths.
pub fn x_bucket<Sx, Sy, T>(
    x: &ArrayBase<Sx, Ix1>,
    y: &ArrayBase<Sy, Ix1>,
) -> Result<Array1<T>, BucketError>
where
    Sx: Data<Elem = T>,
    Sy: Data<Elem = T>,
    T: Scalar,
{
    BucketKind::X.apply(x, y)
}

/// Bucket width used for the y axis.
///
/// The width is measured along **x**: the result is `|x[i+1] - x[i]|`, equal
/// to [`x_bucket`] on the same inputs. Metrics built on top of it rely on
/// this.
///
/// # Errors
/// [`BucketError::ShapeMismatch`] when `x` and `y` have different lengths.
pub fn y_bucket<Sx, Sy, T>(
    x: &ArrayBase<Sx, Ix1>,
    y: &ArrayBase<Sy, Ix1>,
) -> Result<Array1<T>, BucketError>
where
    Sx: Data<Elem = T>,
    Sy: Data<Elem = T>,
    T: Scalar,
{
    BucketKind::Y.apply(x, y)
}

fn segment_length<T: Scalar>(x: ArrayView1<T>, y: ArrayView1<T>, out: ArrayViewMut1<T>) {
    let (Some((x_start, x_end)), Some((y_start, y_end))) = (consecutive(&x), consecutive(&y))
    else {
        return;
    };
    Zip::from(out)
        .and(x_start)
        .and(x_end)
        .and(y_start)
        .and(y_end)
        .for_each(|b, &xa, &xb, &ya, &yb| {
            let (dx, dy) = (xb - xa, yb - ya);
            *b = (dx * dx + dy * dy).sqrt();
        });
}

fn abs_step<T: Scalar>(a: ArrayView1<T>, out: ArrayViewMut1<T>) {
    if let Some((start, end)) = consecutive(&a) {
        Zip::from(out)
            .and(start)
            .and(end)
            .for_each(|b, &p, &q| *b = (q - p).abs());
    }
}
