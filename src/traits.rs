use crate::bucket::BucketKind;
use num_traits::Float;

/// Computes the buckets of one or several curves.
///
/// `Rhs` holds the ordinates, `self` the abscissas. They may use different
/// storages, e.g. an owned array and a view.
pub trait Bucketing<Rhs = Self> {
    type Output;
    /// Distances between consecutive samples of the curve(s) sampled at
    /// `(self, y)`, measured as `kind` says.
    fn bucket(&self, y: &Rhs, kind: BucketKind) -> Self::Output;
}

/// Floating point numbers the buckets can be computed on.
///
/// Implemented for `f32` and `f64`. Any other [`Float`] (e.g. a dual number
/// type carrying derivatives) can implement it to flow through the bucket
/// functions.
pub trait Scalar
where
    Self: Float + core::fmt::Debug + Send + Sync + 'static,
{
}
macro_rules! impl_scalar {
    ($t:ty) => {
        impl Scalar for $t {}
    };
}
impl_scalar!(f32);
impl_scalar!(f64);
