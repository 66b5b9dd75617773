//! Distances between consecutive samples of a curve.
//!
//! A curve sampled at points `(x[i], y[i])` is cut into buckets, one per pair
//! of consecutive samples. Each bucket is characterized by a scalar distance
//! that downstream losses and metrics aggregate over.
extern crate alloc;

mod bucket;
mod error;
mod traits;
mod utils;

pub use bucket::{curve_bucket, x_bucket, y_bucket, BucketKind};
pub use error::BucketError;
pub use traits::{Bucketing, Scalar};
