use alloc::vec::Vec;
use thiserror_no_std::Error;

/// Error manager.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BucketError {
    /// `x` and `y` do not have the same shape, elementwise operations are
    /// impossible.
    #[error("shape mismatch: x has shape {x_shape:?} but y has shape {y_shape:?}")]
    ShapeMismatch {
        x_shape: Vec<usize>,
        y_shape: Vec<usize>,
    },
}
