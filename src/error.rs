use thiserror::Error;

/// Everything that can go wrong when building or deriving a [`Tensor`](crate::Tensor).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TensorError {
    #[error("size mismatch: shape holds {expected} elements, data has {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("dimension count mismatch: {left} vs {right}")]
    DimensionCountMismatch { left: usize, right: usize },

    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("dimension out of range: dim {dim} for a tensor of rank {ndim}")]
    DimensionOutOfRange { dim: usize, ndim: usize },

    #[error("index out of range: index {index} along dim {dim} of size {size}")]
    IndexOutOfRange { index: usize, dim: usize, size: usize },

    #[error("unsupported tensor rank: {0}")]
    UnsupportedRank(usize),

    #[error("layout error: {0}")]
    Layout(String),
}

impl From<ndarray::ShapeError> for TensorError {
    fn from(e: ndarray::ShapeError) -> Self {
        TensorError::Layout(e.to_string())
    }
}
