//! Gathering slices of a tensor along one axis.
//!
//! The copy is a single walk over a row-major stride table. For a selection
//! along `dim` the buffer splits into `outer` blocks (the product of the
//! extents before `dim`), each holding `shape[dim]` runs of `inner` elements
//! (the stride of `dim`). Every requested index copies one run out of every
//! block:
//!
//! - rank 1: `outer == inner == 1`, each index picks one element;
//! - rank 2, `dim == 0`: `outer == 1`, each index copies a whole row;
//! - rank 2, `dim == 1`: `inner == 1`, each row contributes one element per index.

use crate::error::TensorError;
use crate::shape::Shape;
use crate::tensor::Tensor;
use crate::Result;

/// Largest rank `index_select` accepts.
pub const MAX_SELECT_RANK: usize = 2;

impl Tensor {
    /// Select entries along `dim` using `indices`.
    ///
    /// The output keeps every other axis in full and in order; the extent of
    /// `dim` becomes `indices.len()`. Indices may repeat and are copied in the
    /// order given.
    ///
    /// # Errors
    ///
    /// Checked in order before anything is copied:
    /// - [`TensorError::DimensionOutOfRange`] when `dim >= self.ndim()`;
    /// - [`TensorError::IndexOutOfRange`] for the first index `>= shape[dim]`;
    /// - [`TensorError::UnsupportedRank`] for tensors of rank above 2.
    ///
    /// ```
    /// use mini_tensor::Tensor;
    ///
    /// let t = Tensor::new(vec![1, 2, 3, 4], &[2, 2]).unwrap();
    /// let rows = t.index_select(0, &[1, 1, 0]).unwrap();
    /// assert_eq!(rows.shape(), &[3, 2]);
    /// assert_eq!(rows.to_vec(), vec![3, 4, 3, 4, 1, 2]);
    /// ```
    pub fn index_select(&self, dim: usize, indices: &[usize]) -> Result<Tensor> {
        let ndim = self.ndim();
        if dim >= ndim {
            tracing::trace!(dim, ndim, "index_select: dimension out of range");
            return Err(TensorError::DimensionOutOfRange { dim, ndim });
        }

        let size = self.shape()[dim];
        if let Some(&index) = indices.iter().find(|&&i| i >= size) {
            tracing::trace!(dim, index, size, "index_select: index out of range");
            return Err(TensorError::IndexOutOfRange { index, dim, size });
        }

        if ndim > MAX_SELECT_RANK {
            return Err(TensorError::UnsupportedRank(ndim));
        }

        let shape = Shape::new(self.shape());
        let data = gather(&self.elements(), &shape, dim, indices);
        let out_shape = shape.with_dim(dim, indices.len());

        tracing::debug!(dim, n_indices = indices.len(), shape = %out_shape, "index_select");
        Tensor::from_shape_vec(&out_shape, data)
    }
}

/// Copy the runs addressed by `indices` along `dim` out of a row-major buffer.
///
/// Callers validate `dim` and every index against `shape`.
fn gather(data: &[i64], shape: &Shape, dim: usize, indices: &[usize]) -> Vec<i64> {
    let inner = shape.contiguous_strides()[dim];
    let outer = shape.outer_size(dim);
    let block = shape.dims()[dim] * inner;

    let mut out = Vec::with_capacity(outer * indices.len() * inner);
    for o in 0..outer {
        let base = o * block;
        for &index in indices {
            let start = base + index * inner;
            out.extend_from_slice(&data[start..start + inner]);
        }
    }
    out
}
