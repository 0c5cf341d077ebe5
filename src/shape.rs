//! Shape and stride utilities for tensors.

use std::fmt;

/// A tensor shape: one extent per dimension.
#[derive(Clone, PartialEq, Eq)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dims: &[usize]) -> Self {
        Shape(dims.to_vec())
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Total number of elements, or `None` if the shape cannot be stored.
    ///
    /// The empty shape has exactly one element. A shape is storable when the
    /// product of its non-zero extents fits in `isize`, even if some other
    /// extent is zero.
    pub fn numel(&self) -> Option<usize> {
        let nonzero = self
            .0
            .iter()
            .filter(|&&d| d != 0)
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))?;
        if nonzero > isize::MAX as usize {
            return None;
        }
        if self.0.contains(&0) {
            Some(0)
        } else {
            Some(nonzero)
        }
    }

    /// Row-major (C-contiguous) strides, measured in elements.
    pub fn contiguous_strides(&self) -> Vec<usize> {
        let mut strides = vec![1usize; self.0.len()];
        for i in (0..self.0.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * self.0[i + 1];
        }
        strides
    }

    /// Product of the extents before `dim`.
    pub fn outer_size(&self, dim: usize) -> usize {
        self.0[..dim].iter().product()
    }

    /// Same shape with the extent of `dim` replaced.
    pub fn with_dim(&self, dim: usize, extent: usize) -> Shape {
        let mut dims = self.0.clone();
        dims[dim] = extent;
        Shape(dims)
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({:?})", self.0)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
