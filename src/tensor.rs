use std::borrow::Cow;
use std::fmt;

use ndarray::{ArcArray, IxDyn};

use crate::error::TensorError;
use crate::shape::Shape;
use crate::Result;

/// An immutable, dense, row-major tensor of `i64` elements.
///
/// The element buffer is reference counted: cloning a tensor or reshaping it
/// shares the buffer instead of copying it. Since no operation mutates a
/// tensor in place, sharing is never observable through values.
///
/// ```
/// use mini_tensor::Tensor;
///
/// let t = Tensor::new(vec![1, 2, 3, 4], &[2, 2]).unwrap();
/// let flat = t.reshape(&[4, 1]).unwrap();
/// assert_eq!(flat.shape(), &[4, 1]);
/// assert!(flat.shares_buffer(&t));
/// ```
#[derive(Clone)]
pub struct Tensor {
    data: ArcArray<i64, IxDyn>,
}

impl Tensor {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Build a tensor from flat row-major `data` and a `shape`.
    ///
    /// Fails with [`TensorError::SizeMismatch`] unless the product of `shape`
    /// equals `data.len()`. The empty shape describes a scalar and needs
    /// exactly one element. Shapes whose non-zero extents multiply past
    /// `isize::MAX` cannot be stored and report `expected == usize::MAX`.
    pub fn new(data: Vec<i64>, shape: &[usize]) -> Result<Self> {
        let shape = Shape::new(shape);
        check_size(&shape, data.len())?;
        Self::from_shape_vec(&shape, data)
    }

    /// A rank-0 tensor holding `value`.
    pub fn scalar(value: i64) -> Self {
        Tensor {
            data: ArcArray::from_elem(IxDyn(&[]), value),
        }
    }

    /// Wrap a buffer already known to match `shape`.
    pub(crate) fn from_shape_vec(shape: &Shape, data: Vec<i64>) -> Result<Self> {
        let data = ArcArray::from_shape_vec(IxDyn(shape.dims()), data)?;
        Ok(Tensor { data })
    }

    pub(crate) fn from_array(data: ArcArray<i64, IxDyn>) -> Self {
        Tensor { data }
    }

    pub(crate) fn array(&self) -> &ArcArray<i64, IxDyn> {
        &self.data
    }

    // =========================================================================
    // Properties
    // =========================================================================

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Flattened row-major copy of the elements.
    pub fn to_vec(&self) -> Vec<i64> {
        self.elements().into_owned()
    }

    /// Element at a multi-dimensional index, or `None` when out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<i64> {
        if index.len() != self.ndim() {
            return None;
        }
        self.data.get(index).copied()
    }

    /// Whether both tensors read from the same element buffer.
    ///
    /// Empty tensors never share.
    pub fn shares_buffer(&self, other: &Tensor) -> bool {
        self.numel() > 0 && self.data.as_ptr() == other.data.as_ptr()
    }

    /// Row-major element slice. Borrowed for standard layout, which every
    /// tensor built by this crate has.
    pub(crate) fn elements(&self) -> Cow<'_, [i64]> {
        match self.data.as_slice() {
            Some(slice) => Cow::Borrowed(slice),
            None => Cow::Owned(self.data.iter().copied().collect()),
        }
    }

    // =========================================================================
    // Shape operations
    // =========================================================================

    /// Same elements in the same order, viewed under `new_shape`.
    ///
    /// The result shares this tensor's buffer. Fails with
    /// [`TensorError::SizeMismatch`] when the element counts differ.
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Tensor> {
        let shape = Shape::new(new_shape);
        check_size(&shape, self.numel())?;
        let data = self.data.clone().into_shape(IxDyn(shape.dims()))?;
        tracing::debug!(from = ?self.shape(), to = %shape, "reshape");
        Ok(Tensor { data })
    }
}

fn check_size(shape: &Shape, actual: usize) -> Result<()> {
    match shape.numel() {
        Some(expected) if expected == actual => Ok(()),
        expected => {
            let expected = expected.unwrap_or(usize::MAX);
            tracing::trace!(%shape, expected, actual, "size mismatch");
            Err(TensorError::SizeMismatch { expected, actual })
        }
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for Tensor {}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("data", &self.elements())
            .finish()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested(f, &self.elements(), self.shape())
    }
}

fn write_nested(f: &mut fmt::Formatter<'_>, data: &[i64], dims: &[usize]) -> fmt::Result {
    match dims.split_first() {
        None => match data.first() {
            Some(v) => write!(f, "{}", v),
            None => Ok(()),
        },
        Some((&len, rest)) => {
            let chunk: usize = rest.iter().product();
            write!(f, "[")?;
            for i in 0..len {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_nested(f, &data[i * chunk..(i + 1) * chunk], rest)?;
            }
            write!(f, "]")
        }
    }
}
