//! # mini-tensor
//!
//! A small dense tensor over `i64` elements.
//!
//! Provides an immutable [`Tensor`] value with:
//! - checked construction from a flat row-major buffer and a shape
//! - reshape that shares the underlying buffer
//! - element-wise (Hadamard) multiplication
//! - `index_select`, gathering slices along one axis of a rank 1 or 2 tensor
//!
//! Every operation validates its inputs first and reports failures as a
//! [`TensorError`]; nothing panics on bad input.
//!
//! ```
//! use mini_tensor::Tensor;
//!
//! let t = Tensor::new(vec![1, 2, 3, 4], &[2, 2]).unwrap();
//! let cols = t.index_select(1, &[0, 0, 1, 1]).unwrap();
//! assert_eq!(cols.shape(), &[2, 4]);
//! assert_eq!(cols.to_vec(), vec![1, 1, 2, 2, 3, 3, 4, 4]);
//! ```

pub mod error;
pub mod index_select;
pub mod operation;
pub mod shape;
pub mod tensor;

pub use error::TensorError;
pub use shape::Shape;
pub use tensor::Tensor;

pub type Result<T> = std::result::Result<T, TensorError>;
