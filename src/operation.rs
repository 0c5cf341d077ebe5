use std::ops::Mul;

use ndarray::Zip;

use crate::error::TensorError;
use crate::tensor::Tensor;
use crate::Result;

impl Tensor {
    /// Element-wise multiplication of two tensors of identical shape.
    ///
    /// Ranks are compared first ([`TensorError::DimensionCountMismatch`]),
    /// then extents ([`TensorError::ShapeMismatch`]). There is no
    /// broadcasting. Products wrap on `i64` overflow.
    pub fn hadamard_product(&self, other: &Tensor) -> Result<Tensor> {
        if self.ndim() != other.ndim() {
            return Err(TensorError::DimensionCountMismatch {
                left: self.ndim(),
                right: other.ndim(),
            });
        }
        if self.shape() != other.shape() {
            return Err(TensorError::ShapeMismatch {
                left: self.shape().to_vec(),
                right: other.shape().to_vec(),
            });
        }

        let data = Zip::from(self.array())
            .and(other.array())
            .map_collect(|a, b| a.wrapping_mul(*b))
            .into_shared();

        tracing::debug!(shape = ?self.shape(), "hadamard product");
        Ok(Tensor::from_array(data))
    }
}

impl<'a> Mul<&'a Tensor> for &'a Tensor {
    type Output = Result<Tensor>;

    fn mul(self, rhs: &'a Tensor) -> Result<Tensor> {
        self.hadamard_product(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(data: Vec<i64>, shape: &[usize]) -> Tensor {
        Tensor::new(data, shape).unwrap()
    }

    #[test]
    fn test_hadamard_product() {
        let a = t(vec![1, 2, 3, 4], &[2, 2]);
        let b = t(vec![2, 0, 1, 2], &[2, 2]);
        let c = a.hadamard_product(&b).unwrap();
        assert_eq!(c.shape(), &[2, 2]);
        assert_eq!(c.to_vec(), vec![2, 0, 3, 8]);
    }

    #[test]
    fn test_mul_operator() {
        let a = t(vec![1, -2, 3], &[3]);
        let b = t(vec![4, 5, -6], &[3]);
        let c = (&a * &b).unwrap();
        assert_eq!(c.to_vec(), vec![4, -10, -18]);
    }

    #[test]
    fn test_dimension_count_checked_first() {
        let a = t(vec![1, 2, 3, 4], &[4]);
        let b = t(vec![1, 2, 3, 4], &[2, 2]);
        assert_eq!(
            a.hadamard_product(&b),
            Err(TensorError::DimensionCountMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn test_shape_mismatch() {
        let a = t(vec![1, 2, 3, 4, 5, 6], &[2, 3]);
        let b = t(vec![1, 2, 3, 4, 5, 6], &[3, 2]);
        assert_eq!(
            a.hadamard_product(&b),
            Err(TensorError::ShapeMismatch {
                left: vec![2, 3],
                right: vec![3, 2],
            })
        );
    }

    #[test]
    fn test_scalars() {
        let c = Tensor::scalar(6).hadamard_product(&Tensor::scalar(7)).unwrap();
        assert_eq!(c.ndim(), 0);
        assert_eq!(c.to_vec(), vec![42]);
    }

    #[test]
    fn test_overflow_wraps() {
        let a = t(vec![i64::MAX], &[1]);
        let b = t(vec![2], &[1]);
        assert_eq!(a.hadamard_product(&b).unwrap().to_vec(), vec![-2]);
    }

    #[test]
    fn test_zero_extent_operands() {
        let a = t(vec![], &[3, 0]);
        let b = t(vec![], &[3, 0]);
        let c = a.hadamard_product(&b).unwrap();
        assert_eq!(c.shape(), &[3, 0]);
        assert_eq!(c.numel(), 0);
    }

    #[test]
    fn test_reshaped_operand_keeps_row_major_order() {
        let a = t(vec![1, 2, 3, 4, 5, 6], &[6]).reshape(&[2, 3]).unwrap();
        let b = t(vec![1, 0, 1, 0, 1, 0], &[2, 3]);
        let c = a.hadamard_product(&b).unwrap();
        assert_eq!(c.to_vec(), vec![1, 0, 3, 0, 5, 0]);
        assert_eq!(c.get(&[1, 0]), Some(0));
        assert_eq!(c.get(&[1, 1]), Some(5));
    }

    #[test]
    fn test_result_is_fresh_buffer() {
        let a = t(vec![1, 1], &[2]);
        let b = t(vec![1, 1], &[2]);
        let c = a.hadamard_product(&b).unwrap();
        assert!(!c.shares_buffer(&a));
    }
}
