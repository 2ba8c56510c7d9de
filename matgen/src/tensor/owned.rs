use crate::tensor::dims::{Dim1, Dim2, Dims};
use rand::Rng;
use rand::distributions::Distribution;
use std::slice::{ChunksExact, Iter};

/// Dense, row-major tensor owning its elements.
pub struct Tensor<T, D>
where
    D: Dims,
{
    data: Vec<T>,
    dims: D,
}

pub type Tensor1<T> = Tensor<T, Dim1>;
pub type Tensor2<T> = Tensor<T, Dim2>;
pub type Matrix<T> = Tensor2<T>;

impl<T, D: Dims> Tensor<T, D> {
    pub fn from_vec(data: Vec<T>, dims: D) -> Self {
        assert_eq!(
            data.len(),
            dims.tensor_len(),
            "Mismatched data length {} and dimension {}",
            data.len(),
            dims
        );
        Tensor { data, dims }
    }

    /// Fills the tensor in row-major order, taking exactly one sample per element.
    pub fn from_distribution<R, S>(rng: &mut R, dist: S, dims: D) -> Self
    where
        R: Rng + ?Sized,
        S: Distribution<T>,
    {
        let data: Vec<T> = dist.sample_iter(rng).take(dims.tensor_len()).collect();
        Tensor { data, dims }
    }

    pub fn reshape<E: Dims>(self, dims: E) -> Tensor<T, E> {
        Tensor::from_vec(self.data, dims)
    }

    #[inline]
    pub fn dims(&self) -> &D {
        &self.dims
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates over the first axis; for a matrix these are its rows.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        // chunks_exact rejects zero, which only occurs when the tensor is empty
        let width = self.dims.without_first_axis().tensor_len().max(1);
        self.data.chunks_exact(width)
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Tensor1<T> {
    pub fn from_vec_1d(data: Vec<T>) -> Self {
        let len = data.len();
        Tensor { data, dims: Dim1(len) }
    }
}

impl<T, D: Dims> AsRef<[T]> for Tensor<T, D> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: PartialEq, D: Dims> PartialEq for Tensor<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims && self.data == other.data
    }
}

impl<T: Eq, D: Dims> Eq for Tensor<T, D> {}

impl<T: Clone, D: Dims> Clone for Tensor<T, D> {
    fn clone(&self) -> Self {
        Tensor {
            data: self.data.clone(),
            dims: self.dims,
        }
    }
}

impl<'a, T, D: Dims> IntoIterator for &'a Tensor<T, D> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
