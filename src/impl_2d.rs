// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for two-dimensional arrays.
use std::ops::{Add, Mul};

use num_traits::Zero;

use crate::error::{self, ShapeError};
use crate::{Array, Array2};

/// # Methods For 2-D Arrays
impl<A> Array<A, 2> {
    /// Return the number of rows (length of axis 0) in the two-dimensional
    /// array, or 0 for an empty array.
    ///
    /// ```
    /// use ndlattice::Array2;
    ///
    /// let mut a = Array2::<f32>::zeros([3, 2]).unwrap();
    /// assert_eq!(a.nrows(), 3);
    /// a.transpose();
    /// assert_eq!(a.nrows(), 2);
    /// ```
    pub fn nrows(&self) -> usize {
        self.len_of(0)
    }

    /// Return the number of columns (length of axis 1) in the
    /// two-dimensional array, or 0 for an empty array.
    pub fn ncols(&self) -> usize {
        self.len_of(1)
    }

    /// Return `true` if the array is square, `false` otherwise.
    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Perform matrix multiplication of `self` and `rhs`.
    ///
    /// `self` is *m* × *k* and `rhs` is *k* × *n*; the result is a new
    /// *m* × *n* array in standard layout. Either operand may be
    /// transposed.
    ///
    /// **Errors** with `IncompatibleShapes` if the inner dimensions
    /// disagree or an operand is empty.
    ///
    /// ```
    /// use ndlattice::Array;
    ///
    /// let a = Array::from_shape_vec([2, 2], vec![1, 2, 0, 1]).unwrap();
    /// let b = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// let c = a.dot(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[7, 10, 3, 4]);
    /// ```
    pub fn dot(&self, rhs: &Array2<A>) -> Result<Array2<A>, ShapeError>
    where
        A: Clone + Zero + Add<Output = A> + Mul<Output = A>,
    {
        let (m, k) = (self.nrows(), self.ncols());
        let (k2, n) = (rhs.nrows(), rhs.ncols());
        if k != k2 || self.is_empty() || rhs.is_empty() {
            return Err(error::incompatible_shapes(self.shape(), rhs.shape()));
        }
        let [lhs_row, lhs_col] = *self.strides();
        let [rhs_row, rhs_col] = *rhs.strides();
        let mut data = Vec::with_capacity(m * n);
        for i in 0..m {
            for j in 0..n {
                let mut sum = A::zero();
                for l in 0..k {
                    let a = &self.data[i * lhs_row + l * lhs_col];
                    let b = &rhs.data[l * rhs_row + j * rhs_col];
                    sum = sum + a.clone() * b.clone();
                }
                data.push(sum);
            }
        }
        Array::from_shape_vec([m, n], data)
    }
}

/// Perform the matrix product of `self` and `rhs`.
///
/// **Panics** if the inner dimensions disagree; see [`Array::dot`] for the
/// checked form.
impl<'a, 'b, A> Mul<&'b Array2<A>> for &'a Array2<A>
where
    A: Clone + Zero + Add<Output = A> + Mul<Output = A>,
{
    type Output = Array2<A>;

    fn mul(self, rhs: &'b Array2<A>) -> Array2<A> {
        match self.dot(rhs) {
            Ok(product) => product,
            Err(err) => panic!(
                "ndlattice: matrix product of shapes {:?} and {:?}: {}",
                self.shape(),
                rhs.shape(),
                err
            ),
        }
    }
}
