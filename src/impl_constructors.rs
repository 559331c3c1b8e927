// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for ndlattice
//!
use num_traits::{One, Zero};

use crate::dimension;
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::layout::Layout;
use crate::{Array, Ix, ShapeBuilder};

/// # Constructor Methods
///
/// Every constructor takes a shape: a shape array `[Ix; D]`, a shape list
/// (`&[Ix]` or `Vec<Ix>`) or a [`Shape`](crate::Shape) such as
/// `Shape::uniform(width)`. The strides are always row-major.
///
/// **Errors** if the shape list does not have `D` entries, an extent is
/// zero, or the element count overflows `usize`.
impl<A, const D: usize> Array<A, D> {
    /// Create an array without storage.
    ///
    /// ```
    /// use ndlattice::Array3;
    ///
    /// let a = Array3::<f32>::empty();
    /// assert!(a.is_empty());
    /// assert_eq!(a.len(), 0);
    /// ```
    ///
    /// Arrays need at least one axis, even without storage:
    ///
    /// ```compile_fail
    /// use ndlattice::Array;
    ///
    /// let a = Array::<f32, 0>::empty();
    /// ```
    pub fn empty() -> Self {
        Array {
            data: Vec::new(),
            layout: Layout::empty(),
        }
    }

    /// Create an array with copies of `elem`.
    ///
    /// ```
    /// use ndlattice::{Array, Shape};
    ///
    /// let a = Array::from_elem(Shape::<3>::uniform(2), 1.).unwrap();
    /// assert_eq!(a.len(), 8);
    /// assert!(a.iter().all(|&x| x == 1.));
    ///
    /// let b = Array::<u8, 2>::from_elem(&[2usize, 0][..], 0);
    /// assert!(b.is_err());
    /// ```
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Result<Self, ShapeError>
    where
        A: Clone,
        Sh: ShapeBuilder<D>,
    {
        let layout = shape.into_shape()?.into_layout()?;
        let data = vec![elem; layout.size];
        Ok(Array { data, layout })
    }

    /// Create an array filled with zeros.
    pub fn zeros<Sh>(shape: Sh) -> Result<Self, ShapeError>
    where
        A: Clone + Zero,
        Sh: ShapeBuilder<D>,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array filled with ones.
    pub fn ones<Sh>(shape: Sh) -> Result<Self, ShapeError>
    where
        A: Clone + One,
        Sh: ShapeBuilder<D>,
    {
        Self::from_elem(shape, A::one())
    }

    /// Create an array filled with the default value of `A`.
    pub fn default<Sh>(shape: Sh) -> Result<Self, ShapeError>
    where
        A: Default,
        Sh: ShapeBuilder<D>,
    {
        Self::from_shape_simple_fn(shape, A::default)
    }

    /// Create an array by calling `f` once per element, in memory order.
    pub fn from_shape_simple_fn<Sh, F>(shape: Sh, mut f: F) -> Result<Self, ShapeError>
    where
        Sh: ShapeBuilder<D>,
        F: FnMut() -> A,
    {
        let layout = shape.into_shape()?.into_layout()?;
        let data = (0..layout.size).map(|_| f()).collect();
        Ok(Array { data, layout })
    }

    /// Create an array whose element at each coordinate is `f(coordinate)`.
    ///
    /// ```
    /// use ndlattice::Array;
    ///
    /// let a = Array::<usize, 2>::from_shape_fn([2, 3], |[i, j]| 10 * i + j).unwrap();
    /// assert_eq!(a[[1, 2]], 12);
    /// assert_eq!(a.as_slice(), &[0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn from_shape_fn<Sh, F>(shape: Sh, mut f: F) -> Result<Self, ShapeError>
    where
        Sh: ShapeBuilder<D>,
        F: FnMut([Ix; D]) -> A,
    {
        let layout = shape.into_shape()?.into_layout()?;
        let mut data = Vec::with_capacity(layout.size);
        let mut index = [0; D];
        loop {
            data.push(f(index));
            if !dimension::next_index(&layout.dim, &mut index) {
                break;
            }
        }
        Ok(Array { data, layout })
    }

    /// Create an array from a vector of elements in row-major order (no
    /// copying needed).
    ///
    /// **Errors** with `OutOfBounds` if `v.len()` differs from the number of
    /// elements of the shape.
    ///
    /// ```
    /// use ndlattice::{Array, ErrorKind};
    ///
    /// let a = Array::from_shape_vec([2, 2], vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a[[1, 0]], 3.);
    ///
    /// let e = Array::from_shape_vec([2, 2], vec![1., 2., 3.]).unwrap_err();
    /// assert_eq!(e.kind(), ErrorKind::OutOfBounds);
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self, ShapeError>
    where
        Sh: ShapeBuilder<D>,
    {
        let layout = shape.into_shape()?.into_layout()?;
        if v.len() != layout.size {
            log::debug!(
                "from_shape_vec: {} elements for shape {:?} of size {}",
                v.len(),
                layout.dim,
                layout.size
            );
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        Ok(Array { data: v, layout })
    }
}

impl<A> Array<A, 1> {
    /// Create a one-dimensional array from a vector.
    ///
    /// **Errors** with `ZeroExtent` if `v` is empty.
    pub fn from_vec(v: Vec<A>) -> Result<Self, ShapeError> {
        let len = v.len();
        Self::from_shape_vec([len], v)
    }
}

impl<A> Array<A, 2>
where
    A: Clone + Zero + One,
{
    /// Create an identity matrix of size `n`.
    pub fn eye(n: Ix) -> Result<Self, ShapeError> {
        let mut eye = Self::zeros([n, n])?;
        for i in 0..n {
            eye[[i, i]] = A::one();
        }
        Ok(eye)
    }
}

impl<A, const D: usize> Default for Array<A, D> {
    /// The empty array.
    fn default() -> Self {
        Self::empty()
    }
}
