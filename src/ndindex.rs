// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt::Debug;

use crate::dimension::{stride_offset, stride_offset_checked};
use crate::Ix;

/// Tuple, fixed size arrays and slices that can be used to index an array.
///
/// - `[Ix; D]` is a full coordinate: one component per axis.
/// - Tuples `(i,)` up to `(i, j, k, l, m, n)` and `&[Ix]` are partial
///   coordinates: with fewer components than axes the missing trailing
///   axes are indexed at 0, with more components the index is rejected.
///
/// ```
/// use ndlattice::Array;
///
/// let mut a = Array::from_shape_vec([2, 2], vec![0, 1, 2, 3]).unwrap();
/// assert_eq!(a[[0, 1]], 1);
/// assert_eq!(a[[1, 1]], 3);
/// a[[1, 1]] += 1;
/// assert_eq!(a[(1, 1)], 4);
/// assert_eq!(a[(1,)], 2);
/// ```
///
/// # Safety
///
/// `index_checked` must only return offsets that are in bounds for an
/// array with the given shape and strides.
pub unsafe trait NdIndex<const D: usize>: Debug {
    #[doc(hidden)]
    fn index_checked(&self, dim: &[Ix; D], strides: &[Ix; D]) -> Option<Ix>;
    #[doc(hidden)]
    fn index_unchecked(&self, strides: &[Ix; D]) -> Ix;
}

unsafe impl<const D: usize> NdIndex<D> for [Ix; D] {
    #[inline]
    fn index_checked(&self, dim: &[Ix; D], strides: &[Ix; D]) -> Option<Ix> {
        stride_offset_checked(dim, strides, self)
    }
    #[inline]
    fn index_unchecked(&self, strides: &[Ix; D]) -> Ix {
        stride_offset(self, strides)
    }
}

unsafe impl<'a, const D: usize> NdIndex<D> for &'a [Ix] {
    #[inline]
    fn index_checked(&self, dim: &[Ix; D], strides: &[Ix; D]) -> Option<Ix> {
        stride_offset_checked(dim, strides, self)
    }
    #[inline]
    fn index_unchecked(&self, strides: &[Ix; D]) -> Ix {
        stride_offset(self, strides)
    }
}

macro_rules! ix {
    ($_name:ident) => {
        Ix
    };
}

macro_rules! tuple_ndindex {
    ($($i:ident),+) => {
        unsafe impl<const D: usize> NdIndex<D> for ($(ix!($i),)+) {
            #[inline]
            fn index_checked(&self, dim: &[Ix; D], strides: &[Ix; D]) -> Option<Ix> {
                let ($($i,)+) = *self;
                stride_offset_checked(dim, strides, &[$($i),+])
            }
            #[inline]
            fn index_unchecked(&self, strides: &[Ix; D]) -> Ix {
                let ($($i,)+) = *self;
                stride_offset(&[$($i),+], strides)
            }
        }
    };
}

tuple_ndindex!(i0);
tuple_ndindex!(i0, i1);
tuple_ndindex!(i0, i1, i2);
tuple_ndindex!(i0, i1, i2, i3);
tuple_ndindex!(i0, i1, i2, i3, i4);
tuple_ndindex!(i0, i1, i2, i3, i4, i5);
