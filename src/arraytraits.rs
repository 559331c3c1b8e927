// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::hash;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

use crate::{Array, Ix, NdIndex};

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds(index: &dyn std::fmt::Debug, shape: &[Ix]) -> ! {
    panic!(
        "ndlattice: index {:?} is out of bounds for array of shape {:?}",
        index, shape
    );
}

impl<A, const D: usize> Array<A, D> {
    #[inline]
    fn offset_or_panic<I: NdIndex<D>>(&self, index: I) -> Ix {
        match index.index_checked(&self.layout.dim, &self.layout.strides) {
            Some(offset) => offset,
            None => array_out_of_bounds(&index, self.shape()),
        }
    }
}

/// Access the element at raw buffer offset `offset`.
///
/// **Panics** if the offset is out of bounds.
impl<A, const D: usize> Index<Ix> for Array<A, D> {
    type Output = A;
    #[inline]
    fn index(&self, offset: Ix) -> &A {
        &self.data[offset]
    }
}

/// Access the element at raw buffer offset `offset` mutably.
///
/// **Panics** if the offset is out of bounds.
impl<A, const D: usize> IndexMut<Ix> for Array<A, D> {
    #[inline]
    fn index_mut(&mut self, offset: Ix) -> &mut A {
        &mut self.data[offset]
    }
}

macro_rules! impl_nd_index {
    ($($(#[$meta:meta])* [$($lt:lifetime)?] $ty:ty;)+) => {$(
        $(#[$meta])*
        impl<$($lt,)? A, const D: usize> Index<$ty> for Array<A, D> {
            type Output = A;
            #[inline]
            fn index(&self, index: $ty) -> &A {
                let offset = self.offset_or_panic(index);
                &self.data[offset]
            }
        }

        $(#[$meta])*
        impl<$($lt,)? A, const D: usize> IndexMut<$ty> for Array<A, D> {
            #[inline]
            fn index_mut(&mut self, index: $ty) -> &mut A {
                let offset = self.offset_or_panic(index);
                &mut self.data[offset]
            }
        }
    )+};
}

impl_nd_index! {
    /// Access the element at a full coordinate, one component per axis.
    ///
    /// **Panics** if a component is out of bounds.
    [] [Ix; D];
    /// Access the element at a partial coordinate; missing trailing
    /// components are 0.
    ///
    /// **Panics** if a component is out of bounds or there are more
    /// components than axes.
    ['a] &'a [Ix];
    /// Access the element at a partial coordinate; missing trailing
    /// components are 0.
    ///
    /// **Panics** if a component is out of bounds or there are more
    /// components than axes.
    [] (Ix,);
    [] (Ix, Ix);
    [] (Ix, Ix, Ix);
    [] (Ix, Ix, Ix, Ix);
    [] (Ix, Ix, Ix, Ix, Ix);
    [] (Ix, Ix, Ix, Ix, Ix, Ix);
}

impl<A, B, const D: usize> PartialEq<Array<B, D>> for Array<A, D>
where
    A: PartialEq<B>,
{
    /// Return `true` if the array shapes and all elements of `self` and
    /// `rhs` are equal. Return `false` otherwise.
    ///
    /// Elements are compared by coordinate, so the memory layouts may
    /// differ.
    fn eq(&self, rhs: &Array<B, D>) -> bool {
        if self.shape() != rhs.shape() {
            return false;
        }
        if self.strides() == rhs.strides() {
            return self.data == rhs.data;
        }
        self.indexed_iter()
            .zip(rhs.indexed_iter())
            .all(|((_, a), (_, b))| a == b)
    }
}

impl<A: Eq, const D: usize> Eq for Array<A, D> {}

impl<A: hash::Hash, const D: usize> hash::Hash for Array<A, D> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
        for (_, elt) in self.indexed_iter() {
            elt.hash(state)
        }
    }
}

impl<'a, A, const D: usize> IntoIterator for &'a Array<A, D> {
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A, const D: usize> IntoIterator for &'a mut Array<A, D> {
    type Item = &'a mut A;
    type IntoIter = slice::IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<A, const D: usize> IntoIterator for Array<A, D> {
    type Item = A;
    type IntoIter = vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<A, const D: usize> AsRef<[A]> for Array<A, D> {
    fn as_ref(&self) -> &[A] {
        self.as_slice()
    }
}

impl<A, const D: usize> AsMut<[A]> for Array<A, D> {
    fn as_mut(&mut self) -> &mut [A] {
        self.as_mut_slice()
    }
}
