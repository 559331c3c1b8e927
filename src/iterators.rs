// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::iter::FusedIterator;

use crate::dimension;
use crate::{Array, Ix};

/// An iterator over the coordinates of an array shape, in logical
/// row-major order (last axis fastest).
///
/// Created with [`Array::indices`].
#[derive(Clone, Debug)]
pub struct Indices<const D: usize> {
    dim: [Ix; D],
    index: Option<[Ix; D]>,
    remaining: usize,
}

impl<const D: usize> Indices<D> {
    pub(crate) fn new(dim: [Ix; D]) -> Self {
        let remaining = dimension::size_checked(&dim).unwrap_or(0);
        Indices {
            dim,
            index: if remaining == 0 { None } else { Some([0; D]) },
            remaining,
        }
    }
}

impl<const D: usize> Iterator for Indices<D> {
    type Item = [Ix; D];

    #[inline]
    fn next(&mut self) -> Option<[Ix; D]> {
        let current = self.index?;
        let mut next = current;
        self.index = if dimension::next_index(&self.dim, &mut next) {
            Some(next)
        } else {
            None
        };
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const D: usize> ExactSizeIterator for Indices<D> {}

impl<const D: usize> FusedIterator for Indices<D> {}

/// An iterator over the coordinates and elements of an array, in logical
/// row-major order of its current shape.
///
/// Created with [`Array::indexed_iter`].
#[derive(Debug)]
pub struct IndexedIter<'a, A, const D: usize> {
    indices: Indices<D>,
    strides: [Ix; D],
    data: &'a [A],
}

impl<'a, A, const D: usize> IndexedIter<'a, A, D> {
    pub(crate) fn new(array: &'a Array<A, D>) -> Self {
        IndexedIter {
            indices: array.indices(),
            strides: *array.strides(),
            data: array.as_slice(),
        }
    }
}

impl<'a, A, const D: usize> Clone for IndexedIter<'a, A, D> {
    fn clone(&self) -> Self {
        IndexedIter {
            indices: self.indices.clone(),
            strides: self.strides,
            data: self.data,
        }
    }
}

impl<'a, A, const D: usize> Iterator for IndexedIter<'a, A, D> {
    type Item = ([Ix; D], &'a A);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        let offset = dimension::stride_offset(&index, &self.strides);
        Some((index, &self.data[offset]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<'a, A, const D: usize> ExactSizeIterator for IndexedIter<'a, A, D> {}

impl<'a, A, const D: usize> FusedIterator for IndexedIter<'a, A, D> {}
