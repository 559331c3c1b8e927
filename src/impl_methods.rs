// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::slice;

use crate::error::{self, ShapeError};
use crate::iterators::{IndexedIter, Indices};
use crate::{Array, Ix, NdIndex};

/// # Methods For All Array Types
impl<A, const D: usize> Array<A, D> {
    /// Return the total number of elements in the array.
    ///
    /// This is also the stride of the whole buffer, the leading entry of
    /// [`raw_strides`](Array::raw_strides).
    pub fn len(&self) -> usize {
        self.layout.size
    }

    /// Return the length of `axis`.
    ///
    /// **Panics** if the axis is out of bounds.
    pub fn len_of(&self, axis: usize) -> usize {
        self.layout.dim[axis]
    }

    /// Return whether the array has no storage.
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Return the number of dimensions (axes) in the array.
    pub fn ndim(&self) -> usize {
        D
    }

    /// Return the shape of the array.
    pub fn shape(&self) -> &[Ix; D] {
        &self.layout.dim
    }

    /// Return the strides of the array, one per axis.
    ///
    /// Row-major right after construction; afterwards exactly what the
    /// transpositions applied since left behind. In particular the last
    /// stride is not necessarily 1.
    pub fn strides(&self) -> &[Ix; D] {
        &self.layout.strides
    }

    /// Return the stride of `axis`.
    ///
    /// **Panics** if the axis is out of bounds.
    pub fn stride_of(&self, axis: usize) -> Ix {
        self.layout.strides[axis]
    }

    /// Return the `D + 1` stride sequence `[len, strides[0], ..,
    /// strides[D-1]]`: entry `k` is the span of one full run along axis
    /// `k`, entry `k + 1` the step along it.
    ///
    /// ```
    /// use ndlattice::Array3;
    ///
    /// let a = Array3::<u8>::zeros([2, 3, 4]).unwrap();
    /// assert_eq!(a.raw_strides(), vec![24, 12, 4, 1]);
    /// ```
    pub fn raw_strides(&self) -> Vec<Ix> {
        self.layout.raw_strides()
    }

    /// Return `true` if the strides are the row-major strides of the
    /// current shape, i.e. memory order equals logical order.
    pub fn is_standard_layout(&self) -> bool {
        self.layout.is_standard()
    }

    /// Return the number of bytes the array occupies: the array value
    /// itself plus its element storage.
    pub fn footprint(&self) -> usize {
        self.layout.footprint()
            + std::mem::size_of::<Vec<A>>()
            + self.data.capacity() * std::mem::size_of::<A>()
    }

    /// Return the buffer offset of `index`, or `None` if it is out of
    /// bounds.
    ///
    /// ```
    /// use ndlattice::Array2;
    ///
    /// let a = Array2::<f64>::zeros([2, 3]).unwrap();
    /// assert_eq!(a.offset_of([1, 2]), Some(5));
    /// assert_eq!(a.offset_of((1,)), Some(3));
    /// assert_eq!(a.offset_of([2, 0]), None);
    /// ```
    pub fn offset_of<I>(&self, index: I) -> Option<Ix>
    where
        I: NdIndex<D>,
    {
        index.index_checked(&self.layout.dim, &self.layout.strides)
    }

    /// Return a reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    ///
    /// ```
    /// use ndlattice::Array;
    ///
    /// let a = Array::from_shape_vec([2, 2], vec![1., 2., 3., 4.]).unwrap();
    ///
    /// assert!(
    ///     a.get([0, 1]) == Some(&2.) &&
    ///     a.get((1,)) == Some(&3.) &&
    ///     a.get([0, 2]) == None &&
    ///     a.get((0, 0, 0)) == None
    /// );
    /// ```
    pub fn get<I>(&self, index: I) -> Option<&A>
    where
        I: NdIndex<D>,
    {
        self.offset_of(index).map(|offset| &self.data[offset])
    }

    /// Return a mutable reference to the element at `index`, or return
    /// `None` if the index is out of bounds.
    pub fn get_mut<I>(&mut self, index: I) -> Option<&mut A>
    where
        I: NdIndex<D>,
    {
        match self.offset_of(index) {
            Some(offset) => Some(&mut self.data[offset]),
            None => None,
        }
    }

    /// Perform *unchecked* array indexing.
    ///
    /// Return a reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds and has no more
    /// components than the array has axes.
    #[inline]
    pub unsafe fn uget<I>(&self, index: I) -> &A
    where
        I: NdIndex<D>,
    {
        let offset = index.index_unchecked(&self.layout.strides);
        self.data.get_unchecked(offset)
    }

    /// Perform *unchecked* array indexing.
    ///
    /// Return a mutable reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds and has no more
    /// components than the array has axes.
    #[inline]
    pub unsafe fn uget_mut<I>(&mut self, index: I) -> &mut A
    where
        I: NdIndex<D>,
    {
        let offset = index.index_unchecked(&self.layout.strides);
        self.data.get_unchecked_mut(offset)
    }

    /// Return a reference to the element at raw buffer offset `offset`,
    /// or `None` if it is out of bounds.
    pub fn get_raw(&self, offset: Ix) -> Option<&A> {
        self.data.get(offset)
    }

    /// Return a mutable reference to the element at raw buffer offset
    /// `offset`, or `None` if it is out of bounds.
    pub fn get_raw_mut(&mut self, offset: Ix) -> Option<&mut A> {
        self.data.get_mut(offset)
    }

    /// Return a reference to the element at raw buffer offset `offset`.
    ///
    /// # Safety
    ///
    /// `offset` must be less than `self.len()`.
    #[inline]
    pub unsafe fn uget_raw(&self, offset: Ix) -> &A {
        self.data.get_unchecked(offset)
    }

    /// Return a mutable reference to the element at raw buffer offset
    /// `offset`.
    ///
    /// # Safety
    ///
    /// `offset` must be less than `self.len()`.
    #[inline]
    pub unsafe fn uget_raw_mut(&mut self, offset: Ix) -> &mut A {
        self.data.get_unchecked_mut(offset)
    }

    /// Swap axes `ax` and `bx`.
    ///
    /// This does not move any data, it just adjusts the array’s shape and
    /// strides. Every indexing path sees the new axis order immediately.
    ///
    /// **Panics** if the axes are out of bounds.
    ///
    /// ```
    /// use ndlattice::Array;
    ///
    /// let mut a = Array::from_shape_vec([1, 3], vec![1., 2., 3.]).unwrap();
    /// a.swap_axes(0, 1);
    /// assert_eq!(a.shape(), &[3, 1]);
    /// assert_eq!(a[[2, 0]], 3.);
    /// ```
    pub fn swap_axes(&mut self, ax: usize, bx: usize) {
        self.layout.swap_axes(ax, bx);
        log::trace!(
            "swap_axes({}, {}): shape {:?}, strides {:?}",
            ax,
            bx,
            self.layout.dim,
            self.layout.strides
        );
    }

    /// Swap the first two axes, `swap_axes(1, 0)`: a matrix transpose for
    /// two-dimensional arrays.
    ///
    /// **Panics** if the array has fewer than two axes.
    pub fn transpose(&mut self) {
        assert!(D >= 2, "transpose: array of rank {} has no second axis", D);
        self.swap_axes(1, 0);
    }

    /// Set every element to `elem`. Does nothing for an empty array.
    pub fn fill(&mut self, elem: A)
    where
        A: Clone,
    {
        for x in self.data.iter_mut() {
            *x = elem.clone();
        }
    }

    /// Return the elements in memory order.
    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    /// Return the elements in memory order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [A] {
        &mut self.data
    }

    /// Return an iterator over the elements in memory order.
    pub fn iter(&self) -> slice::Iter<'_, A> {
        self.data.iter()
    }

    /// Return a mutable iterator over the elements in memory order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, A> {
        self.data.iter_mut()
    }

    /// Return the coordinates of the array in logical row-major order of
    /// its current shape.
    pub fn indices(&self) -> Indices<D> {
        Indices::new(self.layout.dim)
    }

    /// Return an iterator of coordinates and references to the elements,
    /// in logical row-major order of the current shape.
    ///
    /// ```
    /// use ndlattice::Array;
    ///
    /// let mut a = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// a.transpose();
    /// let v: Vec<_> = a.indexed_iter().map(|(_, &x)| x).collect();
    /// assert_eq!(v, vec![1, 3, 2, 4]);
    /// ```
    pub fn indexed_iter(&self) -> IndexedIter<'_, A, D> {
        IndexedIter::new(self)
    }

    /// Return the underlying buffer, in memory order.
    pub fn into_raw_vec(self) -> Vec<A> {
        self.data
    }

    /// Call `f` by reference on each element and create a new array with
    /// the new values. The new array has the same shape and strides as
    /// `self`.
    pub fn map<'a, B, F>(&'a self, f: F) -> Array<B, D>
    where
        F: FnMut(&'a A) -> B,
        A: 'a,
    {
        Array {
            data: self.data.iter().map(f).collect(),
            layout: self.layout,
        }
    }

    /// Return a copy with each element converted to `B`.
    ///
    /// Shape and strides are copied as they are, so a transposed array
    /// converts into an equally transposed one.
    ///
    /// ```
    /// use ndlattice::Array;
    ///
    /// let mut a = Array::from_shape_vec([2, 3], vec![1u8, 2, 3, 4, 5, 6]).unwrap();
    /// a.transpose();
    /// let b = a.convert::<f64>();
    /// assert_eq!(b.shape(), &[3, 2]);
    /// assert_eq!(b[[2, 1]], 6.);
    /// ```
    pub fn convert<B>(&self) -> Array<B, D>
    where
        A: Clone + Into<B>,
    {
        if !self.is_standard_layout() {
            log::trace!("convert: copying strides {:?}", self.layout.strides);
        }
        self.map(|x| x.clone().into())
    }

    /// Traverse two arrays of the same shape in unspecified order, in
    /// lock step, calling `f` on each element pair.
    ///
    /// Elements are paired by logical coordinate, whatever the memory
    /// layout of the two arrays; when both share strides the pairing is
    /// done by buffer position.
    ///
    /// **Errors** with `IncompatibleShapes` if the shapes disagree.
    pub fn zip_mut_with<B, F>(&mut self, rhs: &Array<B, D>, mut f: F) -> Result<(), ShapeError>
    where
        F: FnMut(&mut A, &B),
    {
        if self.shape() != rhs.shape() {
            return Err(error::incompatible_shapes(self.shape(), rhs.shape()));
        }
        if self.strides() == rhs.strides() {
            for (a, b) in self.data.iter_mut().zip(&rhs.data) {
                f(a, b);
            }
        } else {
            let lhs_strides = self.layout.strides;
            for index in rhs.indices() {
                let i = crate::dimension::stride_offset(&index, &lhs_strides);
                let j = crate::dimension::stride_offset(&index, rhs.strides());
                f(&mut self.data[i], &rhs.data[j]);
            }
        }
        Ok(())
    }

    /// Create a new array of the same shape by calling `f` on pairs of
    /// elements of `self` and `rhs` with equal coordinates.
    ///
    /// The result keeps the strides of the operands when they share them,
    /// else it is in standard layout.
    ///
    /// **Errors** with `IncompatibleShapes` if the shapes disagree.
    pub fn zip_map<B, C, F>(&self, rhs: &Array<B, D>, mut f: F) -> Result<Array<C, D>, ShapeError>
    where
        F: FnMut(&A, &B) -> C,
    {
        if self.shape() != rhs.shape() {
            return Err(error::incompatible_shapes(self.shape(), rhs.shape()));
        }
        if self.strides() == rhs.strides() {
            return Ok(Array {
                data: self.data.iter().zip(&rhs.data).map(|(a, b)| f(a, b)).collect(),
                layout: self.layout,
            });
        }
        let data = self
            .indexed_iter()
            .zip(rhs.indexed_iter())
            .map(|((_, a), (_, b))| f(a, b))
            .collect();
        Ok(Array {
            data,
            layout: self.layout.to_standard(),
        })
    }
}
