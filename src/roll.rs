// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Periodic (toroidal) neighbor addressing on raw offsets.

use std::iter::FusedIterator;

use crate::layout::Layout;
use crate::{Array, Ix};

mod private {
    pub trait Sealed {}
}

/// Direction of a one-cell step along an axis, chosen at the type level.
///
/// Implemented by [`Forward`] and [`Backward`] only.
pub trait Direction: private::Sealed {
    /// `true` for a step towards higher coordinates.
    const FORWARD: bool;
}

/// One step towards higher coordinates.
#[derive(Copy, Clone, Debug)]
pub enum Forward {}

/// One step towards lower coordinates.
#[derive(Copy, Clone, Debug)]
pub enum Backward {}

impl private::Sealed for Forward {}
impl private::Sealed for Backward {}

impl Direction for Forward {
    const FORWARD: bool = true;
}

impl Direction for Backward {
    const FORWARD: bool = false;
}

impl<const D: usize> Layout<D> {
    /// Offset of the periodic neighbor of `offset` one step along `axis`.
    ///
    /// Reads only the extent and stride of `axis` itself: the coordinate
    /// along the axis is `(offset / stride) % extent` for any permutation
    /// of a row-major layout.
    #[inline]
    pub(crate) fn roll<Dir: Direction>(&self, offset: Ix, axis: usize) -> Ix {
        let n = self.dim[axis];
        let s = self.strides[axis];
        let pos = (offset / s) % n;
        if Dir::FORWARD {
            if pos == n - 1 {
                offset - (n - 1) * s
            } else {
                offset + s
            }
        } else if pos == 0 {
            offset + (n - 1) * s
        } else {
            offset - s
        }
    }
}

/// # Periodic Neighbor Addressing
///
/// These methods step a raw buffer offset one cell along an axis with
/// periodic boundary conditions: stepping past the last cell of an axis
/// lands on its first cell and vice versa. Only the extent and stride of
/// the stepped axis are consulted, so the cost is O(1) whatever the rank,
/// and the result is correct after any sequence of
/// [`swap_axes`](Array::swap_axes).
impl<A, const D: usize> Array<A, D> {
    /// Return the offset of the periodic neighbor of `offset`, one step
    /// along `axis` in direction `Dir`.
    ///
    /// **Panics** if `axis >= D` or `offset >= self.len()`.
    ///
    /// ```
    /// use ndlattice::{Array, Backward, Forward};
    ///
    /// let a = Array::from_vec(vec![10, 20, 30, 40]).unwrap();
    /// assert_eq!(a[a.roll_index::<Backward>(0, 0)], 40);
    /// assert_eq!(a[a.roll_index::<Forward>(3, 0)], 10);
    /// assert_eq!(a[a.roll_index::<Forward>(1, 0)], 30);
    /// ```
    #[inline]
    pub fn roll_index<Dir: Direction>(&self, offset: Ix, axis: usize) -> Ix {
        assert!(axis < D, "roll_index: axis {} out of bounds for rank {}", axis, D);
        assert!(
            offset < self.len(),
            "roll_index: offset {} out of bounds for length {}",
            offset,
            self.len()
        );
        self.layout.roll::<Dir>(offset, axis)
    }

    /// Return the offset of the periodic neighbor of `offset` along a
    /// signed axis.
    ///
    /// A non-negative `axis` steps forward along that axis. A negative
    /// `axis` names axis `axis + D` (so `-1` is the last axis) and steps
    /// backward along it.
    ///
    /// **Panics** if the axis is out of bounds or `offset >= self.len()`.
    ///
    /// ```
    /// use ndlattice::Array;
    ///
    /// let a = Array::from_shape_vec([2, 3], vec![0, 1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(a.roll(2, 1), 0);  // (0, 2) -> (0, 0)
    /// assert_eq!(a.roll(3, -1), 5); // (1, 0) -> (1, 2)
    /// assert_eq!(a.roll(4, 0), 1);  // (1, 1) -> (0, 1)
    /// assert_eq!(a.roll(1, -2), 4); // (0, 1) -> (1, 1)
    /// ```
    #[inline]
    pub fn roll(&self, offset: Ix, axis: isize) -> Ix {
        if axis < 0 {
            let ax = axis + D as isize;
            assert!(ax >= 0, "roll: axis {} out of bounds for rank {}", axis, D);
            self.roll_index::<Backward>(offset, ax as usize)
        } else {
            self.roll_index::<Forward>(offset, axis as usize)
        }
    }

    /// Return an iterator over the `2 * D` periodic neighbors of `offset`:
    /// for each axis in order, the forward neighbor and then the backward
    /// neighbor.
    ///
    /// Along an axis of extent 1 both neighbors are `offset` itself; along
    /// an axis of extent 2 they coincide.
    ///
    /// **Panics** if `offset >= self.len()`.
    ///
    /// ```
    /// use ndlattice::Array2;
    ///
    /// let a = Array2::<u8>::zeros([3, 3]).unwrap();
    /// let n: Vec<_> = a.neighbors(4).collect();
    /// assert_eq!(n, vec![7, 1, 5, 3]);
    /// let n: Vec<_> = a.neighbors(0).collect();
    /// assert_eq!(n, vec![3, 6, 1, 2]);
    /// ```
    pub fn neighbors(&self, offset: Ix) -> Neighbors<D> {
        assert!(
            offset < self.len(),
            "neighbors: offset {} out of bounds for length {}",
            offset,
            self.len()
        );
        Neighbors {
            layout: self.layout,
            offset,
            step: 0,
        }
    }
}

/// An iterator over the periodic neighbors of a cell.
///
/// Created with [`Array::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors<const D: usize> {
    layout: Layout<D>,
    offset: Ix,
    step: usize,
}

impl<const D: usize> Iterator for Neighbors<D> {
    type Item = Ix;

    #[inline]
    fn next(&mut self) -> Option<Ix> {
        if self.step == 2 * D {
            return None;
        }
        let axis = self.step / 2;
        let neighbor = if self.step % 2 == 0 {
            self.layout.roll::<Forward>(self.offset, axis)
        } else {
            self.layout.roll::<Backward>(self.offset, axis)
        };
        self.step += 1;
        Some(neighbor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = 2 * D - self.step;
        (n, Some(n))
    }
}

impl<const D: usize> ExactSizeIterator for Neighbors<D> {}

impl<const D: usize> FusedIterator for Neighbors<D> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        let l = Layout::new([4]).unwrap();
        assert_eq!(l.roll::<Backward>(0, 0), 3);
        assert_eq!(l.roll::<Forward>(3, 0), 0);
        assert_eq!(l.roll::<Forward>(1, 0), 2);
        assert_eq!(l.roll::<Backward>(2, 0), 1);
    }

    #[test]
    fn middle_axis_of_rank_three() {
        // (1, 2, 3) in shape (2, 3, 4) is offset 23
        let l = Layout::new([2, 3, 4]).unwrap();
        assert_eq!(l.roll::<Forward>(23, 1), 15); // (1, 0, 3)
        assert_eq!(l.roll::<Backward>(23, 1), 19); // (1, 1, 3)
        assert_eq!(l.roll::<Forward>(23, 0), 11); // (0, 2, 3)
        assert_eq!(l.roll::<Forward>(23, 2), 20); // (1, 2, 0)
    }

    #[test]
    fn after_swapping_axes() {
        let mut l = Layout::new([2, 3]).unwrap();
        l.swap_axes(0, 1);
        // now shape (3, 2), strides (1, 3); logical (2, 1) is offset 5
        assert_eq!(l.roll::<Forward>(5, 0), 3); // (0, 1)
        assert_eq!(l.roll::<Backward>(3, 0), 5);
        assert_eq!(l.roll::<Forward>(5, 1), 2); // (2, 0)
        assert_eq!(l.roll::<Backward>(2, 1), 5);
    }

    #[test]
    fn unit_extent_is_fixed_point() {
        let l = Layout::new([1, 5]).unwrap();
        assert_eq!(l.roll::<Forward>(3, 0), 3);
        assert_eq!(l.roll::<Backward>(3, 0), 3);
    }
}
