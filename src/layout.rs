// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension;
use crate::error::ShapeError;
use crate::Ix;

/// The shape/stride model of a rank `D` array.
///
/// `strides[i]` is the number of buffer elements to advance for one step
/// along axis `i`. The strides are derived from `dim` once, at
/// construction; after that they are only ever permuted together with
/// `dim`, never recomputed, so they always describe the current axis order.
///
/// `size` is the total element count. It doubles as the stride of the
/// (virtual) axis enclosing axis 0, see [`Layout::raw_strides`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Layout<const D: usize> {
    pub(crate) dim: [Ix; D],
    pub(crate) strides: [Ix; D],
    pub(crate) size: Ix,
}

impl<const D: usize> Layout<D> {
    const POSITIVE_RANK: () = assert!(D > 0, "arrays must have at least one axis");

    /// Row-major layout for `dim`.
    ///
    /// **Errors** if an extent is zero or the size overflows.
    pub(crate) fn new(dim: [Ix; D]) -> Result<Self, ShapeError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::POSITIVE_RANK;
        let size = dimension::validate_shape(&dim)?;
        Ok(Layout {
            strides: dimension::default_strides(&dim),
            dim,
            size,
        })
    }

    /// The layout of an array without storage.
    pub(crate) const fn empty() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::POSITIVE_RANK;
        Layout {
            dim: [0; D],
            strides: [0; D],
            size: 0,
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The `D + 1` stride sequence `[size, strides[0], .., strides[D-1]]`.
    pub(crate) fn raw_strides(&self) -> Vec<Ix> {
        let mut raw = Vec::with_capacity(D + 1);
        raw.push(self.size);
        raw.extend_from_slice(&self.strides);
        raw
    }

    /// Exchange axes `a` and `b`. No element moves.
    ///
    /// **Panics** if an axis is out of bounds.
    #[inline]
    pub(crate) fn swap_axes(&mut self, a: usize, b: usize) {
        assert!(
            a < D && b < D,
            "swap_axes: axis out of bounds ({}, {}) for rank {}",
            a,
            b,
            D
        );
        self.dim.swap(a, b);
        self.strides.swap(a, b);
    }

    /// Return `true` if the strides are the row-major strides of the
    /// current shape.
    pub(crate) fn is_standard(&self) -> bool {
        self.is_empty() || self.strides == dimension::default_strides(&self.dim)
    }

    /// The row-major layout of the current shape.
    pub(crate) fn to_standard(&self) -> Self {
        Layout {
            dim: self.dim,
            strides: dimension::default_strides(&self.dim),
            size: self.size,
        }
    }

    /// Bytes used by the shape/stride bookkeeping.
    pub(crate) fn footprint(&self) -> usize {
        std::mem::size_of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn construction() {
        let l = Layout::new([2, 3, 4]).unwrap();
        assert_eq!(l.size, 24);
        assert_eq!(l.strides, [12, 4, 1]);
        assert_eq!(l.raw_strides(), vec![24, 12, 4, 1]);
        assert!(l.is_standard());
        assert_eq!(Layout::new([3, 0]).unwrap_err().kind(), ErrorKind::ZeroExtent);
    }

    #[test]
    fn swap_is_self_inverse() {
        let original = Layout::new([2, 3, 4]).unwrap();
        let mut l = original;
        l.swap_axes(0, 2);
        assert_eq!(l.dim, [4, 3, 2]);
        assert_eq!(l.strides, [1, 4, 12]);
        assert_eq!(l.size, 24);
        assert!(!l.is_standard());
        l.swap_axes(0, 2);
        assert_eq!(l, original);
    }

    #[test]
    #[should_panic]
    fn swap_out_of_bounds() {
        let mut l = Layout::new([2, 3]).unwrap();
        l.swap_axes(0, 2);
    }

    #[test]
    fn empty_layout() {
        let l = Layout::<3>::empty();
        assert!(l.is_empty());
        assert!(l.is_standard());
        assert_eq!(
            dimension::stride_offset_checked(&l.dim, &l.strides, &[0, 0, 0]),
            None
        );
        assert_eq!(dimension::stride_offset_checked(&l.dim, &l.strides, &[]), None);
    }
}
