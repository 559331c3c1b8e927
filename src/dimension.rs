// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Stride arithmetic shared by the layout, the indexing traits and the
//! rolling code.

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::Ix;

/// Compute the number of elements of `dim`, checking for overflow.
///
/// A zero extent yields zero; the caller decides whether that is legal.
#[inline]
pub fn size_checked(dim: &[Ix]) -> Option<Ix> {
    dim.iter().try_fold(1 as Ix, |s, &a| s.checked_mul(a))
}

/// Compute default (row-major) array strides.
///
/// Shape (a, b, c) => Give strides (b * c, c, 1)
pub fn default_strides<const D: usize>(dim: &[Ix; D]) -> [Ix; D] {
    let mut strides = [0; D];
    let mut cum_prod = 1;
    for (rs, &d) in strides.iter_mut().zip(dim.iter()).rev() {
        *rs = cum_prod;
        cum_prod *= d;
    }
    strides
}

/// Check that every extent is positive and that the total element count
/// fits in a `usize`; return that count.
pub fn validate_shape(dim: &[Ix]) -> Result<Ix, ShapeError> {
    if dim.iter().any(|&d| d == 0) {
        log::debug!("rejecting shape {:?}: zero extent", dim);
        return Err(from_kind(ErrorKind::ZeroExtent));
    }
    match size_checked(dim) {
        Some(size) => Ok(size),
        None => {
            log::debug!("rejecting shape {:?}: size overflows", dim);
            Err(from_kind(ErrorKind::Overflow))
        }
    }
}

/// Return the offset of `index` under `strides`, without bounds checks.
#[inline]
pub fn stride_offset(index: &[Ix], strides: &[Ix]) -> Ix {
    index
        .iter()
        .zip(strides)
        .fold(0, |offset, (&i, &s)| offset + i * s)
}

/// Return the offset of `index` under `strides`, or `None` if any
/// component is out of bounds for `dim` or there are more components than
/// axes.
///
/// Missing trailing components are taken to be zero, so a shape with a
/// zero extent has no valid index at all.
#[inline]
pub fn stride_offset_checked(dim: &[Ix], strides: &[Ix], index: &[Ix]) -> Option<Ix> {
    if index.len() > dim.len() || dim.contains(&0) {
        return None;
    }
    let mut offset = 0;
    for ((&d, &s), &i) in dim.iter().zip(strides).zip(index) {
        if i >= d {
            return None;
        }
        offset += i * s;
    }
    Some(offset)
}

/// Advance `index` to the next coordinate in row-major order of `dim`,
/// returning `false` when the iteration wraps past the last coordinate.
#[inline]
pub fn next_index<const D: usize>(dim: &[Ix; D], index: &mut [Ix; D]) -> bool {
    for (&d, ix) in dim.iter().zip(index.iter_mut()).rev() {
        *ix += 1;
        if *ix == d {
            *ix = 0;
        } else {
            return true;
        }
    }
    false
}
