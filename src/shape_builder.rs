// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::layout::Layout;
use crate::Ix;

/// A row-major array shape of `D` axes.
///
/// Every array constructor accepts anything that implements
/// [`ShapeBuilder`]; `Shape` itself covers the uniform-width case.
///
/// ```
/// use ndlattice::{Array, Shape};
///
/// let a = Array::<f64, 3>::zeros(Shape::uniform(4)).unwrap();
/// assert_eq!(a.shape(), &[4, 4, 4]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shape<const D: usize> {
    pub(crate) dim: [Ix; D],
}

impl<const D: usize> Shape<D> {
    /// A shape with extent `width` along every axis.
    pub fn uniform(width: Ix) -> Self {
        Shape { dim: [width; D] }
    }

    /// Return the axis extents.
    pub fn dim(&self) -> &[Ix; D] {
        &self.dim
    }

    /// Return the number of elements, or `None` on overflow.
    pub fn size(&self) -> Option<Ix> {
        crate::dimension::size_checked(&self.dim)
    }
}

impl<const D: usize> From<[Ix; D]> for Shape<D> {
    fn from(dim: [Ix; D]) -> Self {
        Shape { dim }
    }
}

/// Conversion of a shape description into a validated layout.
///
/// Implemented for
///
/// - `[Ix; D]`, a shape array,
/// - `&[Ix]` and `Vec<Ix>`, shape lists whose length must be `D`,
/// - [`Shape<D>`], including [`Shape::uniform`].
pub trait ShapeBuilder<const D: usize> {
    /// Convert into a `Shape`.
    ///
    /// **Errors** with `RankMismatch` if the description does not have
    /// exactly `D` axes.
    fn into_shape(self) -> Result<Shape<D>, ShapeError>;
}

impl<const D: usize> ShapeBuilder<D> for Shape<D> {
    fn into_shape(self) -> Result<Shape<D>, ShapeError> {
        Ok(self)
    }
}

impl<const D: usize> ShapeBuilder<D> for [Ix; D] {
    fn into_shape(self) -> Result<Shape<D>, ShapeError> {
        Ok(Shape { dim: self })
    }
}

impl<'a, const D: usize> ShapeBuilder<D> for &'a [Ix] {
    fn into_shape(self) -> Result<Shape<D>, ShapeError> {
        let dim: [Ix; D] = self.try_into().map_err(|_| {
            log::debug!("shape list {:?} does not have {} axes", self, D);
            from_kind(ErrorKind::RankMismatch)
        })?;
        Ok(Shape { dim })
    }
}

impl<const D: usize> ShapeBuilder<D> for Vec<Ix> {
    fn into_shape(self) -> Result<Shape<D>, ShapeError> {
        self.as_slice().into_shape()
    }
}

impl<const D: usize> Shape<D> {
    pub(crate) fn into_layout(self) -> Result<Layout<D>, ShapeError> {
        Layout::new(self.dim)
    }
}
