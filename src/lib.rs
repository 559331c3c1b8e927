// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndlattice"]
#![doc(html_root_url = "https://docs.rs/ndlattice/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::unreadable_literal,
    clippy::manual_map,
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `ndlattice` crate provides [`Array<A, D>`], a dense array of rank
//! `D` over one contiguous buffer, built for lattice and stencil style
//! numerics.
//!
//! - **Fixed rank**: `D` is a const generic; shapes and strides are plain
//!   `[usize; D]` arrays stored inline.
//! - **Three ways to index**, all agreeing on the element they name:
//!   a raw buffer offset (`a[k]`), a full coordinate (`a[[i, j]]`), and a
//!   partial coordinate given as a tuple (`a[(i, j)]`, `a[(i,)]`) whose
//!   missing trailing axes are taken to be 0.
//! - **Zero-copy transposition**: [`Array::swap_axes`] exchanges the shape
//!   and stride of two axes and nothing else.
//! - **Periodic neighbor addressing**: [`Array::roll`] and
//!   [`Array::roll_index`] step a raw offset one cell along an axis with
//!   toroidal wraparound, without decoding the other axes.
//! - Elementwise `+`, `-`, `+=`, `-=` and unary `-` between arrays of the
//!   same shape, and a naive matrix product for [`Array2`].
//!
//! ```
//! use ndlattice::Array2;
//!
//! let mut a = Array2::<i32>::zeros([2, 3]).unwrap();
//! a[[0, 0]] = 1;
//! a[[1, 2]] = 5;
//! assert_eq!(a[2], a[[0, 2]]);
//!
//! a.transpose();
//! assert_eq!(a.shape(), &[3, 2]);
//! assert_eq!(a[[2, 1]], 5);
//!
//! // toroidal neighbors of (0, 0): one step back along axis 0 wraps to (2, 0)
//! let k = a.offset_of([0, 0]).unwrap();
//! assert_eq!(a.offset_of([2, 0]), Some(a.roll(k, -2)));
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `serde`: serialization with serde 1.0.
//! - `approx`: implementations of the `approx` traits for approximate
//!   comparison of floating point arrays.

#[cfg(feature = "serde")]
mod array_serde;
#[cfg(feature = "approx")]
mod array_approx;
mod arrayformat;
mod arraytraits;
mod dimension;
mod error;
mod impl_2d;
mod impl_clone;
mod impl_constructors;
mod impl_methods;
mod impl_ops;
mod iterators;
mod layout;
mod ndindex;
mod roll;
mod shape_builder;

pub use crate::error::{ErrorKind, ShapeError};
pub use crate::iterators::{IndexedIter, Indices};
pub use crate::ndindex::NdIndex;
pub use crate::roll::{Backward, Direction, Forward, Neighbors};
pub use crate::shape_builder::{Shape, ShapeBuilder};

use crate::layout::Layout;

/// Array index type
pub type Ix = usize;

/// A dense array of rank `D` with elements of type `A`, stored in one
/// contiguous buffer that the array owns exclusively.
///
/// The array is either fully allocated, with every axis extent positive,
/// or empty: [`Array::empty`] (also the `Default` value) and what
/// `std::mem::take` leaves behind have no storage, `len() == 0` and all-zero shape and strides.
///
/// Element `[i0, i1, ..]` lives at buffer offset `Σ i_k * strides()[k]`.
/// At construction the strides are row-major (last axis fastest); after
/// [`swap_axes`](Array::swap_axes) they are whatever the exchange left
/// them as, and every access path uses them as they are.
pub struct Array<A, const D: usize> {
    data: Vec<A>,
    layout: Layout<D>,
}

/// one-dimensional array
pub type Array1<A> = Array<A, 1>;
/// two-dimensional array
pub type Array2<A> = Array<A, 2>;
/// three-dimensional array
pub type Array3<A> = Array<A, 3>;
/// four-dimensional array
pub type Array4<A> = Array<A, 4>;
/// five-dimensional array
pub type Array5<A> = Array<A, 5>;
/// six-dimensional array
pub type Array6<A> = Array<A, 6>;

/// Commonly used items.
///
/// ```
/// use ndlattice::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Array, Array1, Array2, Array3, Array4, Array5, Array6};
    pub use crate::{Backward, Forward, Ix, Shape, ShapeBuilder, ShapeError};
}
