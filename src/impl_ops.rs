// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementwise arithmetic between arrays of the same shape.
//!
//! Operands are paired by coordinate, so they may have different memory
//! layouts (e.g. one of them transposed). There is no broadcasting: the
//! operator forms **panic** if the shapes disagree; the `try_*` methods
//! return the error instead.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::ShapeError;
use crate::Array;

#[cold]
#[inline(never)]
fn shape_mismatch(op: &str, err: ShapeError, a: &[usize], b: &[usize]) -> ! {
    panic!("ndlattice: {} of shapes {:?} and {:?}: {}", op, a, b, err)
}

macro_rules! impl_binary_op(
    ($trt:ident, $mth:ident, $iop:tt, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between `self` and `rhs`,
/// and return the result, reusing the storage of `self`.
///
/// **Panics** if the shapes disagree.
impl<A, B, const D: usize> $trt<Array<B, D>> for Array<A, D>
where
    A: Clone + $trt<B, Output = A>,
    B: Clone,
{
    type Output = Array<A, D>;
    fn $mth(self, rhs: Array<B, D>) -> Array<A, D> {
        self.$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and reference `rhs`,
/// and return the result, reusing the storage of `self`.
///
/// **Panics** if the shapes disagree.
impl<'a, A, B, const D: usize> $trt<&'a Array<B, D>> for Array<A, D>
where
    A: Clone + $trt<B, Output = A>,
    B: Clone,
{
    type Output = Array<A, D>;
    fn $mth(mut self, rhs: &Array<B, D>) -> Array<A, D> {
        let result = self.zip_mut_with(rhs, |x, y| {
            *x = x.clone() $iop y.clone();
        });
        if let Err(err) = result {
            shape_mismatch(stringify!($mth), err, self.shape(), rhs.shape());
        }
        self
    }
}

/// Perform elementwise
#[doc=$doc]
/// between reference `self` and `rhs`,
/// and return the result as a new `Array`.
///
/// **Panics** if the shapes disagree.
impl<'a, A, B, const D: usize> $trt<Array<B, D>> for &'a Array<A, D>
where
    A: Clone + $trt<B, Output = A>,
    B: Clone,
{
    type Output = Array<A, D>;
    fn $mth(self, rhs: Array<B, D>) -> Array<A, D> {
        self.$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between references `self` and `rhs`,
/// and return the result as a new `Array`.
///
/// **Panics** if the shapes disagree.
impl<'a, 'b, A, B, const D: usize> $trt<&'b Array<B, D>> for &'a Array<A, D>
where
    A: Clone + $trt<B, Output = A>,
    B: Clone,
{
    type Output = Array<A, D>;
    fn $mth(self, rhs: &'b Array<B, D>) -> Array<A, D> {
        match self.zip_map(rhs, |x, y| x.clone() $iop y.clone()) {
            Ok(array) => array,
            Err(err) => shape_mismatch(stringify!($mth), err, self.shape(), rhs.shape()),
        }
    }
}
    );
);

impl_binary_op!(Add, add, +, "addition");
impl_binary_op!(Sub, sub, -, "subtraction");

macro_rules! impl_assign_op {
    ($trt:ident, $method:ident, $try_method:ident, $doc:expr) => {
        #[doc=$doc]
        /// **Panics** if the shapes disagree.
        impl<'a, A, B, const D: usize> $trt<&'a Array<B, D>> for Array<A, D>
        where
            A: $trt<B>,
            B: Clone,
        {
            fn $method(&mut self, rhs: &Array<B, D>) {
                if let Err(err) = self.$try_method(rhs) {
                    shape_mismatch(stringify!($method), err, self.shape(), rhs.shape());
                }
            }
        }

        #[doc=$doc]
        /// **Panics** if the shapes disagree.
        impl<A, B, const D: usize> $trt<Array<B, D>> for Array<A, D>
        where
            A: $trt<B>,
            B: Clone,
        {
            fn $method(&mut self, rhs: Array<B, D>) {
                self.$method(&rhs)
            }
        }
    };
}

impl_assign_op!(
    AddAssign,
    add_assign,
    try_add_assign,
    "Perform `self += rhs` as elementwise addition (in place).\n"
);
impl_assign_op!(
    SubAssign,
    sub_assign,
    try_sub_assign,
    "Perform `self -= rhs` as elementwise subtraction (in place).\n"
);

impl<A, const D: usize> Array<A, D> {
    /// Perform `self += rhs` elementwise, in place.
    ///
    /// **Errors** with `IncompatibleShapes` if the shapes disagree, in
    /// which case `self` is unchanged.
    pub fn try_add_assign<B>(&mut self, rhs: &Array<B, D>) -> Result<(), ShapeError>
    where
        A: AddAssign<B>,
        B: Clone,
    {
        self.zip_mut_with(rhs, |x, y| *x += y.clone())
    }

    /// Perform `self -= rhs` elementwise, in place.
    ///
    /// **Errors** with `IncompatibleShapes` if the shapes disagree, in
    /// which case `self` is unchanged.
    pub fn try_sub_assign<B>(&mut self, rhs: &Array<B, D>) -> Result<(), ShapeError>
    where
        A: SubAssign<B>,
        B: Clone,
    {
        self.zip_mut_with(rhs, |x, y| *x -= y.clone())
    }
}

impl<A, const D: usize> Neg for Array<A, D>
where
    A: Clone + Neg<Output = A>,
{
    type Output = Self;
    /// Perform an elementwise negation of `self` and return the result.
    fn neg(mut self) -> Self {
        for elt in self.iter_mut() {
            *elt = -elt.clone();
        }
        self
    }
}

impl<'a, A, const D: usize> Neg for &'a Array<A, D>
where
    A: Clone + Neg<Output = A>,
{
    type Output = Array<A, D>;
    /// Perform an elementwise negation of reference `self` and return the
    /// result as a new `Array`.
    fn neg(self) -> Array<A, D> {
        self.map(|x| -x.clone())
    }
}
