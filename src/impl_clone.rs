// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::Array;

impl<A: Clone, const D: usize> Clone for Array<A, D> {
    /// Copy the elements into fresh storage, keeping shape and strides, so
    /// a transposed array clones into an equally transposed one.
    fn clone(&self) -> Array<A, D> {
        Array {
            data: self.data.clone(),
            layout: self.layout,
        }
    }

    /// Copy-and-swap: the complete copy of `other` is built before `self`
    /// is touched, so a panicking element `clone` leaves `self` unchanged.
    fn clone_from(&mut self, other: &Self) {
        let mut copy = other.clone();
        std::mem::swap(self, &mut copy);
    }
}
