// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Array;

impl<A, const D: usize> Array<A, D> {
    /// Return `true` if the shapes agree and `f` holds for every pair of
    /// elements with equal coordinates.
    fn all_pairs<B, F>(&self, other: &Array<B, D>, mut f: F) -> bool
    where
        F: FnMut(&A, &B) -> bool,
    {
        if self.shape() != other.shape() {
            return false;
        }
        self.indexed_iter()
            .zip(other.indexed_iter())
            .all(|((_, a), (_, b))| f(a, b))
    }

    /// A test for equality that uses the elementwise absolute difference to
    /// compute the approximate equality of two arrays.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn abs_diff_eq<B>(&self, other: &Array<B, D>, epsilon: A::Epsilon) -> bool
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
    {
        <Self as AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
    }

    /// A test for equality that uses an elementwise relative comparison if
    /// the values are far apart; and the absolute difference otherwise.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn relative_eq<B>(
        &self,
        other: &Array<B, D>,
        epsilon: A::Epsilon,
        max_relative: A::Epsilon,
    ) -> bool
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
    {
        <Self as RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B, const D: usize> AbsDiffEq<Array<B, D>> for Array<A, D>
where
    A: AbsDiffEq<B>,
    A::Epsilon: Clone,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Array<B, D>, epsilon: A::Epsilon) -> bool {
        self.all_pairs(other, move |a, b| A::abs_diff_eq(a, b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B, const D: usize> RelativeEq<Array<B, D>> for Array<A, D>
where
    A: RelativeEq<B>,
    A::Epsilon: Clone,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Array<B, D>,
        epsilon: A::Epsilon,
        max_relative: A::Epsilon,
    ) -> bool {
        self.all_pairs(other, move |a, b| {
            A::relative_eq(a, b, epsilon.clone(), max_relative.clone())
        })
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B, const D: usize> UlpsEq<Array<B, D>> for Array<A, D>
where
    A: UlpsEq<B>,
    A::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Array<B, D>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
        self.all_pairs(other, move |a, b| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
    }
}
