// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::Array;

fn format_array<A, F, const D: usize>(
    array: &Array<A, D>,
    f: &mut fmt::Formatter<'_>,
    mut format: F,
) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let mut last_index = [0; D];
    for _ in 0..D {
        f.write_str("[")?;
    }
    let mut first = true;
    // Walk the logical order and use the index wraparounds as cues for
    // when to close and reopen brackets, and how many.
    for (index, elt) in array.indexed_iter() {
        let mut update_index = false;
        for (i, (a, b)) in index.iter().take(D.saturating_sub(1)).zip(&last_index).enumerate() {
            if a != b {
                // New row.
                let n = D - i - 1;
                for _ in 0..n {
                    f.write_str("]")?;
                }
                f.write_str(",\n")?;
                for _ in 0..D - n {
                    f.write_str(" ")?;
                }
                for _ in 0..n {
                    f.write_str("[")?;
                }
                first = true;
                update_index = true;
                break;
            }
        }
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        format(elt, f)?;

        if update_index {
            last_index = index;
        }
    }
    for _ in 0..D {
        f.write_str("]")?;
    }
    Ok(())
}

/// Format the array using `Display` and apply the formatting parameters
/// used to each element.
///
/// Elements appear in logical order of the current shape, so a transposed
/// array prints transposed. The array is shown in multiline style: a
/// two-dimensional array prints one row per line.
///
/// ```
/// use ndlattice::Array;
///
/// let a = Array::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(a.to_string(), "[[1, 2, 3],\n [4, 5, 6]]");
/// ```
impl<A: fmt::Display, const D: usize> fmt::Display for Array<A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, followed by its shape and
/// strides.
impl<A: fmt::Debug, const D: usize> fmt::Debug for Array<A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Add extra information for Debug
        format_array(self, f, <_>::fmt)?;
        write!(
            f,
            " shape={:?}, strides={:?}, const ndim={}",
            self.shape(),
            self.strides(),
            D
        )
    }
}

/// Format the array using `LowerExp` and apply the formatting parameters
/// used to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::LowerExp, const D: usize> fmt::LowerExp for Array<A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `UpperExp` and apply the formatting parameters
/// used to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::UpperExp, const D: usize> fmt::UpperExp for Array<A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}
