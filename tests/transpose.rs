use ndlattice::prelude::*;

use itertools::iproduct;
use quickcheck::quickcheck;

#[test]
fn transpose_matrix() {
    let mut a = Array::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    let before = a.clone();
    a.transpose();
    assert_eq!(a.shape(), &[3, 2]);
    assert_eq!(a.strides(), &[1, 3]);
    assert!(!a.is_standard_layout());
    // no element moved
    assert_eq!(a.as_slice(), before.as_slice());
    for (i, j) in iproduct!(0..2, 0..3) {
        assert_eq!(a[[j, i]], before[[i, j]]);
        assert_eq!(a.offset_of([j, i]), before.offset_of([i, j]));
    }
    assert_eq!(a[[1, 0]], before[[0, 1]]);
}

#[test]
fn swap_axes_rank_three() {
    let mut a = Array::<usize, 3>::from_shape_fn([2, 3, 4], |[i, j, k]| 100 * i + 10 * j + k).unwrap();
    a.swap_axes(0, 2);
    assert_eq!(a.shape(), &[4, 3, 2]);
    assert_eq!(a.strides(), &[1, 4, 12]);
    assert_eq!(a.raw_strides(), vec![24, 1, 4, 12]);
    assert_eq!(a[[3, 1, 0]], 13);
    assert_eq!(a[(3, 1)], 13);
    assert_eq!(a[(3,)], 3);
    assert_eq!(a.len_of(0), 4);
}

#[test]
fn swap_same_axis_is_noop() {
    let mut a = Array3::<u8>::zeros([2, 3, 4]).unwrap();
    a.swap_axes(1, 1);
    assert_eq!(a.shape(), &[2, 3, 4]);
    assert_eq!(a.strides(), &[12, 4, 1]);
    assert!(a.is_standard_layout());
}

#[test]
fn partial_index_after_transpose() {
    let mut a = Array::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    a.transpose();
    // (2,) means (2, 0) in the current axis order
    assert_eq!(a[(2,)], 3);
    assert_eq!(a.get((2,)), a.get([2, 0]));
}

#[test]
fn mutation_after_transpose() {
    let mut a = Array2::<i32>::zeros([2, 3]).unwrap();
    a.transpose();
    a[[2, 1]] = 8;
    a.transpose();
    assert_eq!(a[[1, 2]], 8);
    assert_eq!(a[5], 8);
    assert!(a.is_standard_layout());
}

#[test]
fn square_transpose_is_not_standard() {
    let mut a = Array2::<i32>::zeros([3, 3]).unwrap();
    a.transpose();
    assert_eq!(a.shape(), &[3, 3]);
    assert!(!a.is_standard_layout());
}

#[test]
#[should_panic]
fn transpose_rank_one() {
    let mut a = Array1::<i32>::zeros([3]).unwrap();
    a.transpose();
}

#[test]
#[should_panic]
fn swap_axes_out_of_bounds() {
    let mut a = Array2::<i32>::zeros([3, 3]).unwrap();
    a.swap_axes(0, 2);
}

quickcheck! {
    fn swap_twice_restores(a: u8, b: u8, c: u8, ax: u8, bx: u8) -> bool {
        let shape = [a as usize % 4 + 1, b as usize % 4 + 1, c as usize % 4 + 1];
        let (ax, bx) = (ax as usize % 3, bx as usize % 3);
        let mut arr = Array::<usize, 3>::from_shape_fn(shape, |[i, j, k]| i * 100 + j * 10 + k).unwrap();
        let original = arr.clone();
        arr.swap_axes(ax, bx);
        arr.swap_axes(ax, bx);
        arr.shape() == original.shape() && arr.strides() == original.strides() && arr == original
    }

    fn swap_moves_coordinates(a: u8, b: u8, c: u8, ax: u8, bx: u8) -> bool {
        let shape = [a as usize % 4 + 1, b as usize % 4 + 1, c as usize % 4 + 1];
        let (ax, bx) = (ax as usize % 3, bx as usize % 3);
        let original = Array::<usize, 3>::from_shape_fn(shape, |[i, j, k]| i * 100 + j * 10 + k).unwrap();
        let mut arr = original.clone();
        arr.swap_axes(ax, bx);
        original.indices().all(|index| {
            let mut swapped = index;
            swapped.swap(ax, bx);
            arr[swapped] == original[index]
                && arr.offset_of(swapped) == original.offset_of(index)
        })
    }
}
