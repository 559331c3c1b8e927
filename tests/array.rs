#![allow(
    clippy::many_single_char_names,
    clippy::float_cmp
)]

use ndlattice::prelude::*;
use ndlattice::ErrorKind;

use quickcheck::quickcheck;
use std::collections::HashSet;

#[test]
fn construct_zeros() {
    let a = Array2::<i32>::zeros([2, 3]).unwrap();
    assert_eq!(a.shape(), &[2, 3]);
    assert_eq!(a.strides(), &[3, 1]);
    assert_eq!(a.len(), 6);
    assert_eq!(a.ndim(), 2);
    assert_eq!(a.len_of(0), 2);
    assert_eq!(a.len_of(1), 3);
    assert_eq!(a.stride_of(0), 3);
    assert!(!a.is_empty());
    assert!(a.is_standard_layout());
    assert!(a.iter().all(|&x| x == 0));
}

#[test]
fn construct_from_shape_list() {
    let a = Array3::<u8>::ones(&[2usize, 3, 4][..]).unwrap();
    assert_eq!(a.shape(), &[2, 3, 4]);
    assert_eq!(a.strides(), &[12, 4, 1]);
    assert_eq!(a.raw_strides(), vec![24, 12, 4, 1]);

    let b = Array3::<u8>::ones(vec![2usize, 3, 4]).unwrap();
    assert_eq!(a, b);

    let c = Array3::<u8>::from_elem(Shape::uniform(3), 7).unwrap();
    assert_eq!(c.shape(), &[3, 3, 3]);
    assert_eq!(c.len(), 27);
    assert!(c.iter().all(|&x| x == 7));
}

#[test]
fn construct_errors() {
    let _ = env_logger::builder().is_test(true).try_init();

    let e = Array2::<f64>::zeros([2, 0]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::ZeroExtent);

    let e = Array2::<f64>::zeros(&[2usize, 3, 4][..]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::RankMismatch);

    let e = Array2::<f64>::zeros(vec![5usize]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::RankMismatch);

    let e = Array2::<u8>::zeros([usize::MAX, 2]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Overflow);

    let e = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4, 5]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::OutOfBounds);

    let e = Array1::<i32>::from_vec(vec![]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::ZeroExtent);
}

#[test]
fn error_display() {
    let e = Array2::<f64>::zeros([0, 1]).unwrap_err();
    let msg = e.to_string();
    assert!(msg.starts_with("ShapeError/ZeroExtent"), "{}", msg);
    assert_eq!(format!("{:?}", e), msg);
}

#[test]
fn from_shape_fn_is_row_major() {
    let a = Array::<usize, 3>::from_shape_fn([2, 3, 4], |[i, j, k]| 100 * i + 10 * j + k).unwrap();
    assert_eq!(a[0], 0);
    assert_eq!(a[1], 1);
    assert_eq!(a[4], 10);
    assert_eq!(a[12], 100);
    assert_eq!(a[23], 123);
}

#[test]
fn from_shape_simple_fn_counts() {
    let mut n = 0;
    let a = Array2::from_shape_simple_fn([3, 2], || {
        n += 1;
        n
    })
    .unwrap();
    assert_eq!(a.as_slice(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn eye() {
    let a = Array2::<f32>::eye(3).unwrap();
    for (i, j) in itertools::iproduct!(0..3usize, 0..3usize) {
        assert_eq!(a[[i, j]], if i == j { 1. } else { 0. });
    }
}

#[test]
fn empty_array() {
    let a = Array3::<f64>::empty();
    assert!(a.is_empty());
    assert_eq!(a.len(), 0);
    assert_eq!(a.shape(), &[0, 0, 0]);
    assert_eq!(a.strides(), &[0, 0, 0]);
    assert_eq!(a.iter().count(), 0);
    assert_eq!(a.indexed_iter().count(), 0);
    assert_eq!(a.get([0, 0, 0]), None);
    assert_eq!(a.get_raw(0), None);
    assert_eq!(a.get(&[0usize; 0][..]), None);
    assert_eq!(a.get((0,)), None);
    assert_eq!(a.offset_of(&[0usize; 0][..]), None);

    let b: Array3<f64> = Default::default();
    assert_eq!(a, b);
}

#[test]
fn take_leaves_empty() {
    let mut a = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    let original = a.clone();
    let b = std::mem::take(&mut a);
    assert!(a.is_empty());
    assert_eq!(a.shape(), &[0, 0]);
    assert_eq!(a.get(&[0usize; 0][..]), None);
    assert_eq!(b, original);
    assert_eq!(b.shape(), &[2, 2]);

    // an empty array can take a new value again
    a = b;
    assert_eq!(a, original);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_empty_with_no_components() {
    let a = Array2::<i32>::empty();
    let _ = a[&[0usize; 0][..]];
}

#[test]
fn fill() {
    let mut a = Array2::<i32>::zeros([3, 4]).unwrap();
    a.fill(9);
    assert!(a.iter().all(|&x| x == 9));

    let mut e = Array2::<i32>::empty();
    e.fill(9);
    assert!(e.is_empty());
    assert_eq!(e.iter().count(), 0);
}

#[test]
fn map_and_convert() {
    let mut a = Array::from_shape_vec([2, 3], vec![1u8, 2, 3, 4, 5, 6]).unwrap();
    let b = a.map(|&x| x as i32 * 2);
    assert_eq!(b.as_slice(), &[2, 4, 6, 8, 10, 12]);
    assert_eq!(b.strides(), a.strides());

    a.transpose();
    let c: Array2<f64> = a.convert();
    assert_eq!(c.shape(), &[3, 2]);
    assert_eq!(c.strides(), a.strides());
    for index in a.indices() {
        assert_eq!(c[index], a[index] as f64);
    }
}

#[test]
fn into_iter_and_raw_vec() {
    let mut a = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    for x in &mut a {
        *x *= 10;
    }
    let sum: i32 = (&a).into_iter().sum();
    assert_eq!(sum, 100);
    let v: Vec<_> = a.clone().into_iter().collect();
    assert_eq!(v, vec![10, 20, 30, 40]);
    assert_eq!(a.into_raw_vec(), vec![10, 20, 30, 40]);
}

#[test]
fn equality_ignores_layout() {
    let mut a = Array::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    a.transpose();
    let b = Array::from_shape_vec([3, 2], vec![1, 4, 2, 5, 3, 6]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a.as_slice(), b.as_slice());

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}

#[test]
fn footprint_counts_storage() {
    let a = Array2::<u64>::zeros([4, 4]).unwrap();
    let e = Array2::<u64>::empty();
    assert!(a.footprint() >= e.footprint() + 16 * std::mem::size_of::<u64>());
}

#[test]
fn indexed_iter_logical_order() {
    let a = Array::from_shape_vec([2, 2, 2], (0..8).collect()).unwrap();
    let items: Vec<_> = a.indexed_iter().map(|(i, &x)| (i, x)).collect();
    assert_eq!(items.len(), 8);
    assert_eq!(items[0], ([0, 0, 0], 0));
    assert_eq!(items[1], ([0, 0, 1], 1));
    assert_eq!(items[2], ([0, 1, 0], 2));
    assert_eq!(items[7], ([1, 1, 1], 7));
}

quickcheck! {
    fn len_is_product_of_shape(a: u8, b: u8, c: u8) -> bool {
        let shape = [a as usize % 5 + 1, b as usize % 5 + 1, c as usize % 5 + 1];
        let arr = Array3::<u8>::zeros(shape).unwrap();
        arr.len() == shape.iter().product::<usize>()
            && arr.strides()[2] == 1
            && arr.raw_strides()[0] == arr.len()
    }

    fn fill_sets_every_element(a: u8, b: u8, value: i64) -> bool {
        let mut arr = Array2::<i64>::zeros([a as usize % 6 + 1, b as usize % 6 + 1]).unwrap();
        arr.fill(value);
        arr.iter().all(|&x| x == value)
    }
}
