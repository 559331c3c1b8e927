use ndlattice::prelude::*;

use quickcheck::quickcheck;

#[test]
fn test_clone_from() {
    let a = Array::from_shape_vec([3, 3], vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    let b = Array::from_shape_vec([1, 3], vec![7, 7, 7]).unwrap();
    let mut c = b.clone();
    c.clone_from(&a);
    assert_eq!(a, c);
    assert_eq!(c.shape(), &[3, 3]);

    // and back again, from the larger to the smaller shape
    c.clone_from(&b);
    assert_eq!(b, c);
}

#[test]
fn clone_is_independent() {
    let a = Array2::<i32>::ones([2, 2]).unwrap();
    let mut b = a.clone();
    b[[0, 1]] = 5;
    assert_eq!(a[[0, 1]], 1);
    assert_eq!(b[[0, 1]], 5);
}

#[test]
fn clone_of_transposed() {
    let mut a = Array::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    a.transpose();
    let b = a.clone();
    assert_eq!(b.shape(), a.shape());
    assert_eq!(b.strides(), a.strides());
    for index in a.indices() {
        assert_eq!(b[index], a[index]);
    }
    assert_eq!(b[[2, 1]], 6);
}

#[test]
fn clone_from_empty() {
    let mut a = Array2::<f64>::zeros([2, 2]).unwrap();
    a.clone_from(&Array2::empty());
    assert!(a.is_empty());
    assert_eq!(a.shape(), &[0, 0]);

    let e = Array2::<f64>::empty();
    let mut f = e.clone();
    assert!(f.is_empty());
    f.clone_from(&Array2::ones([1, 1]).unwrap());
    assert_eq!(f[0], 1.);
}

#[test]
fn take_then_clone() {
    let mut a = Array::from_shape_vec([2, 2], vec!['a', 'b', 'c', 'd']).unwrap();
    let b = std::mem::take(&mut a);
    assert_eq!(a.clone(), Array2::<char>::empty());
    assert_eq!(b[[1, 0]], 'c');
}

quickcheck! {
    fn copies_are_equal(v: Vec<u32>, swap: bool) -> bool {
        if v.len() < 2 {
            return true;
        }
        let n = v.len() / 2;
        let mut a = Array2::from_shape_vec([2, n], v[..2 * n].to_vec()).unwrap();
        if swap {
            a.transpose();
        }
        let b = a.clone();
        let mut c = Array2::empty();
        c.clone_from(&a);
        b == a && c == a
    }
}
