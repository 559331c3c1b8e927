#![feature(test)]
#![allow(clippy::many_single_char_names)]

extern crate test;

use ndlattice::{Array2, Array3, Backward, Forward};

use test::black_box;

#[bench]
fn roll_forward_2d(bench: &mut test::Bencher) {
    let a = Array2::<f32>::zeros([64, 64]).unwrap();
    let a = black_box(a);
    bench.iter(|| {
        let mut sum = 0;
        for k in 0..a.len() {
            sum += a.roll_index::<Forward>(k, 1);
        }
        sum
    });
}

#[bench]
fn roll_backward_2d_transposed(bench: &mut test::Bencher) {
    let mut a = Array2::<f32>::zeros([64, 64]).unwrap();
    a.transpose();
    let a = black_box(a);
    bench.iter(|| {
        let mut sum = 0;
        for k in 0..a.len() {
            sum += a.roll_index::<Backward>(k, 0);
        }
        sum
    });
}

#[bench]
fn laplacian_3d(bench: &mut test::Bencher) {
    let a = Array3::<f32>::from_shape_fn([16, 16, 16], |[i, j, k]| (i + j * k) as f32).unwrap();
    let mut out = Array3::<f32>::zeros([16, 16, 16]).unwrap();
    let a = black_box(a);
    bench.iter(|| {
        for k in 0..a.len() {
            let sum: f32 = a.neighbors(k).map(|n| a[n]).sum();
            out[k] = sum - 6. * a[k];
        }
    });
}

#[bench]
fn coordinate_stencil_3d(bench: &mut test::Bencher) {
    let a = Array3::<f32>::from_shape_fn([16, 16, 16], |[i, j, k]| (i + j * k) as f32).unwrap();
    let mut out = Array3::<f32>::zeros([16, 16, 16]).unwrap();
    let a = black_box(a);
    bench.iter(|| {
        for [i, j, k] in a.indices() {
            let n = 16;
            let sum = a[[(i + 1) % n, j, k]]
                + a[[(i + n - 1) % n, j, k]]
                + a[[i, (j + 1) % n, k]]
                + a[[i, (j + n - 1) % n, k]]
                + a[[i, j, (k + 1) % n]]
                + a[[i, j, (k + n - 1) % n]];
            out[[i, j, k]] = sum - 6. * a[[i, j, k]];
        }
    });
}
