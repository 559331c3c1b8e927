#![allow(
    clippy::many_single_char_names,
    clippy::unreadable_literal
)]

//! Conway's game of life on a torus: the board wraps around at every edge,
//! so a glider that leaves on one side comes back on the other.

use ndlattice::prelude::*;

const N: usize = 16;

type Board = Array2<u8>;

const GLIDER: &[[usize; 2]] = &[[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]];

fn count_neighbors(z: &Board, k: Ix) -> u8 {
    // von Neumann neighbors: down, up, right, left
    let mut n = 0;
    let mut vertical = [k; 2];
    for (i, neighbor) in z.neighbors(k).enumerate() {
        if i < 2 {
            vertical[i] = neighbor;
        }
        n += z[neighbor];
    }
    // the diagonals are one step sideways from the vertical neighbors
    for &v in &vertical {
        n += z[z.roll(v, 1)];
        n += z[z.roll(v, -1)];
    }
    n
}

// Rules
//
// 2 or 3 neighbors: stay alive
// 3 neighbors: birth
// otherwise: death

fn iterate(z: &mut Board, scratch: &mut Board) {
    for k in 0..z.len() {
        scratch[k] = count_neighbors(z, k);
    }
    z.zip_mut_with(scratch, |y, &n| *y = ((n == 3) || (n == 2 && *y > 0)) as u8)
        .unwrap();
}

fn render(a: &Board) {
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            if a[[i, j]] > 0 {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn main() {
    env_logger::init();

    let mut a = Board::zeros([N, N]).unwrap();
    for &[i, j] in GLIDER {
        a[[i, j]] = 1;
    }
    let start = a.clone();
    let mut scratch = Board::zeros([N, N]).unwrap();
    // a glider moves one cell diagonally every 4 steps, so it needs 4 * N
    // steps to travel once around the torus
    let steps = 4 * N;
    for _ in 0..steps {
        iterate(&mut a, &mut scratch);
    }
    render(&a);
    let alive = a.iter().filter(|&&x| x > 0).count();
    println!("After {} steps there are {} cells alive", steps, alive);
    assert_eq!(a, start, "the glider came back to where it started");
}
