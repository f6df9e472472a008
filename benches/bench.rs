#![allow(unknown_lints)]

#[macro_use]
extern crate bencher;

use std::mem::size_of;
use bencher::{black_box, Bencher};
use rand_core::{RngCore, SeedableRng};
use xoshiro_lanes::{Xoshiro256PlusPlus, Xoshiro256StarStar};

macro_rules! make_bench_u64 {
    ($name:ident, $rng:path) => {
        fn $name(b: &mut Bencher) {
            type Rng = $rng;
            let mut rng = Rng::seed_from_u64(42);
            b.iter(|| {
                for _ in 0..10 {
                    black_box(rng.next_u64());
                }
            });
            b.bytes = size_of::<u64>() as u64;
        }
    };
}

make_bench_u64!(rand_u64_xoshiro256starstar, Xoshiro256StarStar);
make_bench_u64!(rand_u64_xoshiro256plusplus, Xoshiro256PlusPlus);

fn jump_xoshiro256starstar(b: &mut Bencher) {
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);
    b.iter(|| {
        rng.jump();
        black_box(&rng);
    });
}

benchmark_group!(
    benches,
    rand_u64_xoshiro256starstar,
    rand_u64_xoshiro256plusplus,
    jump_xoshiro256starstar
);
benchmark_main!(benches);
