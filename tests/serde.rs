#![cfg(feature = "serde1")]

use rand_core::{RngCore, SeedableRng};
use xoshiro_lanes::{SplitMix64, Xoshiro256PlusPlus, Xoshiro256StarStar};

macro_rules! serde_rng {
    ($rng:ident) => {
        use std::io::{BufReader, BufWriter};

        let mut rng = $rng::seed_from_u64(0);

        let buf: Vec<u8> = Vec::new();
        let mut buf = BufWriter::new(buf);
        bincode::serialize_into(&mut buf, &rng).expect("Could not serialize");

        let buf = buf.into_inner().unwrap();
        let mut read = BufReader::new(&buf[..]);
        let mut deserialized: $rng = bincode::deserialize_from(&mut read)
            .expect("Could not deserialize");

        for _ in 0..16 {
            assert_eq!(rng.next_u64(), deserialized.next_u64());
        }
    };
}

#[test]
fn test_splitmix64() {
    serde_rng!(SplitMix64);
}

#[test]
fn test_xoshiro256starstar() {
    serde_rng!(Xoshiro256StarStar);
}

#[test]
fn test_xoshiro256plusplus() {
    serde_rng!(Xoshiro256PlusPlus);
}
