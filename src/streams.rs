// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fan a root generator out into independent per-lane streams.
//!
//! The xoshiro jump functions make this mechanical: one long jump per lane
//! group, one jump per lane within a group, and every lane ends up on a
//! mathematically non-overlapping subsequence of the same period-2^256 − 1
//! cycle. The iterators here wrap that bookkeeping so callers can `take`
//! however many lanes they need.

use rand_core::RngCore;

use crate::{Xoshiro256PlusPlus, Xoshiro256StarStar};

/// A generator whose sequence can be partitioned into non-overlapping
/// streams via polynomial jumps.
pub trait JumpableRng: RngCore + Clone {
    /// Advance the state by 2^128 steps, discarding the outputs.
    fn jump(&mut self);

    /// Advance the state by 2^192 steps, discarding the outputs.
    fn long_jump(&mut self);

    /// Iterate over generators advanced by one, two, three, ... jumps.
    ///
    /// Each yielded generator starts 2^128 steps after the previous one, so
    /// consecutive lanes never overlap as long as each draws fewer than
    /// 2^128 values. The iterator is infinite; bound it with `take`.
    ///
    /// ```
    /// use xoshiro_lanes::rand_core::SeedableRng;
    /// use xoshiro_lanes::{JumpableRng, Xoshiro256StarStar};
    ///
    /// let root = Xoshiro256StarStar::seed_from_u64(7);
    /// let lanes: Vec<_> = root.jumps().take(64).collect();
    /// assert_eq!(lanes.len(), 64);
    /// ```
    fn jumps(self) -> Jumps<Self>
    where
        Self: Sized,
    {
        Jumps { rng: self }
    }

    /// Iterate over generators advanced by one, two, three, ... long jumps.
    ///
    /// Yielded generators are 2^192 steps apart; each can in turn be split
    /// into 2^64 substreams with [`jumps`], giving the two-level fan-out
    /// used to seed large lane counts from a single root. The iterator is
    /// infinite; bound it with `take`.
    ///
    /// [`jumps`]: #method.jumps
    fn long_jumps(self) -> LongJumps<Self>
    where
        Self: Sized,
    {
        LongJumps { rng: self }
    }
}

impl JumpableRng for Xoshiro256StarStar {
    #[inline]
    fn jump(&mut self) {
        Xoshiro256StarStar::jump(self)
    }

    #[inline]
    fn long_jump(&mut self) {
        Xoshiro256StarStar::long_jump(self)
    }
}

impl JumpableRng for Xoshiro256PlusPlus {
    #[inline]
    fn jump(&mut self) {
        Xoshiro256PlusPlus::jump(self)
    }

    #[inline]
    fn long_jump(&mut self) {
        Xoshiro256PlusPlus::long_jump(self)
    }
}

/// Infinite iterator over successively jumped generators.
///
/// Created by [`JumpableRng::jumps`].
///
/// [`JumpableRng::jumps`]: trait.JumpableRng.html#method.jumps
#[derive(Debug, Clone)]
pub struct Jumps<R> {
    rng: R,
}

impl<R: JumpableRng> Iterator for Jumps<R> {
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<R> {
        self.rng.jump();
        Some(self.rng.clone())
    }
}

/// Infinite iterator over successively long-jumped generators.
///
/// Created by [`JumpableRng::long_jumps`].
///
/// [`JumpableRng::long_jumps`]: trait.JumpableRng.html#method.long_jumps
#[derive(Debug, Clone)]
pub struct LongJumps<R> {
    rng: R,
}

impl<R: JumpableRng> Iterator for LongJumps<R> {
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<R> {
        self.rng.long_jump();
        Some(self.rng.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::SeedableRng;

    #[test]
    fn jumps_match_manual_jumping() {
        let root = Xoshiro256StarStar::seed_from_u64(1);
        let mut manual = root.clone();
        let mut iter = root.jumps();
        for _ in 0..4 {
            manual.jump();
            assert_eq!(iter.next().unwrap(), manual);
        }
    }

    #[test]
    fn long_jumps_match_manual_jumping() {
        let root = Xoshiro256PlusPlus::seed_from_u64(1);
        let mut manual = root.clone();
        let mut iter = root.long_jumps();
        for _ in 0..4 {
            manual.long_jump();
            assert_eq!(iter.next().unwrap(), manual);
        }
    }
}
