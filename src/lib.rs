// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Xoshiro256 pseudorandom number generators with jump-based stream
//! partitioning, intended to feed many parallel execution lanes (for example
//! GPU threads enumerating candidates in a parallel search) with independent,
//! non-overlapping 64-bit pseudorandom sequences.
//!
//! The generators are translated from the reference C sources by David
//! Blackman and Sebastiano Vigna and reproduce their output bit for bit.
//! They are statistically strong but *not* cryptographically secure.
//!
//! # Generators
//! - [`Xoshiro256StarStar`]: the all-purpose generator. 256 bits of state,
//!   period 2^256 − 1, excellent speed and statistical quality.
//! - [`Xoshiro256PlusPlus`]: the same linear engine with the ++ scrambler,
//!   an equally solid alternative.
//! - [`SplitMix64`]: auxiliary generator used to expand a 64-bit seed into
//!   full 256-bit state; backs `seed_from_u64` on the generators above.
//!
//! # Partitioning streams across lanes
//! Both xoshiro generators provide `jump()` (advance by 2^128 steps) and
//! `long_jump()` (advance by 2^192 steps). Repeated long jumps from one root
//! yield up to 2^64 widely separated starting points, and each of those can
//! be split into 2^64 non-overlapping substreams by repeated jumps. The
//! [`JumpableRng`] trait and the [`Jumps`]/[`LongJumps`] iterators package
//! this two-level fan-out:
//!
//! ```
//! use xoshiro_lanes::rand_core::SeedableRng;
//! use xoshiro_lanes::{JumpableRng, Xoshiro256StarStar};
//!
//! let root = Xoshiro256StarStar::seed_from_u64(0);
//! // One state per lane, e.g. for upload to a device buffer.
//! let lanes: Vec<[u64; 4]> = root
//!     .long_jumps()
//!     .take(1024)
//!     .map(|rng| rng.words())
//!     .collect();
//! assert_eq!(lanes.len(), 1024);
//! ```
//!
//! Each lane owns its state exclusively; no operation here synchronizes or
//! detects aliasing, so handing the same state to two lanes corrupts both
//! sequences.
//!
//! [`Xoshiro256StarStar`]: struct.Xoshiro256StarStar.html
//! [`Xoshiro256PlusPlus`]: struct.Xoshiro256PlusPlus.html
//! [`SplitMix64`]: struct.SplitMix64.html
//! [`JumpableRng`]: trait.JumpableRng.html
//! [`Jumps`]: struct.Jumps.html
//! [`LongJumps`]: struct.LongJumps.html

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::unreadable_literal)]
#![no_std]

#[macro_use]
mod common;
mod splitmix64;
mod streams;
mod xoshiro256plusplus;
mod xoshiro256starstar;

pub use rand_core;
pub use splitmix64::SplitMix64;
pub use streams::{JumpableRng, Jumps, LongJumps};
pub use xoshiro256plusplus::Xoshiro256PlusPlus;
pub use xoshiro256starstar::Xoshiro256StarStar;
