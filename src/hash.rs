// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Item hashing and probe derivation.
//!
//! Every item is hashed exactly once with MurmurHash3 (x86, 32-bit). The `k`
//! probe positions are then derived arithmetically from that single value,
//! see [`Probing`].
use std::fmt;
use std::io::Cursor;

/// Seed used when hashing filter items.
pub const SEED: u32 = 0;

/// Fixed stride of the linear probe scheme. This is the MurmurHash2 mixing
/// constant, which is odd.
pub const STRIDE: u64 = 0x5bd1e995;

/// Compute the MurmurHash3 x86 32-bit hash of `bytes`.
///
/// The function is pure: there is no hasher state to reset between items.
///
/// ```
/// use strider::hash::murmur3_32;
///
/// assert_eq!(murmur3_32(b"hello", 0), 0x248bfa47);
/// ```
pub fn murmur3_32(bytes: &[u8], seed: u32) -> u32 {
    // Reads from an in-memory slice cannot fail.
    murmur3::murmur3_32(&mut Cursor::new(bytes), seed)
        .unwrap_or_else(|err| unreachable!("reading from a slice failed: {err}"))
}

/// Final avalanche step of MurmurHash3, used to derive the double hashing step.
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

/// How the `k` probe positions of an item are derived from its hash `h1`.
///
/// Both schemes hash the item once. All arithmetic is done on `u64`, so
/// filters with more than `u32::MAX` bits are addressed without truncation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Probing {
    /// `(h1 + i * 0x5bd1e995) mod m`.
    ///
    /// Every item probes a shifted copy of the same arithmetic progression,
    /// so probe sets of different items overlap far more often than
    /// independent hashes would. The realised false positive rate at full
    /// capacity is well above the configured one.
    #[default]
    Linear,
    /// Double hashing: `(h1 + i * h2) mod m`, where the odd step `h2` is
    /// obtained by re-mixing `h1`. Gives false positive rates in line with
    /// the configured one.
    Double,
}

impl Probing {
    /// Return the bit position of probe `i` for an item with hash `h1`, in a
    /// filter of `m` bits. `m` is never zero for a constructed filter.
    #[inline]
    pub(crate) fn position(self, h1: u32, i: u64, m: u64) -> u64 {
        debug_assert!(m > 0, "probing an empty bit vector");

        let step = match self {
            Probing::Linear => STRIDE,
            Probing::Double => u64::from(fmix32(h1 ^ STRIDE as u32) | 1),
        };
        u64::from(h1).wrapping_add(i.wrapping_mul(step)) % m
    }

    /// Iterate over the `k` probe positions of `item` in a filter of `m` bits.
    pub(crate) fn positions(self, item: &[u8], k: usize, m: u64) -> impl Iterator<Item = u64> {
        let h1 = murmur3_32(item, SEED);

        (0..k as u64).map(move |i| self.position(h1, i, m))
    }
}

impl fmt::Display for Probing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Probing::Linear => write!(f, "linear"),
            Probing::Double => write!(f, "double"),
        }
    }
}
