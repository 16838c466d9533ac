// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A Bloom filter sized from an expected item count and a target false
//! positive rate, probed from a single MurmurHash3 value per item.

use std::f64;

use tracing::{debug, trace, warn};

use crate::bitvec::BitVec;
use crate::error::{Error, Result};
use crate::hash::Probing;

/// The default false positive probability value, 1%.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.01;

/// `ln` squared.
const LN_SQR: f64 = f64::consts::LN_2 * f64::consts::LN_2;

/// Largest bit vector we agree to allocate.
const MAX_BITS: usize = isize::MAX as usize;

/// A Bloom filter over byte strings.
///
/// Items are anything that can be viewed as bytes: `&str`, `String`,
/// `&[u8]`, `Vec<u8>`, ...
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    bits: BitVec,
    nhashes: usize,
    probing: Probing,
}

impl BloomFilter {
    /// Return a new Bloom filter with a given approximate item capacity.
    /// The false positive probability is [`DEFAULT_FALSE_POSITIVE_RATE`].
    pub fn new(capacity: usize) -> Result<BloomFilter> {
        BloomFilter::with_rate(capacity, DEFAULT_FALSE_POSITIVE_RATE)
    }

    /// Return a new Bloom filter with a given approximate item capacity
    /// and a desired false positive rate.
    ///
    /// Fails if `capacity` is zero or `fp_rate` is not strictly between `0`
    /// and `1`, or if the resulting filter would be too large to allocate.
    ///
    /// ```
    /// use strider::BloomFilter;
    ///
    /// let bf = BloomFilter::with_rate(1000, 0.01).unwrap();
    ///
    /// assert_eq!(bf.bits(), 9586);
    /// assert_eq!(bf.hashes(), 7);
    /// assert!(BloomFilter::with_rate(0, 0.01).is_err());
    /// ```
    pub fn with_rate(capacity: usize, fp_rate: f64) -> Result<BloomFilter> {
        BloomFilter::with_rate_and_probing(capacity, fp_rate, Probing::default())
    }

    /// Like [`BloomFilter::with_rate`], using the given probe scheme.
    ///
    /// The scheme is fixed for the lifetime of the filter: items inserted
    /// under one scheme are not found under another.
    ///
    /// ```
    /// use strider::{BloomFilter, Probing};
    ///
    /// let mut bf = BloomFilter::with_rate_and_probing(1000, 0.01, Probing::Double).unwrap();
    /// bf.insert("user1@example.com");
    ///
    /// assert!(bf.contains("user1@example.com"));
    /// assert_eq!(bf.probing(), Probing::Double);
    /// ```
    pub fn with_rate_and_probing(
        capacity: usize,
        fp_rate: f64,
        probing: Probing,
    ) -> Result<BloomFilter> {
        if let Err(err) = validate(capacity, fp_rate) {
            warn!(capacity, fp_rate, %err, "Refusing to build bloom filter");
            return Err(err);
        }
        let raw = raw_bits(capacity, fp_rate);
        if !raw.is_finite() || raw > MAX_BITS as f64 {
            warn!(capacity, fp_rate, bits = raw, "Bloom filter is too large");
            return Err(Error::TooLarge { bits: raw });
        }
        let nbits = raw as usize;
        let nhashes = optimal_hashes(nbits, capacity);

        let bits = BitVec::try_new(nbits).map_err(|err| {
            warn!(capacity, fp_rate, bits = nbits, %err, "Cannot allocate bloom filter");
            Error::TooLarge { bits: raw }
        })?;

        debug!(
            capacity,
            fp_rate,
            bits = nbits,
            hashes = nhashes,
            %probing,
            "Created bloom filter"
        );

        Ok(BloomFilter {
            bits,
            nhashes,
            probing,
        })
    }

    /// Set an item in the Bloom filter. This operation is idempotent with regards
    /// to each unique item.
    pub fn insert(&mut self, item: impl AsRef<[u8]>) {
        let item = item.as_ref();
        let nbits = self.bits.len() as u64;

        trace!(len = item.len(), "Inserting item");

        for index in self.probing.positions(item, self.nhashes, nbits) {
            self.bits.set(index as usize);
        }
    }

    /// Return whether or not a given item is likely in the Bloom filter or not. There is a
    /// possibility for a false positive, but a false negative will never occur.
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        let item = item.as_ref();
        let nbits = self.bits.len() as u64;

        let found = self
            .probing
            .positions(item, self.nhashes, nbits)
            .all(|index| self.bits.is_set(index as usize));

        trace!(len = item.len(), found, "Queried item");

        found
    }

    /// Return the number of bits in this filter (`m` parameter).
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hashes used (`k` parameter).
    pub fn hashes(&self) -> usize {
        self.nhashes
    }

    /// Probe scheme in use.
    pub fn probing(&self) -> Probing {
        self.probing
    }

    /// Number of bits currently set.
    pub fn ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }
}

impl AsRef<[u8]> for BloomFilter {
    fn as_ref(&self) -> &[u8] {
        self.bits.as_bytes()
    }
}

fn validate(capacity: usize, fp_rate: f64) -> Result<()> {
    if capacity == 0 {
        return Err(Error::invalid("capacity", "must be at least 1"));
    }
    // Also catches NaN.
    if !(fp_rate > 0. && fp_rate < 1.) {
        return Err(Error::invalid(
            "fp_rate",
            format!("must be in the open interval (0, 1), got {fp_rate}"),
        ));
    }
    Ok(())
}

fn raw_bits(capacity: usize, fp_rate: f64) -> f64 {
    (-(capacity as f64) * fp_rate.ln() / LN_SQR).ceil()
}

/// Return the optimal bit vector size for a Bloom filter given an approximate
/// size and a desired false positive rate.
///
/// Parameters are not validated; out of range results saturate.
pub fn optimal_bits(capacity: usize, fp_rate: f64) -> usize {
    raw_bits(capacity, fp_rate) as usize
}

/// Return the optimal number of hash functions for a Bloom filter given a
/// bit vector size and an approximate set size.
///
/// Also called `k`. Never less than one.
pub fn optimal_hashes(nbits: usize, capacity: usize) -> usize {
    ((nbits as f64 / capacity as f64) * f64::consts::LN_2)
        .ceil()
        .max(1.) as usize
}
