//! A small Bloom filter, a space-efficient probabilistic data structure,
//! probed from a single MurmurHash3 value per item.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! A filter is sized from the number of items `n` it is expected to hold and
//! a target false positive probability `p`:
//!
//! m = ⌈-n ln(p) / (ln 2)<sup>2</sup>⌉ bits, and k = ⌈(m / n) ln 2⌉ probes per item.
//!
//! # Probing
//!
//! Each item is hashed once with the 32-bit x86 variant of MurmurHash3,
//! giving H<sub>1</sub>(x). The k bit positions are derived from it:
//!
//! g<sub>i</sub>(x) = (H<sub>1</sub>(x) + i · 0x5bd1e995) mod m
//!
//! This is cheaper than k independent hashes but much less independent: two
//! items whose hashes differ by a multiple of the stride share most of their
//! probes. [`Probing::Double`] replaces the fixed stride with a per-item odd
//! step mixed out of H<sub>1</sub>(x), after Kirsch and Mitzenmacher, *Less
//! Hashing, Same Performance: Building a Better Bloom Filter*.
//!
//! All position arithmetic is 64-bit, so filters larger than 2<sup>32</sup>
//! bits are supported.
//!
//! # Example
//!
//! ```
//! use strider::BloomFilter;
//!
//! let mut filter = BloomFilter::with_rate(1000, 0.01)?;
//!
//! filter.insert("user1@example.com");
//! filter.insert("user2@example.com");
//!
//! assert!(filter.contains("user1@example.com"));
//! assert!(filter.contains("user2@example.com"));
//! assert!(!filter.contains("user4@example.com"));
//! # Ok::<(), strider::Error>(())
//! ```
//!
//! # Concurrency
//!
//! [`BloomFilter::insert`] takes `&mut self` and [`BloomFilter::contains`]
//! takes `&self`; share a filter across threads behind a `RwLock`.
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod error;
pub mod hash;

pub use bloom::BloomFilter;
pub use error::{Error, Result};
pub use hash::Probing;
