// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Fixed-length packed bit storage.
use std::collections::TryReserveError;
use std::fmt::Debug;

/// A packed bit vector whose length is set once, at construction.
///
/// Bits can be set but never cleared.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Vec<u8>,
    nbits: usize,
}

impl BitVec {
    /// Create a new, zeroed bit vector holding `nbits` bits.
    pub fn new(nbits: usize) -> Self {
        Self {
            nbits,
            bytes: vec![0; byte_len(nbits)],
        }
    }

    /// Like [`BitVec::new`], but returns an error instead of aborting when
    /// the storage cannot be allocated.
    pub fn try_new(nbits: usize) -> Result<Self, TryReserveError> {
        let len = byte_len(nbits);
        let mut bytes = Vec::new();

        bytes.try_reserve_exact(len)?;
        bytes.resize(len, 0);

        Ok(Self { nbits, bytes })
    }

    /// Get the length in bits of the vector.
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Check whether this vector is empty, ie. has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Set a single bit to `1`.
    pub fn set(&mut self, index: usize) {
        let (byte, mask) = self.locate(index);

        self.bytes[byte] |= mask;
    }

    /// Check whether a bit is set.
    pub fn is_set(&self, index: usize) -> bool {
        let (byte, mask) = self.locate(index);

        self.bytes[byte] & mask == mask
    }

    /// Count the number of `1` bits.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Count the number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn locate(&self, index: usize) -> (usize, u8) {
        if index >= self.len() {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index,
            )
        }
        (index / 8, 0x01 << (index % 8))
    }
}

/// Number of bytes needed to hold `nbits` bits.
fn byte_len(nbits: usize) -> usize {
    nbits / 8 + usize::from(nbits % 8 != 0)
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.nbits > 256 {
            return write!(f, "BitVec({} bits, {} set)", self.nbits, self.count_ones());
        }
        let bits: String = (0..self.nbits)
            .map(|i| if self.is_set(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitVec({})", bits)
    }
}
