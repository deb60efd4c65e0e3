//! Hashing algorithm used to place keys into buckets.
//!
//! The word mixing and the folded-multiply byte hash are derived from
//! `rustc-hash` (https://github.com/rust-lang/rustc-hash),
//! licensed under the MIT License.
//! Copyright © the Rust Project Developers.

/// A speedy non-cryptographic hash.
///
/// License serials are typed in by a person at a terminal, so we don't
/// need to pay for DOS-resistant hashing. The output is also unseeded:
/// the same key lands in the same bucket on every run.
#[derive(Debug, Clone, Copy)]
pub struct Hasher {
    hash: u64,
}

#[derive(Debug, Copy, Clone, Default)]
pub struct BuildHasher;

/// Reference: [https://github.com/rust-lang/rustc-hash/blob/1a998d5b89b04ba730d4cd249f811e8b48aa7d8c/src/lib.rs#L63C1-L73C37]
const K: u64 = 0xf1357aea2e62a9c5;

const SEEDS: [u64; 2] = [0x243f6a8885a308d3, 0x13198a2e03707344];

const PREVENT_TRIVIAL_ZERO_COLLAPSE: u64 = 0xa4093822299f31d0;

const ROTATE: u32 = 26;

impl Hasher {
    #[inline]
    pub const fn new() -> Self {
        Self { hash: 0 }
    }

    #[inline]
    const fn add(&mut self, word: u64) {
        self.hash = self.hash.wrapping_add(word).wrapping_mul(K);
    }
}

#[inline]
fn read_u64(bytes: &[u8], at: usize) -> u64 {
    let mut word = [0; 8];
    word.copy_from_slice(&bytes[at..at + 8]);
    u64::from_le_bytes(word)
}

#[inline]
fn read_u32(bytes: &[u8], at: usize) -> u64 {
    let mut word = [0; 4];
    word.copy_from_slice(&bytes[at..at + 4]);
    u32::from_le_bytes(word) as u64
}

/// Hashes a byte string into a single word that is then mixed into the
/// running state.
#[inline]
fn hash_bytes(bytes: &[u8]) -> u64 {
    let [mut s0, mut s1] = SEEDS;
    let len = bytes.len();

    match len {
        0 => {}
        1..=3 => {
            s0 ^= bytes[0] as u64;
            s1 ^= ((bytes[len - 1] as u64) << 8) | bytes[len / 2] as u64;
        }
        4..=7 => {
            s0 ^= read_u32(bytes, 0);
            s1 ^= read_u32(bytes, len - 4);
        }
        8..=16 => {
            s0 ^= read_u64(bytes, 0);
            s1 ^= read_u64(bytes, len - 8);
        }
        _ => {
            let mut offset = 0;
            while offset < len - 16 {
                let x = read_u64(bytes, offset);
                let y = read_u64(bytes, offset + 8);

                let folded = fold(s0 ^ x, PREVENT_TRIVIAL_ZERO_COLLAPSE ^ y);
                s0 = s1;
                s1 = folded;
                offset += 16;
            }

            s0 ^= read_u64(bytes, len - 16);
            s1 ^= read_u64(bytes, len - 8);
        }
    }

    fold(s0, s1) ^ (len as u64)
}

/// Full 128-bit product of both words with the halves xor-ed together.
#[inline]
fn fold(x: u64, y: u64) -> u64 {
    let full = (x as u128).wrapping_mul(y as u128);

    (full as u64) ^ ((full >> 64) as u64)
}

impl std::hash::Hasher for Hasher {
    fn write(&mut self, bytes: &[u8]) {
        self.add(hash_bytes(bytes));
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash.rotate_left(ROTATE)
    }

    fn write_u8(&mut self, word: u8) {
        self.add(word as u64);
    }

    fn write_u16(&mut self, word: u16) {
        self.add(word as u64);
    }

    fn write_u32(&mut self, word: u32) {
        self.add(word as u64);
    }

    fn write_u64(&mut self, word: u64) {
        self.add(word);
    }

    fn write_u128(&mut self, word: u128) {
        self.add(word as u64);
        self.add((word >> 64) as u64);
    }

    fn write_usize(&mut self, word: usize) {
        self.add(word as u64);
    }
}

impl Default for Hasher {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::hash::BuildHasher for BuildHasher {
    type Hasher = Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Hasher::default()
    }
}
