//! Dual-strategy implementation of the PRESENT block cipher with an 80-bit
//! key. The [`scalar`] engine advances one 64-bit block at a time using
//! nibble table lookups; the [`bitsliced`] engine transposes 32 blocks into
//! bit-plane registers and pushes all of them through the 31-round
//! substitution-permutation network at once, evaluating the S-box as pure
//! boolean logic. Both engines consume the same key schedule and produce
//! byte-identical ciphertext.

#[macro_use]
extern crate lazy_static;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod bits;
pub mod bitsliced;
pub mod key;
pub mod parallel;
pub mod sbox;
pub mod scalar;
pub mod slicing;

pub use crate::bitsliced::encrypt_batch;
pub use crate::key::KeyRegister;
pub use crate::parallel::encrypt_blocks;
pub use crate::scalar::Present;
pub use crate::slicing::BATCH_WIDTH;

/// A single 64-bit cipher block. Bit `i` of the block lives in byte `i / 8`
/// at position `i % 8`, so the numeric value of a block is its
/// little-endian reading.
pub type Block = [u8; 8];

/// Number of rounds of the substitution-permutation network. The round
/// key is mixed in at the start of every round, with one trailing key-mix
/// after the last round.
pub const ROUNDS: usize = 31;
