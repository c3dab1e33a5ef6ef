//! Bit-sliced implementation advancing 32 blocks in parallel.
//!
//! The batch is transposed into 64 bit-plane registers, one per block bit
//! position. The substitution layer then becomes pure boolean logic over
//! groups of four registers (no table lookup), and the permutation layer
//! becomes a relabeling of whole registers, each operation touching all
//! 32 blocks at once.

use crate::bits::permuted_position;
use crate::key::KeyRegister;
use crate::slicing::{from_sliced, to_sliced, BsReg, BATCH_WIDTH};
use crate::{Block, ROUNDS};

const ALL_ONES: BsReg = !0;

/// Encrypts a batch of 32 blocks under a single key shared by the whole
/// batch. The batch width is fixed; callers with fewer blocks pad the
/// batch and discard the padded outputs.
pub fn encrypt_batch(blocks: [Block; BATCH_WIDTH], key: KeyRegister) -> [Block; BATCH_WIDTH] {
    let mut state = to_sliced(&blocks);
    let mut key = key;

    for r in 1..=ROUNDS as u8 {
        add_round_key(&mut state, key.round_key());
        sbox_layer(&mut state);
        pbox_layer(&mut state);
        key = key.advance(r);
    }

    add_round_key(&mut state, key.round_key());

    from_sliced(&state)
}

/// Mixes the scalar round key into the state by broadcasting each key bit
/// across the register holding that bit position: an all-ones mask where
/// the key bit is set, zero where it is not.
fn add_round_key(state: &mut [BsReg; 64], round_key: u64) {
    for (i, reg) in state.iter_mut().enumerate() {
        *reg ^= (((round_key >> i) & 1) as BsReg).wrapping_neg();
    }
}

/// Applies the S-box to all 16 nibble positions, each held by a group of
/// four consecutive registers (`x0..x3` = nibble bit 0..3 across the
/// batch).
fn sbox_layer(state: &mut [BsReg; 64]) {
    for group in state.chunks_exact_mut(4) {
        let (x0, x1, x2, x3) = (group[0], group[1], group[2], group[3]);

        group[0] = sbox0(x0, x1, x2, x3);
        group[1] = sbox1(x0, x1, x2, x3);
        group[2] = sbox2(x0, x1, x2, x3);
        group[3] = sbox3(x0, x1, x2, x3);
    }
}

/// Permutes the block bit positions by moving whole registers: a register
/// here plays the role a single bit plays in the scalar engine, so the
/// index function is the same.
fn pbox_layer(state: &mut [BsReg; 64]) {
    let mut out = [0; 64];

    for (i, &reg) in state.iter().enumerate() {
        out[permuted_position(i)] = reg;
    }

    *state = out;
}

// The four output-bit formulas of the S-box. Together they reproduce the
// lookup table for every nibble value; the equivalence is pinned by
// `sbox_formulas_match_table` below and the formulas must not be touched
// without it.

fn sbox0(x0: BsReg, x1: BsReg, x2: BsReg, x3: BsReg) -> BsReg {
    x0 ^ (x1 & x2) ^ x2 ^ x3
}

fn sbox1(x0: BsReg, x1: BsReg, x2: BsReg, x3: BsReg) -> BsReg {
    let c = x2 & x3;
    ((x0 & x1) & (x2 ^ x3)) ^ (x3 & x1) ^ x1 ^ (x0 & c) ^ c ^ x3
}

fn sbox2(x0: BsReg, x1: BsReg, x2: BsReg, x3: BsReg) -> BsReg {
    let c = x0 & x3;
    (x0 & x1) ^ (c & x1) ^ (x3 & x1) ^ x2 ^ c ^ (c & x2) ^ x3 ^ ALL_ONES
}

fn sbox3(x0: BsReg, x1: BsReg, x2: BsReg, x3: BsReg) -> BsReg {
    let c = x1 & x2;
    (c & x0) ^ ((x3 & x0) & (x1 ^ x2)) ^ x0 ^ x1 ^ c ^ x3 ^ ALL_ONES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbox::SBOX;
    use crate::scalar::Present;

    fn key_from_parts(a: u64, b: u16) -> KeyRegister {
        let mut bytes = [0; 10];
        bytes[..8].copy_from_slice(&a.to_le_bytes());
        bytes[8..].copy_from_slice(&b.to_le_bytes());
        KeyRegister::new(bytes)
    }

    #[test]
    fn sbox_formulas_match_table() {
        for x in 0..16u32 {
            // broadcast each input bit across a full register
            let spread = |b: usize| ((x >> b) & 1).wrapping_neg();
            let (x0, x1, x2, x3) = (spread(0), spread(1), spread(2), spread(3));

            let y = (sbox0(x0, x1, x2, x3) & 1)
                | (sbox1(x0, x1, x2, x3) & 1) << 1
                | (sbox2(x0, x1, x2, x3) & 1) << 2
                | (sbox3(x0, x1, x2, x3) & 1) << 3;

            assert_eq!(u32::from(SBOX[x as usize]), y);
        }
    }

    #[test]
    fn encryption_test() {
        let key = KeyRegister::new([0x00; 10]);
        let ct = encrypt_batch([[0x00; 8]; BATCH_WIDTH], key);

        for block in ct.iter() {
            assert_eq!(0x5579c1387b228445, u64::from_le_bytes(*block));
        }
    }

    #[test]
    fn distinct_blocks_match_the_scalar_engine() {
        let cipher = Present::new();
        let key = KeyRegister::new([0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x55, 0xaa]);

        let mut blocks = [[0; 8]; BATCH_WIDTH];
        for (j, block) in blocks.iter_mut().enumerate() {
            *block = (j as u64).wrapping_mul(0x0123_4567_89ab_cdef).to_le_bytes();
        }

        let ct = encrypt_batch(blocks, key);

        for (pt, slot) in blocks.iter().zip(ct.iter()) {
            assert_eq!(cipher.encrypt_block(*pt, key), *slot);
        }
    }

    quickcheck! {
        fn matches_the_scalar_engine(words: Vec<u64>, a: u64, b: u16) -> bool {
            let cipher = Present::new();
            let key = key_from_parts(a, b);

            let mut blocks = [[0; 8]; BATCH_WIDTH];
            for (block, w) in blocks.iter_mut().zip(&words) {
                *block = w.to_le_bytes();
            }

            let ct = encrypt_batch(blocks, key);

            blocks
                .iter()
                .zip(ct.iter())
                .all(|(pt, slot)| cipher.encrypt_block(*pt, key) == *slot)
        }
    }
}
