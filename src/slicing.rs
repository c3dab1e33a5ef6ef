//! Conversion between the block layout and the bit-plane layout of the
//! bit-sliced engine.
//!
//! A batch of 32 blocks becomes 64 registers, one per block bit position;
//! bit `j` of register `i` is bit `i` of block `j`. The conversion is a
//! 64x256-bit transpose and its own exact inverse pair.

use crate::Block;

/// Width of one bit-slice register, and therefore the number of blocks the
/// bit-sliced engine advances together. A build-time design parameter, not
/// a runtime one.
pub const BATCH_WIDTH: usize = 32;

/// One bit-slice register. Bit `j` belongs to block `j` of the batch.
pub type BsReg = u32;

/// Transposes a batch of blocks into bit-plane form.
pub fn to_sliced(blocks: &[Block; BATCH_WIDTH]) -> [BsReg; 64] {
    let mut state = [0; 64];

    for (i, reg) in state.iter_mut().enumerate() {
        for (j, block) in blocks.iter().enumerate() {
            *reg |= BsReg::from((block[i / 8] >> (i % 8)) & 1) << j;
        }
    }

    state
}

/// Inverse of [`to_sliced`]: reassembles the blocks from the bit-planes.
/// Bit `m` of byte `k` of block `j` comes from bit `j` of register
/// `k * 8 + m`.
pub fn from_sliced(state: &[BsReg; 64]) -> [Block; BATCH_WIDTH] {
    let mut blocks = [[0; 8]; BATCH_WIDTH];

    for (j, block) in blocks.iter_mut().enumerate() {
        for (k, byte) in block.iter_mut().enumerate() {
            for m in 0..8 {
                *byte |= (((state[k * 8 + m] >> j) & 1) as u8) << m;
            }
        }
    }

    blocks
}
