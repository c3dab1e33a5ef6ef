//! Bulk encryption of independent blocks across worker threads.
//!
//! Batches share no state, so the work splits freely: the input slice is
//! carved into batch-aligned chunks, one scoped worker thread per chunk,
//! each worker driving the bit-sliced engine.

use crate::bitsliced;
use crate::key::KeyRegister;
use crate::slicing::BATCH_WIDTH;
use crate::Block;

lazy_static! {
    static ref THREADS: usize = num_cpus::get();
}

/// Encrypts every block in place under a single key shared by all blocks.
///
/// Blocks are grouped into batches of [`BATCH_WIDTH`] and distributed over
/// scoped worker threads. A ragged tail batch is padded with zero blocks
/// internally; the padding outputs are discarded.
pub fn encrypt_blocks(blocks: &mut [Block], key: KeyRegister) {
    if blocks.is_empty() {
        return;
    }

    // chunk per thread, aligned to whole batches
    let batches = (blocks.len() + BATCH_WIDTH - 1) / BATCH_WIDTH;
    let chunk_size = ((batches + *THREADS - 1) / *THREADS) * BATCH_WIDTH;

    // Start scoped worker threads
    crossbeam_utils::thread::scope(|scope| {
        for chunk in blocks.chunks_mut(chunk_size) {
            scope.spawn(move |_| {
                for batch in chunk.chunks_mut(BATCH_WIDTH) {
                    encrypt_padded(batch, key);
                }
            });
        }
    })
    .unwrap();
}

/// Encrypts up to one batch worth of blocks, padding to the full width.
fn encrypt_padded(blocks: &mut [Block], key: KeyRegister) {
    let mut batch = [[0; 8]; BATCH_WIDTH];
    batch[..blocks.len()].copy_from_slice(blocks);

    let batch = bitsliced::encrypt_batch(batch, key);
    blocks.copy_from_slice(&batch[..blocks.len()]);
}
