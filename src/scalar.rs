//! Scalar reference implementation of the cipher, one block at a time.

use crate::bits::{bit, inverse_permuted_position, permuted_position, with_bit};
use crate::key::KeyRegister;
use crate::sbox::Sbox;
use crate::{Block, ROUNDS};

/*****************************************************************
                            PRESENT
******************************************************************/

/// A structure representing the scalar PRESENT-80 engine.
#[derive(Clone)]
pub struct Present {
    sbox: Sbox,
    isbox: Sbox,
}

impl Present {
    /// Create a new instance of the cipher.
    pub fn new() -> Present {
        let sbox = Sbox::present();
        let isbox = sbox.inverse();

        Present { sbox, isbox }
    }

    /// Encrypts one block under the given key.
    ///
    /// Each of the 31 rounds mixes in the current round key, substitutes
    /// the 16 state nibbles and permutes the state bits before the
    /// schedule advances; a trailing key-mix whitens the final state.
    pub fn encrypt_block(&self, pt: Block, key: KeyRegister) -> Block {
        let mut state = u64::from_le_bytes(pt);
        let mut key = key;

        for r in 1..=ROUNDS as u8 {
            state ^= key.round_key();
            state = self.sbox_layer(state);
            state = pbox_layer(state);
            key = key.advance(r);
        }

        state ^= key.round_key();
        state.to_le_bytes()
    }

    /// Decrypts one block under the given key, inverting the rounds of
    /// [`encrypt_block`] over the expanded schedule.
    ///
    /// [`encrypt_block`]: Present::encrypt_block
    pub fn decrypt_block(&self, ct: Block, key: KeyRegister) -> Block {
        let round_keys = key.round_keys();
        let mut state = u64::from_le_bytes(ct);

        state ^= round_keys[ROUNDS];

        for r in (0..ROUNDS).rev() {
            state = pbox_layer_inv(state);
            state = self.isbox_layer(state);
            state ^= round_keys[r];
        }

        state.to_le_bytes()
    }

    fn sbox_layer(&self, state: u64) -> u64 {
        substitute(&self.sbox, state)
    }

    fn isbox_layer(&self, state: u64) -> u64 {
        substitute(&self.isbox, state)
    }
}

/// Applies `sbox` to every nibble of the state, low and high positions
/// preserved.
fn substitute(sbox: &Sbox, state: u64) -> u64 {
    let mut out = 0;

    for j in 0..16 {
        out |= u64::from(sbox.apply((state >> (4 * j)) & sbox.mask())) << (4 * j);
    }

    out
}

/// Moves every state bit to its permuted position, one bit at a time.
fn pbox_layer(state: u64) -> u64 {
    let mut out = 0;

    for b in 0..64 {
        out = with_bit(out, permuted_position(b), bit(state, b));
    }

    out
}

fn pbox_layer_inv(state: u64) -> u64 {
    let mut out = 0;

    for b in 0..64 {
        out = with_bit(out, inverse_permuted_position(b), bit(state, b));
    }

    out
}
