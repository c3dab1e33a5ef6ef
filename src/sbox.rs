//! Type representing an S-box.

use std::convert::TryInto;

/// The 4-bit substitution table of the cipher, shared by the scalar
/// substitution layer and the key schedule.
pub const SBOX: [u8; 16] = [
    0xc, 0x5, 0x6, 0xb, 0x9, 0x0, 0xa, 0xd,
    0x3, 0xe, 0xf, 0x8, 0x4, 0x7, 0x1, 0x2,
];

/// A structure that represents an S-box.
#[derive(Clone, Debug)]
pub struct Sbox {
    size: usize,
    table: Vec<u8>,
}

impl Sbox {
    /// Creates a new S-box from its table description. `size` is the bit size
    /// of the S-box.
    ///
    /// # Panics
    /// The function panics if the length of `table` is not equal to
    /// 2<sup>`size`</sup>.
    pub fn new(size: usize, table: Vec<u8>) -> Sbox {
        assert_eq!(1 << size, table.len());

        Sbox { size, table }
    }

    /// Creates the S-box of the cipher.
    pub fn present() -> Sbox {
        Sbox::new(4, SBOX.to_vec())
    }

    /// Creates the S-box mapping each output of this S-box back to its
    /// input. The table must be a permutation.
    pub fn inverse(&self) -> Sbox {
        let mut table = vec![0; self.table.len()];

        for (x, &y) in self.table.iter().enumerate() {
            table[y as usize] = x as u8;
        }

        Sbox::new(self.size, table)
    }

    /// Applies the S-box to the input.
    pub fn apply<T: TryInto<usize>>(&self, x: T) -> u8 {
        let x = match x.try_into() {
            Ok(x) => x,
            Err(_) => panic!("Conversion error"),
        };

        self.table[x]
    }

    /// Returns a bitmask that corresponds to the S-box size.
    pub fn mask(&self) -> u64 {
        (1 << self.size) - 1
    }

    /// Returns the size of the S-box in bits.
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_matches_table() {
        let sbox = Sbox::present();

        for x in 0..16 {
            assert_eq!(SBOX[x], sbox.apply(x));
        }
    }

    #[test]
    fn table_is_a_permutation() {
        let mut seen = [false; 16];

        for x in 0..16u64 {
            let y = Sbox::present().apply(x) as usize;
            assert!(!seen[y]);
            seen[y] = true;
        }
    }

    #[test]
    fn inverse_composes_to_identity() {
        let sbox = Sbox::present();
        let isbox = sbox.inverse();

        for x in 0..16u8 {
            assert_eq!(x, isbox.apply(sbox.apply(x)));
            assert_eq!(x, sbox.apply(isbox.apply(x)));
        }
    }

    #[test]
    #[should_panic]
    fn rejects_wrong_table_length() {
        Sbox::new(4, vec![0; 15]);
    }
}
