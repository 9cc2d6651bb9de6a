// Operações básicas de bitboard: contagem, iteração e máscaras de coluna/linha

use crate::types::{Bitboard, Square};

pub const FILE_A: Bitboard = 0x0101010101010101;
pub const FILE_H: Bitboard = FILE_A << 7;
pub const NOT_A_FILE: Bitboard = !FILE_A;
pub const NOT_H_FILE: Bitboard = !FILE_H;

pub const RANK_1: Bitboard = 0x00000000000000FF;
pub const RANK_3: Bitboard = RANK_1 << 16;
pub const RANK_6: Bitboard = RANK_1 << 40;
pub const RANK_8: Bitboard = RANK_1 << 56;

/// Máscara da coluna `file` (0 = a, 7 = h).
#[inline(always)]
pub fn file_mask(file: u8) -> Bitboard {
    FILE_A << (file & 7)
}

/// Bitboard com apenas a casa indicada.
#[inline(always)]
pub fn square_bb(sq: Square) -> Bitboard {
    1u64 << sq
}

/// Conta o número de bits setados (popcount)
#[inline(always)]
pub fn popcount(bb: Bitboard) -> u32 {
    bb.count_ones()
}

/// Remove e retorna o LSB (pop LSB)
#[inline(always)]
pub fn pop_lsb(bb: &mut Bitboard) -> Square {
    let lsb_index = bb.trailing_zeros() as Square;
    *bb &= *bb - 1;
    lsb_index
}

/// Itera sobre todos os bits setados em um bitboard
pub struct BitboardIterator {
    bb: Bitboard,
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bb == 0 {
            None
        } else {
            Some(pop_lsb(&mut self.bb))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = popcount(self.bb) as usize;
        (n, Some(n))
    }
}

/// Trait para operações de bitboard
pub trait BitboardOps {
    fn iter_squares(self) -> BitboardIterator;
    fn popcount(self) -> u32;
    fn has(self, sq: Square) -> bool;
    fn lsb(self) -> Option<Square>;
}

impl BitboardOps for Bitboard {
    #[inline(always)]
    fn iter_squares(self) -> BitboardIterator {
        BitboardIterator { bb: self }
    }

    #[inline(always)]
    fn popcount(self) -> u32 {
        popcount(self)
    }

    #[inline(always)]
    fn has(self, sq: Square) -> bool {
        self & square_bb(sq) != 0
    }

    #[inline(always)]
    fn lsb(self) -> Option<Square> {
        if self == 0 { None } else { Some(self.trailing_zeros() as Square) }
    }
}
