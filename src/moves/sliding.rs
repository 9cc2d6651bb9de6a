// Ficheiro: src/moves/sliding.rs
// Descrição: Lógica para gerar os lances de peças deslizantes (Torres, Bispos e Dama).

use crate::bitboard::BitboardOps;
use crate::board::Position;
use crate::types::{Bitboard, Move, PieceKind, Square};

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Segue cada direção até à borda ou à primeira peça (que fica incluída).
fn ray_attacks(square: Square, occupancy: Bitboard, directions: &[(i8, i8); 4]) -> Bitboard {
    let mut attacks = 0u64;
    let rank = (square / 8) as i8;
    let file = (square % 8) as i8;

    for &(dr, df) in directions {
        let (mut r, mut f) = (rank + dr, file + df);
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let bit = 1u64 << (r * 8 + f);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, &BISHOP_DIRECTIONS)
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, &ROOK_DIRECTIONS)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

/// Função genérica para gerar lances de Bispos, Torres e Damas.
pub fn generate_sliding_moves(pos: &Position, piece_kind: PieceKind, moves: &mut Vec<Move>) {
    let (us, _) = pos.side_to_move();
    let our_pieces = pos.all_pieces[us.index()];

    for from in pos.pieces_of(us, piece_kind).iter_squares() {
        let attacks = match piece_kind {
            PieceKind::Bishop => bishop_attacks(from, pos.occupied),
            PieceKind::Rook => rook_attacks(from, pos.occupied),
            PieceKind::Queen => queen_attacks(from, pos.occupied),
            _ => 0, // Não deve acontecer para esta função
        };

        // Filtra movimentos válidos (exclui nossas próprias peças)
        for to in (attacks & !our_pieces).iter_squares() {
            moves.push(Move::normal(from, to, piece_kind));
        }
    }
}
