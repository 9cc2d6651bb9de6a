// Ficheiro: src/moves/knight.rs
// Descrição: Lógica para gerar os lances dos cavalos.

use crate::bitboard::BitboardOps;
use crate::board::Position;
use crate::types::{Bitboard, Move, PieceKind, Square};

/// Gera a tabela de ataques de cavalo para todas as 64 casas.
const fn generate_knight_attacks_table() -> [Bitboard; 64] {
    let mut attacks = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let mut attack_bb = 0u64;
        let s = square as i8;

        // Array com os possíveis deslocamentos do cavalo
        let knight_moves = [15, 17, 6, 10, -15, -17, -6, -10];
        let mut i = 0;

        while i < knight_moves.len() {
            let target = s + knight_moves[i];

            if target >= 0 && target < 64 {
                // Um movimento de cavalo válido deve ter diferença de coluna de 1 ou 2
                let file_diff = (target % 8 - s % 8).abs();
                if file_diff <= 2 {
                    attack_bb |= 1u64 << target;
                }
            }
            i += 1;
        }

        attacks[square] = attack_bb;
        square += 1;
    }

    attacks
}

/// Tabela pré-calculada de ataques de cavalo para cada casa do tabuleiro.
static KNIGHT_ATTACKS: [Bitboard; 64] = generate_knight_attacks_table();

#[inline]
pub fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}

/// Gera todos os lances pseudo-legais para os cavalos do jogador atual.
pub fn generate_knight_moves(pos: &Position, moves: &mut Vec<Move>) {
    let (us, _) = pos.side_to_move();
    let our_pieces = pos.all_pieces[us.index()];

    for from in pos.pieces_of(us, PieceKind::Knight).iter_squares() {
        for to in (knight_attacks(from) & !our_pieces).iter_squares() {
            moves.push(Move::normal(from, to, PieceKind::Knight));
        }
    }
}
