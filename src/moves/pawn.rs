// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica para gerar os lances dos peões.

use crate::bitboard::{square_bb, BitboardOps, NOT_A_FILE, NOT_H_FILE, RANK_1, RANK_3, RANK_6, RANK_8};
use crate::board::Position;
use crate::types::*;

// Ordem das promoções geradas
const PROMOTIONS: [MoveType; 4] = [
    MoveType::PromotionToQueen,
    MoveType::PromotionToRook,
    MoveType::PromotionToBishop,
    MoveType::PromotionToKnight,
];

/// Casas atacadas por um peão da cor indicada numa casa.
#[inline]
pub fn pawn_attacks(square: Square, color: Color) -> Bitboard {
    let bb = square_bb(square);
    match color {
        Color::White => ((bb << 7) & NOT_H_FILE) | ((bb << 9) & NOT_A_FILE),
        Color::Black => ((bb >> 9) & NOT_H_FILE) | ((bb >> 7) & NOT_A_FILE),
    }
}

#[inline]
fn push_pawn_move(moves: &mut Vec<Move>, from: Square, to: Square, promotion_rank: Bitboard) {
    if promotion_rank.has(to) {
        for kind in PROMOTIONS {
            moves.push(Move::new(from, to, PieceKind::Pawn, kind));
        }
    } else {
        moves.push(Move::normal(from, to, PieceKind::Pawn));
    }
}

/// Gera todos os lances pseudo-legais para os peões do jogador atual.
pub fn generate_pawn_moves(pos: &Position, moves: &mut Vec<Move>) {
    let (us, them) = pos.side_to_move();
    let our_pawns = pos.pieces_of(us, PieceKind::Pawn);
    let empty = !pos.occupied;
    let enemies = pos.all_pieces[them.index()];

    let (single_push, double_push, promotion_rank) = match us {
        Color::White => {
            let single = (our_pawns << 8) & empty;
            (single, ((single & RANK_3) << 8) & empty, RANK_8)
        }
        Color::Black => {
            let single = (our_pawns >> 8) & empty;
            (single, ((single & RANK_6) >> 8) & empty, RANK_1)
        }
    };

    // Avanço simples
    for to in single_push.iter_squares() {
        let from = if us == Color::White { to - 8 } else { to + 8 };
        push_pawn_move(moves, from, to, promotion_rank);
    }

    // Avanço duplo
    for to in double_push.iter_squares() {
        let from = if us == Color::White { to - 16 } else { to + 16 };
        moves.push(Move::normal(from, to, PieceKind::Pawn));
    }

    // Capturas
    for from in our_pawns.iter_squares() {
        for to in (pawn_attacks(from, us) & enemies).iter_squares() {
            push_pawn_move(moves, from, to, promotion_rank);
        }
    }

    // En passant: os nossos peões que atacariam o alvo
    if let Some(target) = pos.en_passant {
        for from in (pawn_attacks(target, them) & our_pawns).iter_squares() {
            moves.push(Move::new(from, target, PieceKind::Pawn, MoveType::EnPassant));
        }
    }
}
