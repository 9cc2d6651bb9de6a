use crate::bitboard::BitboardOps;
use crate::board::Position;
use crate::moves::{LegalMoves, MoveGenerator};
use crate::types::{Color, PieceKind};

/// Pior score possível para as brancas (brancas levaram mate).
pub const SCORE_MIN: i32 = i32::MIN;
/// Pior score possível para as pretas (pretas levaram mate).
pub const SCORE_MAX: i32 = i32::MAX;

/// Centipeões por peão de material
const CENTIPAWNS: i32 = 100;

/// Classificação terminal partilhada pelo avaliador e pela busca.
///
/// Sem lances e em xeque: mate contra quem joga. Sem lances e fora de xeque:
/// afogamento, 0. Caso contrário a posição não é terminal.
pub fn terminal_score(position: &Position, legal: &LegalMoves) -> Option<i32> {
    if !legal.is_empty() {
        return None;
    }
    if !legal.in_check {
        return Some(0);
    }
    if position.white_to_move {
        Some(SCORE_MIN)
    } else {
        Some(SCORE_MAX)
    }
}

/// Avaliação simples baseada no material das peças, do ponto de vista das brancas
pub fn material_score(position: &Position) -> i32 {
    let side_material = |color: Color| -> i32 {
        PieceKind::ALL
            .iter()
            .map(|&kind| position.pieces_of(color, kind).popcount() as i32 * kind.material())
            .sum()
    };

    (side_material(Color::White) - side_material(Color::Black)) * CENTIPAWNS
}

/// Score estático de uma posição: terminal se for o caso, senão material.
pub fn evaluate<G: MoveGenerator + ?Sized>(position: &Position, generator: &G) -> i32 {
    let legal = generator.legal_moves(position);
    terminal_score(position, &legal).unwrap_or_else(|| material_score(position))
}
