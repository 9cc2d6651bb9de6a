// Ficheiro: src/moves/mod.rs
// Descrição: Gerador de lances legais e o trait que a busca consome.

pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;

use crate::board::Position;
use crate::types::{Move, PieceKind};

/// Lances legais de uma posição e se o lado a jogar está em xeque.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    pub moves: Vec<Move>,
    pub in_check: bool,
}

impl LegalMoves {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }
}

/// Fonte de lances da busca e do avaliador.
///
/// Tem de devolver o conjunto completo de lances legais (já sem os que
/// deixam o próprio rei em xeque) e o estado de xeque do lado a jogar.
/// A ordem é livre: muda desempates e cortes, nunca a legalidade.
pub trait MoveGenerator: Send + Sync {
    fn legal_moves(&self, position: &Position) -> LegalMoves;
}

/// Gerador baseado em bitboards: pseudo-legais por peça e filtro por xeque.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitboardMoveGenerator;

impl BitboardMoveGenerator {
    /// Gera todos os lances pseudo-legais para todas as peças do jogador atual.
    pub fn pseudo_legal_moves(&self, position: &Position) -> Vec<Move> {
        // Pre-aloca com capacidade estimada para reduzir realocações
        let mut moves = Vec::with_capacity(64);

        pawn::generate_pawn_moves(position, &mut moves);
        knight::generate_knight_moves(position, &mut moves);
        sliding::generate_sliding_moves(position, PieceKind::Bishop, &mut moves);
        sliding::generate_sliding_moves(position, PieceKind::Rook, &mut moves);
        sliding::generate_sliding_moves(position, PieceKind::Queen, &mut moves);
        king::generate_king_moves(position, &mut moves);

        moves
    }
}

impl MoveGenerator for BitboardMoveGenerator {
    fn legal_moves(&self, position: &Position) -> LegalMoves {
        let (us, _) = position.side_to_move();
        let moves = self
            .pseudo_legal_moves(position)
            .into_iter()
            .filter(|&mv| !position.make_move(mv).is_in_check(us))
            .collect();

        LegalMoves {
            moves,
            in_check: position.is_in_check(us),
        }
    }
}
