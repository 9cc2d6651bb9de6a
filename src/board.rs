// Ficheiro: src/board.rs
// Descrição: Módulo que contém a struct Position e a transição pura de lances.

use std::fmt;

use crate::bitboard::{file_mask, square_bb, BitboardOps};
use crate::moves::{king, knight, pawn, sliding};
use crate::types::*;

// A struct principal da posição, usando Bitboards.
// É um valor Copy: cada nó da busca tem a sua própria cópia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    // Bitboards por [cor][tipo de peça].
    pub pieces: [[Bitboard; 6]; 2],

    // União das seis peças de cada cor.
    pub all_pieces: [Bitboard; 2],

    // Todas as casas ocupadas.
    pub occupied: Bitboard,

    pub white_to_move: bool,

    pub en_passant: Option<Square>,

    pub castling_rights: CastlingRights,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Position {
    /// Tabuleiro vazio, brancas a jogar, sem direitos de roque.
    pub fn empty() -> Self {
        Position {
            pieces: [[0; 6]; 2],
            all_pieces: [0; 2],
            occupied: 0,
            white_to_move: true,
            en_passant: None,
            castling_rights: CastlingRights::NONE,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Cria a posição inicial padrão.
    pub fn new() -> Self {
        const WHITE_PAWNS: Bitboard = 0x000000000000FF00;
        const WHITE_KNIGHTS: Bitboard = 0x0000000000000042;
        const WHITE_BISHOPS: Bitboard = 0x0000000000000024;
        const WHITE_ROOKS: Bitboard = 0x0000000000000081;
        const WHITE_QUEEN: Bitboard = 0x0000000000000008;
        const WHITE_KING: Bitboard = 0x0000000000000010;

        let white = [WHITE_PAWNS, WHITE_KNIGHTS, WHITE_BISHOPS, WHITE_ROOKS, WHITE_QUEEN, WHITE_KING];
        // As pretas são o espelho vertical das brancas
        let black = white.map(|bb| bb.swap_bytes());

        let white_all = white.iter().fold(0, |acc, bb| acc | bb);
        let black_all = black.iter().fold(0, |acc, bb| acc | bb);

        Position {
            pieces: [white, black],
            all_pieces: [white_all, black_all],
            occupied: white_all | black_all,
            white_to_move: true,
            en_passant: None,
            castling_rights: CastlingRights::ALL,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Devolve (cor a jogar, adversário).
    #[inline]
    pub fn side_to_move(&self) -> (Color, Color) {
        if self.white_to_move {
            (Color::White, Color::Black)
        } else {
            (Color::Black, Color::White)
        }
    }

    pub fn can_white_castle_kingside(&self) -> bool {
        self.castling_rights.contains(CastlingRights::WHITE_KINGSIDE)
    }

    pub fn can_white_castle_queenside(&self) -> bool {
        self.castling_rights.contains(CastlingRights::WHITE_QUEENSIDE)
    }

    pub fn can_black_castle_kingside(&self) -> bool {
        self.castling_rights.contains(CastlingRights::BLACK_KINGSIDE)
    }

    pub fn can_black_castle_queenside(&self) -> bool {
        self.castling_rights.contains(CastlingRights::BLACK_QUEENSIDE)
    }

    #[inline]
    pub fn has_en_passant(&self) -> bool {
        self.en_passant.is_some()
    }

    /// Máscara da coluna do alvo en passant (vazia se não houver).
    pub fn en_passant_file(&self) -> Bitboard {
        match self.en_passant {
            Some(sq) => file_mask(sq % 8),
            None => 0,
        }
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// Peça (cor, tipo) numa casa, se houver.
    pub fn piece_at(&self, sq: Square) -> Option<(Color, PieceKind)> {
        if !self.occupied.has(sq) {
            return None;
        }
        let color = if self.all_pieces[Color::White.index()].has(sq) { Color::White } else { Color::Black };
        PieceKind::ALL
            .into_iter()
            .find(|&kind| self.pieces_of(color, kind).has(sq))
            .map(|kind| (color, kind))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, PieceKind::King).lsb()
    }

    /// Verifica se uma casa é atacada por peças da cor especificada
    pub fn is_square_attacked_by(&self, square: Square, attacking_color: Color) -> bool {
        let attackers = self.pieces[attacking_color.index()];

        // Peões: as casas de onde um peão atacante alcança `square` são
        // as que um peão da outra cor atacaria a partir de `square`.
        if pawn::pawn_attacks(square, !attacking_color) & attackers[PieceKind::Pawn.index()] != 0 {
            return true;
        }
        if knight::knight_attacks(square) & attackers[PieceKind::Knight.index()] != 0 {
            return true;
        }
        if king::king_attacks(square) & attackers[PieceKind::King.index()] != 0 {
            return true;
        }

        let queens = attackers[PieceKind::Queen.index()];
        let diagonal = attackers[PieceKind::Bishop.index()] | queens;
        if diagonal != 0 && sliding::bishop_attacks(square, self.occupied) & diagonal != 0 {
            return true;
        }
        let straight = attackers[PieceKind::Rook.index()] | queens;
        straight != 0 && sliding::rook_attacks(square, self.occupied) & straight != 0
    }

    /// Verifica se o rei da cor especificada está em xeque
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(sq) => self.is_square_attacked_by(sq, !color),
            None => false, // Não há rei (posição sintética)
        }
    }

    /// Confere os invariantes de ocupação: agregados corretos e nenhuma casa
    /// em mais de uma célula (cor, tipo).
    pub fn is_consistent(&self) -> bool {
        let mut seen: Bitboard = 0;
        for color in [Color::White, Color::Black] {
            let mut union: Bitboard = 0;
            for bb in self.pieces[color.index()] {
                if bb & seen != 0 {
                    return false;
                }
                seen |= bb;
                union |= bb;
            }
            if union != self.all_pieces[color.index()] {
                return false;
            }
        }
        let white = self.all_pieces[Color::White.index()];
        let black = self.all_pieces[Color::Black.index()];
        white & black == 0 && self.occupied == white | black
    }

    #[inline]
    pub(crate) fn put(&mut self, kind: PieceKind, color: Color, sq: Square) {
        let bit = square_bb(sq);
        self.occupied |= bit;
        self.all_pieces[color.index()] |= bit;
        self.pieces[color.index()][kind.index()] |= bit;
    }

    #[inline]
    fn remove(&mut self, kind: PieceKind, color: Color, sq: Square) {
        let bit = !square_bb(sq);
        self.pieces[color.index()][kind.index()] &= bit;
        self.all_pieces[color.index()] &= bit;
        // Só sai de `occupied` se a outra cor também não estiver lá
        self.occupied = self.all_pieces[0] | self.all_pieces[1];
    }

    /// Remove qualquer peça da cor indicada numa casa.
    #[inline]
    fn remove_all(&mut self, color: Color, sq: Square) {
        let bit = !square_bb(sq);
        for bb in self.pieces[color.index()].iter_mut() {
            *bb &= bit;
        }
        self.all_pieces[color.index()] &= bit;
        self.occupied = self.all_pieces[0] | self.all_pieces[1];
    }

    /// Aplica um lance e devolve a nova posição. `self` não é alterado.
    ///
    /// O lance tem de ter sido produzido pelo gerador para esta posição;
    /// um lance arbitrário gera uma posição sem significado.
    pub fn make_move(&self, mv: Move) -> Position {
        let mut next = *self;
        let (us, them) = self.side_to_move();

        // Captura normal: limpa o destino em todos os tipos do adversário
        next.remove_all(them, mv.to);
        next.remove(mv.piece, us, mv.from);

        match mv.kind {
            MoveType::EnPassant => {
                // O peão capturado está uma linha atrás do destino
                let captured = if us == Color::White { mv.to - 8 } else { mv.to + 8 };
                next.remove(PieceKind::Pawn, them, captured);
                next.put(PieceKind::Pawn, us, mv.to);
            }
            MoveType::PromotionToKnight
            | MoveType::PromotionToBishop
            | MoveType::PromotionToRook
            | MoveType::PromotionToQueen => {
                if let Some(promoted) = mv.kind.promotion() {
                    next.put(promoted, us, mv.to);
                }
            }
            MoveType::Castle => {
                let (king_to, rook_from, rook_to) = match mv.to {
                    SQ_G1 => (SQ_G1, SQ_H1, SQ_F1),
                    SQ_C1 => (SQ_C1, SQ_A1, SQ_D1),
                    SQ_G8 => (SQ_G8, SQ_H8, SQ_F8),
                    _ => (SQ_C8, SQ_A8, SQ_D8),
                };
                next.remove(PieceKind::Rook, us, rook_from);
                next.put(PieceKind::King, us, king_to);
                next.put(PieceKind::Rook, us, rook_to);
            }
            MoveType::Normal => next.put(mv.piece, us, mv.to),
        }

        next.en_passant = None;
        if mv.piece == PieceKind::Pawn && mv.from.abs_diff(mv.to) == 16 {
            next.en_passant = Some((mv.from + mv.to) / 2);
        }

        if !next.castling_rights.is_empty() {
            if mv.kind == MoveType::Castle {
                next.castling_rights.remove(match us {
                    Color::White => CastlingRights::WHITE,
                    Color::Black => CastlingRights::BLACK,
                });
            }

            // Lance que sai ou chega ao canto de uma torre perde esse roque
            for (corner, right) in [
                (SQ_A1, CastlingRights::WHITE_QUEENSIDE),
                (SQ_H1, CastlingRights::WHITE_KINGSIDE),
                (SQ_A8, CastlingRights::BLACK_QUEENSIDE),
                (SQ_H8, CastlingRights::BLACK_KINGSIDE),
            ] {
                if mv.from == corner || mv.to == corner {
                    next.castling_rights.remove(right);
                }
            }
        }

        next.white_to_move = !self.white_to_move;
        next.halfmove_clock = self.halfmove_clock.saturating_add(1);
        if us == Color::Black {
            next.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        next
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+---+---+---+---+---+---+---+---+")?;
        for rank in (0..8u8).rev() {
            write!(f, "|")?;
            for file in 0..8u8 {
                match self.piece_at(rank * 8 + file) {
                    Some((color, kind)) => write!(f, " {} |", kind.to_char(color))?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f, " {}", rank + 1)?;
            writeln!(f, "+---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "  a   b   c   d   e   f   g   h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    #[test]
    fn test_start_position_layout() {
        let p = Position::new();
        assert!(p.is_consistent());
        assert_eq!(p.occupied.popcount(), 32);
        assert_eq!(p.piece_at(SQ_E1), Some((Color::White, PieceKind::King)));
        assert_eq!(p.piece_at(SQ_D8), Some((Color::Black, PieceKind::Queen)));
        assert_eq!(p.piece_at(28), None);
        assert_eq!(p.side_to_move(), (Color::White, Color::Black));
        assert!(p.can_white_castle_kingside() && p.can_black_castle_queenside());
        assert!(!p.has_en_passant());
        assert_eq!(p.en_passant_file(), 0);
    }

    #[test]
    fn test_double_push_sets_en_passant() {
        let p = Position::new();
        let next = p.make_move(Move::normal(12, 28, PieceKind::Pawn)); // e2e4
        assert_eq!(next.en_passant, Some(20)); // e3
        assert_eq!(next.en_passant_file(), file_mask(4));
        assert!(!next.white_to_move);
        assert_eq!(next.halfmove_clock, 1);
        assert_eq!(next.fullmove_number, 1);

        // Qualquer outro lance limpa o alvo
        let after = next.make_move(Move::normal(57, 42, PieceKind::Knight)); // b8c6
        assert_eq!(after.en_passant, None);
        assert_eq!(after.fullmove_number, 2);
        assert_eq!(after.halfmove_clock, 2);
    }

    #[test]
    fn test_make_move_does_not_mutate_parent() {
        let p = Position::new();
        let snapshot = p;
        let a = p.make_move(Move::normal(12, 28, PieceKind::Pawn));
        let b = p.make_move(Move::normal(6, 21, PieceKind::Knight));
        assert_eq!(p, snapshot);
        assert_ne!(a, b);
        assert_eq!(b.piece_at(21), Some((Color::White, PieceKind::Knight)));
        assert_eq!(b.piece_at(28), None);
    }

    #[test]
    fn test_capture_clears_destination() {
        // Bxf7 com bispo branco em c4
        let p = pos("rnbqkbnr/pppp1ppp/8/4p3/2B1P3/8/PPPP1PPP/RNBQK1NR w KQkq - 0 3");
        let next = p.make_move(Move::normal(26, 53, PieceKind::Bishop));
        assert!(next.is_consistent());
        assert_eq!(next.piece_at(53), Some((Color::White, PieceKind::Bishop)));
        assert_eq!(next.pieces_of(Color::Black, PieceKind::Pawn).popcount(), 7);
    }

    #[test]
    fn test_en_passant_capture() {
        let p = pos("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
        let mv = Move::new(36, 45, PieceKind::Pawn, MoveType::EnPassant); // e5xf6
        let next = p.make_move(mv);
        assert!(next.is_consistent());
        assert_eq!(next.piece_at(45), Some((Color::White, PieceKind::Pawn)));
        assert_eq!(next.piece_at(37), None); // f5 capturado
        assert_eq!(next.piece_at(36), None);
        assert_eq!(next.en_passant, None);
    }

    #[test]
    fn test_black_en_passant_capture() {
        let p = pos("rnbqkbnr/pppp1ppp/8/8/3Pp3/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 2");
        let next = p.make_move(Move::new(28, 19, PieceKind::Pawn, MoveType::EnPassant)); // e4xd3
        assert!(next.is_consistent());
        assert_eq!(next.piece_at(19), Some((Color::Black, PieceKind::Pawn)));
        assert_eq!(next.piece_at(27), None);
        assert_eq!(next.fullmove_number, 3);
    }

    #[test]
    fn test_promotion_with_capture() {
        let p = pos("1r5k/P7/8/8/8/8/8/K7 w - - 0 1");
        let mv = Move::new(48, 57, PieceKind::Pawn, MoveType::PromotionToKnight); // a7xb8=N
        let next = p.make_move(mv);
        assert!(next.is_consistent());
        assert_eq!(next.piece_at(57), Some((Color::White, PieceKind::Knight)));
        assert_eq!(next.pieces_of(Color::White, PieceKind::Pawn), 0);
        assert_eq!(next.pieces_of(Color::Black, PieceKind::Rook), 0);
    }

    #[test]
    fn test_castling_moves_rook_and_clears_rights() {
        let p = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

        let short = p.make_move(Move::new(SQ_E1, SQ_G1, PieceKind::King, MoveType::Castle));
        assert!(short.is_consistent());
        assert_eq!(short.piece_at(SQ_G1), Some((Color::White, PieceKind::King)));
        assert_eq!(short.piece_at(SQ_F1), Some((Color::White, PieceKind::Rook)));
        assert_eq!(short.piece_at(SQ_H1), None);
        assert_eq!(short.piece_at(SQ_E1), None);
        assert!(!short.can_white_castle_kingside() && !short.can_white_castle_queenside());
        assert!(short.can_black_castle_kingside() && short.can_black_castle_queenside());

        let black = pos("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        let long = black.make_move(Move::new(SQ_E8, SQ_C8, PieceKind::King, MoveType::Castle));
        assert!(long.is_consistent());
        assert_eq!(long.piece_at(SQ_C8), Some((Color::Black, PieceKind::King)));
        assert_eq!(long.piece_at(SQ_D8), Some((Color::Black, PieceKind::Rook)));
        assert_eq!(long.piece_at(SQ_A8), None);
        assert_eq!(long.castling_rights, CastlingRights::WHITE);
    }

    #[test]
    fn test_rook_corner_moves_and_captures_clear_rights() {
        let p = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

        // Ra1-a2: só perde o roque grande branco
        let moved = p.make_move(Move::normal(SQ_A1, 8, PieceKind::Rook));
        assert!(!moved.can_white_castle_queenside());
        assert!(moved.can_white_castle_kingside());

        // Rh1xh8: perde o roque pequeno de ambos
        let captured = p.make_move(Move::normal(SQ_H1, SQ_H8, PieceKind::Rook));
        assert!(captured.is_consistent());
        assert!(!captured.can_white_castle_kingside());
        assert!(!captured.can_black_castle_kingside());
        assert!(captured.can_white_castle_queenside());
        assert!(captured.can_black_castle_queenside());
        assert!(captured.castling_rights.is_subset_of(p.castling_rights));
    }

    #[test]
    fn test_attacks_and_check() {
        let p = pos("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
        assert!(p.is_in_check(Color::White));
        assert!(!p.is_in_check(Color::Black));
        assert!(p.is_square_attacked_by(11, Color::Black)); // d2
        assert!(!p.is_square_attacked_by(SQ_D1, Color::Black));
        assert!(p.is_square_attacked_by(SQ_D1, Color::White));
    }

    #[test]
    fn test_display_diagram() {
        let text = Position::new().to_string();
        assert!(text.contains("| r | n | b | q | k | b | n | r | 8"));
        assert!(text.ends_with("  a   b   c   d   e   f   g   h\n"));
    }

    #[test]
    fn test_random_walks_keep_invariants() {
        use crate::moves::{BitboardMoveGenerator, MoveGenerator};
        use rand::rngs::StdRng;
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(0x5eed);
        let starts = [
            Position::new(),
            pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"),
            pos("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
        ];

        for start in starts {
            for _ in 0..20 {
                let mut current = start;
                for _ in 0..80 {
                    let legal = BitboardMoveGenerator.legal_moves(&current);
                    let Some(&mv) = legal.moves.choose(&mut rng) else {
                        break;
                    };

                    let before = current;
                    let next = current.make_move(mv);

                    assert_eq!(current, before, "make_move alterou o pai");
                    assert!(next.is_consistent(), "{} após {}", next.to_fen(), mv);
                    assert!(next.castling_rights.is_subset_of(current.castling_rights));
                    assert_eq!(next.white_to_move, !current.white_to_move);
                    assert_eq!(next.pieces_of(Color::White, PieceKind::King).popcount(), 1);
                    assert_eq!(next.pieces_of(Color::Black, PieceKind::King).popcount(), 1);
                    assert_eq!(Position::from_fen(&next.to_fen()).unwrap(), next);

                    current = next;
                }
            }
        }
    }
}
