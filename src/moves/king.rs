// Ficheiro: src/moves/king.rs
// Descrição: Lógica para gerar os lances do Rei, incluindo o roque.

use crate::bitboard::BitboardOps;
use crate::board::Position;
use crate::types::*;

/// Gera a tabela de ataques de rei para todas as 64 casas.
const fn generate_king_attacks_table() -> [Bitboard; 64] {
    let mut attacks = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let king_pos = 1u64 << square;
        let mut attack_bb = 0u64;
        let s = square as i8;

        // Movimentos de um passo em todas as 8 direções.
        if s % 8 > 0 { attack_bb |= king_pos >> 1; } // Esquerda
        if s % 8 < 7 { attack_bb |= king_pos << 1; } // Direita
        if s / 8 > 0 { attack_bb |= king_pos >> 8; } // Baixo
        if s / 8 < 7 { attack_bb |= king_pos << 8; } // Cima
        if s % 8 > 0 && s / 8 > 0 { attack_bb |= king_pos >> 9; } // Baixo-Esquerda
        if s % 8 < 7 && s / 8 > 0 { attack_bb |= king_pos >> 7; } // Baixo-Direita
        if s % 8 > 0 && s / 8 < 7 { attack_bb |= king_pos << 7; } // Cima-Esquerda
        if s % 8 < 7 && s / 8 < 7 { attack_bb |= king_pos << 9; } // Cima-Direita

        attacks[square] = attack_bb;
        square += 1;
    }

    attacks
}

/// Tabela pré-calculada de ataques de rei para cada casa do tabuleiro.
static KING_ATTACKS: [Bitboard; 64] = generate_king_attacks_table();

#[inline]
pub fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square as usize]
}

/// Um roque possível: direito, casas do rei e da torre, casas que têm de
/// estar vazias e casas que o rei atravessa (não podem estar atacadas).
struct CastleRule {
    right: CastlingRights,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    empty: Bitboard,
    path: [Square; 3],
}

const WHITE_CASTLES: [CastleRule; 2] = [
    CastleRule { right: CastlingRights::WHITE_KINGSIDE, king_from: SQ_E1, king_to: SQ_G1, rook_from: SQ_H1, empty: 0x60, path: [SQ_E1, SQ_F1, SQ_G1] },
    CastleRule { right: CastlingRights::WHITE_QUEENSIDE, king_from: SQ_E1, king_to: SQ_C1, rook_from: SQ_A1, empty: 0x0E, path: [SQ_E1, SQ_D1, SQ_C1] },
];

const BLACK_CASTLES: [CastleRule; 2] = [
    CastleRule { right: CastlingRights::BLACK_KINGSIDE, king_from: SQ_E8, king_to: SQ_G8, rook_from: SQ_H8, empty: 0x60 << 56, path: [SQ_E8, SQ_F8, SQ_G8] },
    CastleRule { right: CastlingRights::BLACK_QUEENSIDE, king_from: SQ_E8, king_to: SQ_C8, rook_from: SQ_A8, empty: 0x0E << 56, path: [SQ_E8, SQ_D8, SQ_C8] },
];

/// Gera todos os lances pseudo-legais para o rei do jogador atual.
pub fn generate_king_moves(pos: &Position, moves: &mut Vec<Move>) {
    let (us, them) = pos.side_to_move();
    let our_pieces = pos.all_pieces[us.index()];

    let Some(from) = pos.king_square(us) else {
        return; // Não há rei no tabuleiro (posição sintética)
    };

    for to in (king_attacks(from) & !our_pieces).iter_squares() {
        moves.push(Move::normal(from, to, PieceKind::King));
    }

    let rules = if us == Color::White { &WHITE_CASTLES } else { &BLACK_CASTLES };
    for rule in rules {
        if !pos.castling_rights.contains(rule.right)
            || from != rule.king_from
            || !pos.pieces_of(us, PieceKind::Rook).has(rule.rook_from)
            || pos.occupied & rule.empty != 0
        {
            continue;
        }
        if rule.path.iter().any(|&sq| pos.is_square_attacked_by(sq, them)) {
            continue;
        }
        moves.push(Move::new(from, rule.king_to, PieceKind::King, MoveType::Castle));
    }
}
