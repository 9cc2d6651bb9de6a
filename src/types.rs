// Ficheiro: src/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use std::fmt;

// Um Bitboard é um inteiro de 64 bits sem sinal. Cada bit representa uma casa.
// Bit 0 = a1, Bit 1 = b1, ..., Bit 63 = h8.
pub type Bitboard = u64;

// Índice de casa 0..64, mesma numeração do Bitboard.
pub type Square = u8;

pub const SQ_A1: Square = 0;
pub const SQ_C1: Square = 2;
pub const SQ_D1: Square = 3;
pub const SQ_E1: Square = 4;
pub const SQ_F1: Square = 5;
pub const SQ_G1: Square = 6;
pub const SQ_H1: Square = 7;
pub const SQ_A8: Square = 56;
pub const SQ_C8: Square = 58;
pub const SQ_D8: Square = 59;
pub const SQ_E8: Square = 60;
pub const SQ_F8: Square = 61;
pub const SQ_G8: Square = 62;
pub const SQ_H8: Square = 63;

/// Converte uma casa em notação algébrica ("e4").
pub fn square_name(sq: Square) -> String {
    let file = (sq % 8) + b'a';
    let rank = (sq / 8) + b'1';
    format!("{}{}", file as char, rank as char)
}

/// Lê uma casa em notação algébrica. Devolve None para texto inválido.
pub fn parse_square(text: &str) -> Option<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].wrapping_sub(b'a');
    let rank = bytes[1].wrapping_sub(b'1');
    if file < 8 && rank < 8 {
        Some(rank * 8 + file)
    } else {
        None
    }
}

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

// Enum para representar o tipo de uma peça de xadrez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Peso material em peões. O rei não conta.
    pub fn material(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Letra FEN da peça (maiúscula para brancas).
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        if color == Color::White { c.to_ascii_uppercase() } else { c }
    }

    pub fn from_char(ch: char) -> Option<(Color, PieceKind)> {
        let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((color, kind))
    }
}

// Direitos de roque. Bits: 0=K, 1=Q, 2=k, 3=q
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: CastlingRights = CastlingRights(0b0001);
    pub const WHITE_QUEENSIDE: CastlingRights = CastlingRights(0b0010);
    pub const BLACK_KINGSIDE: CastlingRights = CastlingRights(0b0100);
    pub const BLACK_QUEENSIDE: CastlingRights = CastlingRights(0b1000);
    pub const WHITE: CastlingRights = CastlingRights(0b0011);
    pub const BLACK: CastlingRights = CastlingRights(0b1100);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, other: CastlingRights) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: CastlingRights) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: CastlingRights) {
        self.0 &= !other.0;
    }

    pub fn is_subset_of(self, other: CastlingRights) -> bool {
        other.contains(self)
    }
}

/// Tipo do lance. As promoções levam a peça final no próprio tipo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Normal,
    EnPassant,
    Castle,
    PromotionToKnight,
    PromotionToBishop,
    PromotionToRook,
    PromotionToQueen,
}

impl MoveType {
    pub fn promotion(self) -> Option<PieceKind> {
        match self {
            MoveType::PromotionToKnight => Some(PieceKind::Knight),
            MoveType::PromotionToBishop => Some(PieceKind::Bishop),
            MoveType::PromotionToRook => Some(PieceKind::Rook),
            MoveType::PromotionToQueen => Some(PieceKind::Queen),
            _ => None,
        }
    }
}

// Struct para representar um lance no jogo.
// Guarda a casa de origem, a de destino, a peça que se move e o tipo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub kind: MoveType,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: PieceKind, kind: MoveType) -> Self {
        Move { from, to, piece, kind }
    }

    pub fn normal(from: Square, to: Square, piece: PieceKind) -> Self {
        Move::new(from, to, piece, MoveType::Normal)
    }

    /// Texto do lance para relatórios; "0000" quando não há lance.
    pub fn text(mv: Option<Move>) -> String {
        match mv {
            Some(m) => m.to_string(),
            None => "0000".to_string(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = square_name(self.from);
        let to = square_name(self.to);
        if let Some(p) = self.kind.promotion() {
            write!(f, "{}{}{}", from, to, p.to_char(Color::Black))
        } else {
            write!(f, "{}{}", from, to)
        }
    }
}
