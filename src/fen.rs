// Ficheiro: src/fen.rs
// Descrição: Leitura e escrita de posições em notação FEN.

use std::str::FromStr;

use crate::board::Position;
use crate::error::{FenError, FenResult};
use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Cria uma posição a partir de uma string FEN.
    ///
    /// Campos extra depois do sexto são ignorados.
    pub fn from_fen(fen: &str) -> FenResult<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 6 {
            return Err(FenError::FieldCount { found: parts.len() });
        }

        let mut pos = Position::empty();

        // Tabuleiro (parts[0]), da linha 8 para a linha 1
        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::RankCount { found: rows.len() });
        }

        for (i, row) in rows.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file: u8 = 0;
            for ch in row.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run as u8;
                } else {
                    let (color, kind) = PieceKind::from_char(ch).ok_or(FenError::InvalidPiece { piece: ch })?;
                    if file >= 8 {
                        return Err(FenError::RankLength { rank: rank + 1 });
                    }
                    pos.put(kind, color, rank * 8 + file);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankLength { rank: rank + 1 });
                }
            }
            if file != 8 {
                return Err(FenError::RankLength { rank: rank + 1 });
            }
        }

        // Cor a jogar (parts[1])
        pos.white_to_move = match parts[1] {
            "w" | "W" => true,
            "b" | "B" => false,
            other => return Err(FenError::InvalidActiveColor { value: other.to_string() }),
        };

        // Roque (parts[2])
        if parts[2] != "-" {
            for ch in parts[2].chars() {
                let right = match ch {
                    'K' => CastlingRights::WHITE_KINGSIDE,
                    'Q' => CastlingRights::WHITE_QUEENSIDE,
                    'k' => CastlingRights::BLACK_KINGSIDE,
                    'q' => CastlingRights::BLACK_QUEENSIDE,
                    _ => return Err(FenError::InvalidCastling { value: parts[2].to_string() }),
                };
                pos.castling_rights.insert(right);
            }
        }

        // En passant (parts[3])
        if parts[3] != "-" {
            let sq = parse_square(parts[3]).ok_or_else(|| FenError::InvalidEnPassant { value: parts[3].to_string() })?;
            pos.en_passant = Some(sq);
        }

        // Contadores (parts[4], parts[5])
        pos.halfmove_clock = parts[4]
            .parse()
            .map_err(|_| FenError::InvalidHalfmove { value: parts[4].to_string() })?;
        pos.fullmove_number = parts[5]
            .parse()
            .map_err(|_| FenError::InvalidFullmove { value: parts[5].to_string() })?;

        Ok(pos)
    }

    /// Escreve a posição em FEN.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(rank * 8 + file) {
                    Some((color, kind)) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(kind.to_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(if self.white_to_move { 'w' } else { 'b' });
        fen.push(' ');

        if self.castling_rights.is_empty() {
            fen.push('-');
        } else {
            if self.can_white_castle_kingside() {
                fen.push('K');
            }
            if self.can_white_castle_queenside() {
                fen.push('Q');
            }
            if self.can_black_castle_kingside() {
                fen.push('k');
            }
            if self.can_black_castle_queenside() {
                fen.push('q');
            }
        }

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&square_name(sq)),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
