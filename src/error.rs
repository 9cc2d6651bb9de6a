//! Tipos de erro do núcleo.
//!
//! Só a leitura de FEN pode falhar; a transição e a busca confiam que os
//! lances vieram do gerador para aquela posição.

use thiserror::Error;

/// Erros de leitura de uma string FEN
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("Invalid FEN: expected 6 fields, found {found}")]
    FieldCount { found: usize },

    #[error("Invalid FEN: unknown piece '{piece}'")]
    InvalidPiece { piece: char },

    #[error("Invalid FEN: expected 8 ranks, found {found}")]
    RankCount { found: usize },

    #[error("Invalid FEN: rank {rank} does not describe 8 squares")]
    RankLength { rank: u8 },

    #[error("Invalid FEN: active color '{value}'")]
    InvalidActiveColor { value: String },

    #[error("Invalid FEN: castling field '{value}'")]
    InvalidCastling { value: String },

    #[error("Invalid FEN: en passant square '{value}'")]
    InvalidEnPassant { value: String },

    #[error("Invalid FEN: half moves '{value}'")]
    InvalidHalfmove { value: String },

    #[error("Invalid FEN: full moves '{value}'")]
    InvalidFullmove { value: String },
}

pub type FenResult<T> = Result<T, FenError>;
