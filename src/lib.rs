// Motor Xadrez - núcleo por bitboards com busca alfa-beta

pub mod bitboard;
pub mod board;
pub mod error;
pub mod fen;
pub mod moves;
pub mod perft;
pub mod search;
pub mod types;

pub use board::Position;
pub use error::{FenError, FenResult};
pub use fen::START_FEN;
pub use moves::{BitboardMoveGenerator, LegalMoves, MoveGenerator};
pub use search::{search_best_move, Evaluation, SearchConfig, SearchController, Searcher};
pub use types::*;
