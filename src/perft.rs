// Contagem perft: valida o gerador de lances e a transição em conjunto

use log::debug;
use rayon::prelude::*;

use crate::board::Position;
use crate::moves::MoveGenerator;
use crate::types::Move;

/// Número de folhas da árvore de lances legais até `depth`.
pub fn perft<G: MoveGenerator + ?Sized>(generator: &G, position: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let legal = generator.legal_moves(position);
    if depth == 1 {
        return legal.len() as u64;
    }

    legal
        .moves
        .iter()
        .map(|&mv| perft(generator, &position.make_move(mv), depth - 1))
        .sum()
}

/// Perft dividido pelos lances da raiz, calculado em paralelo.
pub fn perft_divide<G: MoveGenerator + ?Sized>(generator: &G, position: &Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let legal = generator.legal_moves(position);
    let divide: Vec<(Move, u64)> = legal
        .moves
        .par_iter()
        .map(|&mv| (mv, perft(generator, &position.make_move(mv), depth - 1)))
        .collect();

    debug!(
        "perft divide depth {} moves {} nodes {}",
        depth,
        divide.len(),
        divide.iter().map(|(_, n)| n).sum::<u64>()
    );
    divide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::BitboardMoveGenerator;

    #[test]
    fn test_perft_start_position() {
        let pos = Position::new();
        let expected = [1, 20, 400, 8902];
        for (depth, &nodes) in expected.iter().enumerate() {
            assert_eq!(perft(&BitboardMoveGenerator, &pos, depth as u8), nodes, "depth {}", depth);
        }
    }

    #[test]
    fn test_perft_kiwipete() {
        let pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(perft(&BitboardMoveGenerator, &pos, 1), 48);
        assert_eq!(perft(&BitboardMoveGenerator, &pos, 2), 2039);
        assert_eq!(perft(&BitboardMoveGenerator, &pos, 3), 97862);
    }

    #[test]
    fn test_perft_endgame_position() {
        // Posição 3 da wiki de programação de xadrez
        let pos = Position::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
        assert_eq!(perft(&BitboardMoveGenerator, &pos, 1), 14);
        assert_eq!(perft(&BitboardMoveGenerator, &pos, 2), 191);
        assert_eq!(perft(&BitboardMoveGenerator, &pos, 3), 2812);
        assert_eq!(perft(&BitboardMoveGenerator, &pos, 4), 43238);
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let pos = Position::new();
        let divide = perft_divide(&BitboardMoveGenerator, &pos, 3);
        assert_eq!(divide.len(), 20);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 8902);
        assert!(perft_divide(&BitboardMoveGenerator, &pos, 0).is_empty());
    }
}
