use crate::board::Position;
use crate::moves::MoveGenerator;
use crate::search::evaluation::{evaluate, terminal_score, SCORE_MAX, SCORE_MIN};
use crate::search::SearchController;
use crate::types::Move;

/// Minimax com poda alfa-beta: brancas maximizam, pretas minimizam.
///
/// Cada filho é uma cópia nova da posição; nada é desfeito na volta.
pub struct Minimax<'a, G: MoveGenerator + ?Sized> {
    generator: &'a G,
    controller: &'a SearchController,
}

impl<'a, G: MoveGenerator + ?Sized> Minimax<'a, G> {
    pub fn new(generator: &'a G, controller: &'a SearchController) -> Self {
        Minimax { generator, controller }
    }

    /// Devolve (score, melhor lance). Sem lance nas folhas e nas posições terminais.
    ///
    /// Com o sinal de paragem ativo o nó devolve a avaliação estática e os
    /// laços param depois do filho corrente, deixando o melhor lance já visto.
    pub fn search(&self, position: &Position, mut alpha: i32, mut beta: i32, depth: u8) -> (i32, Option<Move>) {
        self.controller.count_node();

        if depth == 0 || self.controller.should_stop() {
            return (evaluate(position, self.generator), None);
        }

        let legal = self.generator.legal_moves(position);
        if let Some(score) = terminal_score(position, &legal) {
            return (score, None);
        }

        let moves = legal.moves;
        // Antes de qualquer melhoria fica o primeiro lance
        let mut best = moves[0];

        if position.white_to_move {
            let mut max = SCORE_MIN;
            for &mv in &moves {
                let child = position.make_move(mv);
                let (eval, _) = self.search(&child, alpha, beta, depth - 1);

                if eval > max {
                    best = mv;
                    max = eval;
                }

                // Corte beta
                if eval >= beta {
                    best = mv;
                    break;
                }

                alpha = alpha.max(eval);

                if self.controller.should_stop() {
                    break;
                }
            }
            (max, Some(best))
        } else {
            let mut min = SCORE_MAX;
            for &mv in &moves {
                let child = position.make_move(mv);
                // Janela um ponto acima de beta: um filho que valha exatamente `min`
                // devolve o valor exato, nunca um limite inferior igual a `min`
                let (eval, _) = self.search(&child, alpha, beta.saturating_add(1), depth - 1);

                // Empates substituem o lance anterior (<=), ao contrário das brancas
                if eval <= min {
                    best = mv;
                    min = eval;
                }

                // Corte alfa
                if eval <= alpha {
                    best = mv;
                    break;
                }

                beta = beta.min(eval);

                if self.controller.should_stop() {
                    break;
                }
            }
            (min, Some(best))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::BitboardMoveGenerator;
    use crate::types::PieceKind;

    /// Minimax sem poda sobre a mesma árvore, para comparação.
    fn full_minimax(position: &Position, depth: u8) -> i32 {
        let generator = BitboardMoveGenerator;
        if depth == 0 {
            return evaluate(position, &generator);
        }
        let legal = generator.legal_moves(position);
        if let Some(score) = terminal_score(position, &legal) {
            return score;
        }
        let scores = legal.moves.iter().map(|&mv| full_minimax(&position.make_move(mv), depth - 1));
        if position.white_to_move {
            scores.max().unwrap_or(SCORE_MIN)
        } else {
            scores.min().unwrap_or(SCORE_MAX)
        }
    }

    fn search(fen: &str, depth: u8) -> (i32, Option<Move>) {
        let controller = SearchController::new();
        let pos = Position::from_fen(fen).unwrap();
        Minimax::new(&BitboardMoveGenerator, &controller).search(&pos, SCORE_MIN, SCORE_MAX, depth)
    }

    const SMALL_POSITIONS: [&str; 6] = [
        "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1",
        "4k3/8/8/3q4/4P3/8/8/4K3 b - - 0 1",
        "r3k3/8/8/8/8/8/5PPP/R5K1 w - - 0 1",
        "6k1/5ppp/8/8/8/2n5/8/R3K3 b - - 0 1",
        "8/8/8/4k3/8/3n4/2P5/4K2R w K - 0 1",
        "1r5k/P7/8/8/8/8/6b1/K7 w - - 0 1",
    ];

    #[test]
    fn test_depth_zero_is_static_evaluation() {
        let (score, mv) = search("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1", 0);
        assert_eq!(score, -800);
        assert_eq!(mv, None);
    }

    #[test]
    fn test_pruned_score_matches_full_minimax() {
        for fen in SMALL_POSITIONS {
            let pos = Position::from_fen(fen).unwrap();
            for depth in 1..=3 {
                let (score, mv) = search(fen, depth);
                assert_eq!(score, full_minimax(&pos, depth), "{} depth {}", fen, depth);
                assert!(mv.is_some());
            }
        }
    }

    #[test]
    fn test_root_move_is_optimal() {
        for fen in SMALL_POSITIONS {
            let pos = Position::from_fen(fen).unwrap();
            for depth in 1..=3 {
                let (score, mv) = search(fen, depth);
                let mv = mv.unwrap();
                assert!(BitboardMoveGenerator.legal_moves(&pos).moves.contains(&mv));
                assert_eq!(full_minimax(&pos.make_move(mv), depth - 1), score, "{} depth {} {}", fen, depth, mv);
            }
        }
    }

    #[test]
    fn test_black_keeps_queen_when_cuts_return_bounds() {
        // A profundidade 3 os lances do rei são refutados com valores iguais ao
        // mínimo corrente; nenhum deles pode substituir um lance exato
        let fen = "4k3/8/8/3q4/4P3/8/8/4K3 b - - 0 1";
        let pos = Position::from_fen(fen).unwrap();
        let (score, mv) = search(fen, 3);
        let mv = mv.unwrap();
        assert_eq!(score, -900);
        assert_eq!(mv.piece, PieceKind::Queen, "{}", mv);
        assert_eq!(full_minimax(&pos.make_move(mv), 2), -900);
    }

    #[test]
    fn test_captures_hanging_queen() {
        let (score, mv) = search("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1", 1);
        assert_eq!(mv.map(|m| m.to_string()), Some("e4d5".to_string()));
        assert_eq!(score, 100);
    }

    #[test]
    fn test_finds_mate_in_one() {
        let (score, mv) = search("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 2);
        assert_eq!(score, SCORE_MAX);
        assert_eq!(mv.map(|m| m.to_string()), Some("a1a8".to_string()));
    }

    #[test]
    fn test_black_finds_mate_in_one() {
        let (score, mv) = search("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1", 2);
        assert_eq!(score, SCORE_MIN);
        assert_eq!(mv.map(|m| m.to_string()), Some("a8a1".to_string()));
    }

    #[test]
    fn test_terminal_nodes_return_no_move() {
        let mate = search("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3", 3);
        assert_eq!(mate, (SCORE_MIN, None));

        let stalemate = search("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", 3);
        assert_eq!(stalemate, (0, None));
    }

    #[test]
    fn test_black_ties_take_the_last_equal_move() {
        // Todos os lances do rei preto valem o mesmo a profundidade 1
        let fen = "8/8/8/8/8/8/8/K6k b - - 0 1";
        let pos = Position::from_fen(fen).unwrap();
        let moves = BitboardMoveGenerator.legal_moves(&pos).moves;
        let (score, mv) = search(fen, 1);
        assert_eq!(score, 0);
        assert_eq!(mv, moves.last().copied());

        // Nas brancas o primeiro lance fica
        let fen = "8/8/8/8/8/8/8/K6k w - - 0 1";
        let pos = Position::from_fen(fen).unwrap();
        let moves = BitboardMoveGenerator.legal_moves(&pos).moves;
        let (_, mv) = search(fen, 1);
        assert_eq!(mv, moves.first().copied());
    }

    #[test]
    fn test_stopped_controller_returns_static_score() {
        let controller = SearchController::new();
        controller.stop();
        let pos = Position::new();
        let (score, mv) = Minimax::new(&BitboardMoveGenerator, &controller).search(&pos, SCORE_MIN, SCORE_MAX, 5);
        assert_eq!(score, 0);
        assert_eq!(mv, None);
        assert_eq!(controller.nodes(), 1);
    }
}
