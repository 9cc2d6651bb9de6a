// Busca de profundidade fixa executada numa thread própria, com um único resultado

pub mod alpha_beta;
pub mod evaluation;

pub use alpha_beta::*;
pub use evaluation::*;

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crossbeam::channel::{bounded, Receiver};
use log::{debug, info};

use crate::board::Position;
use crate::moves::{BitboardMoveGenerator, MoveGenerator};
use crate::types::Move;

/// Profundidade padrão da busca, em meios-lances
pub const DEFAULT_DEPTH: u8 = 5;

/// Configurações da busca
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }
}

/// Controlo partilhado entre quem pede a busca e a thread que a executa:
/// sinal de paragem e contador de nós.
#[derive(Debug, Default)]
pub struct SearchController {
    stop: AtomicBool,
    node_counter: AtomicU64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pede à busca para parar o mais cedo possível.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.node_counter.load(Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn count_node(&self) {
        self.node_counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Resultado da busca: score em centipeões, positivo a favor das brancas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub depth: u8,
    pub best_move: String,
    pub score: i32,
    pub nodes: u64,
    /// A busca foi interrompida antes de terminar
    pub stopped: bool,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "depth {} bestmove {} score {} nodes {}", self.depth, self.best_move, self.score, self.nodes)
    }
}

/// Motor de busca: um gerador de lances e uma configuração.
#[derive(Debug, Clone)]
pub struct Searcher<G> {
    generator: G,
    config: SearchConfig,
}

impl<G: MoveGenerator> Searcher<G> {
    pub fn new(generator: G) -> Self {
        Searcher { generator, config: SearchConfig::default() }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Busca síncrona com a janela completa.
    pub fn run(&self, controller: &SearchController, position: &Position) -> Evaluation {
        let start = Instant::now();
        let nodes_before = controller.nodes();
        let depth = self.config.depth;

        let (score, best) = Minimax::new(&self.generator, controller).search(position, SCORE_MIN, SCORE_MAX, depth);

        let result = Evaluation {
            depth,
            best_move: Move::text(best),
            score,
            nodes: controller.nodes() - nodes_before,
            stopped: controller.should_stop(),
        };

        info!(
            "{} time {}ms{}",
            result,
            start.elapsed().as_millis(),
            if result.stopped { " (stopped)" } else { "" }
        );
        result
    }
}

impl<G: MoveGenerator + 'static> Searcher<G> {
    /// Lança a busca numa thread e devolve o canal do resultado.
    ///
    /// Chega exatamente um valor; depois o canal fica desligado.
    pub fn spawn(self, controller: Arc<SearchController>, position: Position) -> Receiver<Evaluation> {
        let (tx, rx) = bounded(1);

        thread::spawn(move || {
            let result = self.run(&controller, &position);
            if tx.send(result).is_err() {
                debug!("search result dropped: receiver closed");
            }
        });

        rx
    }
}

/// Ponto de entrada: gerador por bitboards, profundidade padrão.
pub fn search_best_move(controller: Arc<SearchController>, position: Position) -> Receiver<Evaluation> {
    Searcher::new(BitboardMoveGenerator).spawn(controller, position)
}
