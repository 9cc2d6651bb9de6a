// Ficheiro: src/main.rs
// Descrição: Executa a busca numa posição FEN e imprime o resultado.
//
// Uso: xadrez [FEN] [--depth N]

use std::env;
use std::process;
use std::sync::Arc;

use log::{error, info};

use xadrez::{BitboardMoveGenerator, Position, SearchConfig, SearchController, Searcher};

struct Args {
    fen: Option<String>,
    config: SearchConfig,
}

fn parse_args() -> Result<Args, String> {
    let mut fen_parts: Vec<String> = Vec::new();
    let mut config = SearchConfig::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--depth" {
            let value = args.next().ok_or("--depth requer um valor")?;
            let depth = value.parse::<u8>().map_err(|_| format!("profundidade inválida: {}", value))?;
            config = config.with_depth(depth);
        } else {
            // Permite a FEN sem aspas, com os campos em argumentos separados
            fen_parts.push(arg);
        }
    }

    let fen = if fen_parts.is_empty() { None } else { Some(fen_parts.join(" ")) };
    Ok(Args { fen, config })
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let position = match args.fen.as_deref() {
        Some(fen) => match Position::from_fen(fen) {
            Ok(pos) => pos,
            Err(e) => {
                error!("FEN inválida '{}': {}", fen, e);
                process::exit(1);
            }
        },
        None => Position::new(),
    };

    info!("posição:\n{}", position);

    let controller = Arc::new(SearchController::new());
    let rx = Searcher::new(BitboardMoveGenerator).with_config(args.config).spawn(controller, position);

    match rx.recv() {
        Ok(result) => {
            println!("depth {}", result.depth);
            println!("bestmove {}", result.best_move);
            println!("score {}", result.score);
        }
        Err(e) => {
            error!("a busca terminou sem resultado: {}", e);
            process::exit(1);
        }
    }
}
