//! Command-line driver: load a board, evolve it, save the result.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use weft_board::BoardPair;
use weft_engine::{Engine, EngineConfig};

const USAGE: &str = "\
usage: weft <num_generations> <infile> [outfile]

  <num_generations>  nonnegative number of generations to evolve
  <infile>           file holding the initial board
  [outfile]          file for the final board; omitted or '-' writes to stdout
";

struct Args {
    generations: u64,
    input: PathBuf,
    output: Option<PathBuf>,
}

fn parse_args(argv: &[String]) -> Result<Args, String> {
    if argv.len() < 2 || argv.len() > 3 {
        return Err(format!("expected 2 or 3 arguments, got {}", argv.len()));
    }
    let generations = argv[0]
        .parse::<u64>()
        .map_err(|_| format!("<num_generations> {:?} must be a nonnegative integer", argv[0]))?;
    let output = match argv.get(2).map(String::as_str) {
        None | Some("-") => None,
        Some(path) => Some(PathBuf::from(path)),
    };
    Ok(Args {
        generations,
        input: PathBuf::from(&argv[1]),
        output,
    })
}

fn run(args: &Args) -> Result<(), String> {
    let board = weft_io::load_path(&args.input)
        .map_err(|e| format!("failed to load {:?}: {e}", args.input))?;
    let geometry = board.geometry();
    log::info!(
        "loaded {}x{} board, {} live cell(s)",
        geometry.rows(),
        geometry.cols(),
        board.population(),
    );

    let pair = BoardPair::from_initial(board);
    let engine = Engine::new(EngineConfig::default());
    let start = Instant::now();
    let report = engine
        .evolve(&pair, args.generations)
        .map_err(|e| format!("cannot evolve this board: {e}"))?;
    log::info!(
        "evolved {} generation(s) in {:.3?}; {} words recomputed, {} copied",
        report.generations,
        start.elapsed(),
        report.words_recomputed(),
        report.words_copied(),
    );

    let final_board = pair.board(report.final_buffer);
    match &args.output {
        Some(path) => weft_io::save_path(path, final_board)
            .map_err(|e| format!("failed to save {path:?}: {e}"))?,
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            weft_io::write_board(&mut handle, final_board)
                .map_err(|e| format!("failed to write board to stdout: {e}"))?;
            handle.flush().map_err(|e| format!("failed to flush stdout: {e}"))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(message) = run(&args) {
        eprintln!("error: {message}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
