use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use rreversi_core::eval::PhaseEvaluator;
use rreversi_core::movegen::flips;
use rreversi_core::position::parse_board;
use rreversi_core::search::Searcher;
use rreversi_core::{Color, Position};

mod config;

use config::EngineConfig;

#[derive(Parser, Debug)]
#[command(name = "rreversi", author, version, about = "Reversed Reversi move selector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 候補手を列挙し、最後の行に選んだ手を出力する
    Best(BestArgs),
    /// 合法手と反転数を出力する
    Moves(BoardArgs),
}

#[derive(Args, Debug, Clone)]
struct BoardArgs {
    /// 盤面ファイル（`-` で標準入力）
    #[arg(long)]
    board: PathBuf,

    /// 手番
    #[arg(long, value_enum)]
    color: Side,
}

#[derive(Args, Debug, Clone)]
struct BestArgs {
    #[command(flatten)]
    board: BoardArgs,

    /// ヒューリスティック探索の深さ（設定ファイルより優先）
    #[arg(long)]
    depth: Option<u32>,

    /// 設定ファイル（JSON: {"search": ..., "eval": ...}）
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Black,
    White,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::Black => Color::Black,
            Side::White => Color::White,
        }
    }
}

fn read_board_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("failed to read board from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read board {}", path.display()))
}

fn load_position(args: &BoardArgs) -> Result<Position> {
    let text = read_board_text(&args.board)?;
    let board = parse_board(&text)
        .with_context(|| format!("failed to parse board {}", args.board.display()))?;
    let pos = Position::from_array(&board, args.color.into())?;
    Ok(pos)
}

fn run_best(args: &BestArgs, out: &mut impl Write) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        if depth == 0 {
            bail!("--depth must be >= 1");
        }
        config.search.depth = depth;
    }

    let pos = load_position(&args.board)?;
    log::info!(
        "{} to move, empty={} depth={} exact_threshold={}",
        Color::from(args.board.color),
        pos.empty_count(),
        config.search.depth,
        config.search.exact_threshold
    );

    for sq in pos.legal_moves() {
        writeln!(out, "{} {}", sq.row(), sq.col())?;
    }

    let mut searcher = Searcher::new(PhaseEvaluator::new(config.eval));
    let result = searcher.select_move(&pos, &config.search);
    log::info!(
        "bestmove {} score {} depth {}{} nodes {}",
        result.best_move,
        result.score,
        result.depth,
        if result.exact { " (exact)" } else { "" },
        result.stats.nodes
    );

    let (row, col) = result.best_move.to_row_col();
    writeln!(out, "{row} {col}")?;
    Ok(())
}

fn run_moves(args: &BoardArgs, out: &mut impl Write) -> Result<()> {
    let pos = load_position(args)?;
    let moves = pos.legal_moves();
    if moves.is_empty() {
        writeln!(out, "pass")?;
        return Ok(());
    }
    for sq in moves {
        let captured = flips(pos.own(), pos.opponent(), sq);
        writeln!(out, "{sq} {} {} flips={}", sq.row(), sq.col(), captured.count())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Commands::Best(args) => run_best(args, &mut out),
        Commands::Moves(args) => run_moves(args, &mut out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTPOS: &str = "\
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . O X . . .
. . . X O . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
";

    fn write_board(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rreversi-{}-{name}.txt", std::process::id()));
        fs::write(&path, text).expect("write temp board");
        path
    }

    #[test]
    fn test_cli_parses_best() {
        let cli = Cli::try_parse_from([
            "rreversi", "best", "--board", "-", "--color", "white", "--depth", "3",
        ])
        .expect("valid args");
        match cli.command {
            Commands::Best(args) => {
                assert_eq!(args.board.color, Side::White);
                assert_eq!(args.depth, Some(3));
                assert_eq!(args.board.board, PathBuf::from("-"));
            }
            Commands::Moves(_) => panic!("expected best"),
        }
    }

    #[test]
    fn test_run_best_prints_candidates_then_choice() {
        let path = write_board("best", STARTPOS);
        let args = BestArgs {
            board: BoardArgs {
                board: path.clone(),
                color: Side::Black,
            },
            depth: Some(1),
            config: None,
        };
        let mut out = Vec::new();
        run_best(&args, &mut out).expect("search succeeds");
        let _ = fs::remove_file(&path);

        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["2 3", "3 2", "4 5", "5 4", "2 3"]);
    }

    #[test]
    fn test_run_best_pass() {
        let board = "\
X O . . . . . X
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
X . . . . . . X
";
        let path = write_board("pass", board);
        let args = BestArgs {
            board: BoardArgs {
                board: path.clone(),
                color: Side::White,
            },
            depth: Some(2),
            config: None,
        };
        let mut out = Vec::new();
        run_best(&args, &mut out).expect("search succeeds");
        let _ = fs::remove_file(&path);
        assert_eq!(String::from_utf8(out).expect("utf8"), "-1 -1\n");
    }

    #[test]
    fn test_run_best_rejects_zero_depth() {
        let args = BestArgs {
            board: BoardArgs {
                board: PathBuf::from("unused"),
                color: Side::Black,
            },
            depth: Some(0),
            config: None,
        };
        assert!(run_best(&args, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_run_moves() {
        let path = write_board("moves", STARTPOS);
        let args = BoardArgs {
            board: path.clone(),
            color: Side::White,
        };
        let mut out = Vec::new();
        run_moves(&args, &mut out).expect("valid board");
        let _ = fs::remove_file(&path);

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().all(|line| line.ends_with("flips=1")));
    }
}
