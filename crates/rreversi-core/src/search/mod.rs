//! 探索モジュール
//!
//! Alpha-Beta枝刈り付きNegamax探索と、残り空きマス数に応じた
//! ヒューリスティック探索／完全読みの切り替え。
//!
//! - `SearchLimits`: 探索深さと完全読みに切り替える閾値
//! - `Searcher`: 評価関数を保持して探索を行う
//! - `search` / `select_move`: デフォルト評価での簡易エントリポイント

mod limits;
mod searcher;

#[cfg(test)]
mod tests;

pub use limits::SearchLimits;
pub use searcher::{SearchResult, SearchStats, Searcher};

use crate::bitboard::Bitboard;
use crate::eval::PhaseEvaluator;
use crate::position::Position;
use crate::types::{Move, Square, Value};

/// デフォルト評価で `(own, opponent)` を窓 `(alpha, beta)` で探索する
///
/// 直前の着手の反転マスクは空として扱う。
pub fn search(
    own: Bitboard,
    opponent: Bitboard,
    depth: u32,
    alpha: Value,
    beta: Value,
) -> (Value, Option<Square>) {
    let mut searcher = Searcher::new(PhaseEvaluator::shared_default());
    searcher.negamax(&Position::new(own, opponent), depth, alpha, beta, Bitboard::EMPTY)
}

/// デフォルト評価で指し手を選ぶ
///
/// 空きマスが `SearchLimits::default().exact_threshold` 以下なら完全読み、
/// それ以外は `heuristic_depth` で探索する。合法手がなければ `Move::Pass`。
pub fn select_move(own: Bitboard, opponent: Bitboard, heuristic_depth: u32) -> Move {
    let limits = SearchLimits {
        depth: heuristic_depth,
        ..SearchLimits::default()
    };
    let mut searcher = Searcher::new(PhaseEvaluator::shared_default());
    searcher.select_move(&Position::new(own, opponent), &limits).best_move
}
