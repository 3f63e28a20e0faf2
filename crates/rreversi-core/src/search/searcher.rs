//! Negamax探索本体

use crate::bitboard::Bitboard;
use crate::eval::Evaluator;
use crate::movegen::ordered_moves;
use crate::position::Position;
use crate::types::{Move, Square, Value};

use super::SearchLimits;

/// 探索統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 訪問ノード数
    pub nodes: u64,
    /// 静的評価した葉の数
    pub leaves: u64,
    /// 終局局面の数
    pub terminals: u64,
    /// 強制パスの数
    pub passes: u64,
    /// beta cutの数
    pub cutoffs: u64,
}

/// 探索結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// 最善手（合法手がなければパス）
    pub best_move: Move,
    /// 手番側視点の評価値
    pub score: Value,
    /// 探索深さ
    pub depth: u32,
    /// 終局まで完全に読んだか
    pub exact: bool,
    /// 探索統計
    pub stats: SearchStats,
}

/// 探索エンジン
pub struct Searcher<E: Evaluator> {
    evaluator: E,
    stats: SearchStats,
}

impl<E: Evaluator> Searcher<E> {
    pub fn new(evaluator: E) -> Self {
        Searcher {
            evaluator,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// 前回のリセット以降の探索統計
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// 指し手を選ぶ
    ///
    /// 空きマスが `limits.exact_threshold` 以下なら空きマス数の深さで終局まで読み、
    /// それ以外は `limits.depth` で探索する。窓は常に `(-INFINITE, INFINITE)`。
    pub fn select_move(&mut self, pos: &Position, limits: &SearchLimits) -> SearchResult {
        self.reset_stats();

        let empty_count = pos.empty_count();
        let (depth, exact) = limits.depth_for(empty_count);
        log::debug!(
            "select_move: empty={empty_count} depth={depth} mode={}",
            if exact { "exact" } else { "heuristic" }
        );

        let (score, best) =
            self.negamax(pos, depth, -Value::INFINITE, Value::INFINITE, Bitboard::EMPTY);
        let best_move = Move::from(best);

        log::debug!(
            "bestmove {best_move} score {score} nodes {} leaves {} cutoffs {}",
            self.stats.nodes,
            self.stats.leaves,
            self.stats.cutoffs
        );

        SearchResult {
            best_move,
            score,
            depth,
            exact,
            stats: self.stats,
        }
    }

    /// Negamax探索（Alpha-Beta枝刈り付き）
    ///
    /// `captured` は直前の着手で反転したマスで、深さ0の静的評価にのみ使う。
    /// 返り値は (手番側視点の評価値, 最善手)。終局・葉・強制パスでは最善手はNone。
    pub fn negamax(
        &mut self,
        pos: &Position,
        depth: u32,
        alpha: Value,
        beta: Value,
        captured: Bitboard,
    ) -> (Value, Option<Square>) {
        self.node(pos, depth, alpha, beta, captured, 0)
    }

    fn node(
        &mut self,
        pos: &Position,
        depth: u32,
        mut alpha: Value,
        beta: Value,
        captured: Bitboard,
        ply: u32,
    ) -> (Value, Option<Square>) {
        self.stats.nodes += 1;

        let own_moves = pos.legal_moves();
        let opp_moves = pos.opponent_moves();

        // 終局
        if own_moves.is_empty() && opp_moves.is_empty() {
            self.stats.terminals += 1;
            return (self.evaluator.final_evaluate(pos), None);
        }

        if depth == 0 {
            self.stats.leaves += 1;
            let value = self.evaluator.evaluate(pos, own_moves, opp_moves, captured);
            return (value, None);
        }

        // 強制パス: 深さは消費しない
        if own_moves.is_empty() {
            self.stats.passes += 1;
            let (value, _) =
                self.node(&pos.pass(), depth, -beta, -alpha, Bitboard::EMPTY, ply + 1);
            return (-value, None);
        }

        let mut best_value = -Value::INFINITE;
        let mut best_move = None;

        for sq in ordered_moves(own_moves) {
            let (child, child_captured) = pos.play(sq);
            let (value, _) = self.node(&child, depth - 1, -beta, -alpha, child_captured, ply + 1);
            let value = -value;

            if ply == 0 {
                log::debug!("root {sq} ({}, {}) score {value}", sq.row(), sq.col());
            }

            // 同点なら先に調べた手を残す
            if value > best_value {
                best_value = value;
                best_move = Some(sq);
            }
            if best_value > alpha {
                alpha = best_value;
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                if ply == 0 {
                    log::trace!("root cutoff at {sq}: alpha {alpha} >= beta {beta}");
                }
                break;
            }
        }

        (best_value, best_move)
    }
}
