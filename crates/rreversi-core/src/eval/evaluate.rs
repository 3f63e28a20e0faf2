//! 静的評価と終局評価

use std::sync::OnceLock;

use crate::bitboard::{Bitboard, ADJACENT_CORNER_BB, CORNER_BB, INTERIOR_BB};
use crate::position::Position;
use crate::types::Value;

use super::EvalParams;

/// 終局評価で石差に掛けるシフト量
///
/// どのヒューリスティック評価よりも絶対値が大きくなる。
pub const FINAL_SCORE_SHIFT: u32 = 20;

/// 評価関数のトレイト
///
/// 契約:
/// - 手番側 (`pos.own()`) 視点のスコアを返す（正なら手番側有利）。
/// - `captured` は直前の着手で反転したマス（パス直後は空）。
/// - `own_moves` / `opp_moves` は呼び出し側で計算済みの合法手。
pub trait Evaluator {
    /// 非終局局面のヒューリスティック評価
    fn evaluate(
        &self,
        pos: &Position,
        own_moves: Bitboard,
        opp_moves: Bitboard,
        captured: Bitboard,
    ) -> Value;

    /// 終局局面の評価
    ///
    /// デフォルト: `(相手の石数 - 手番側の石数) << FINAL_SCORE_SHIFT`
    fn final_evaluate(&self, pos: &Position) -> Value {
        final_evaluate(pos.own(), pos.opponent())
    }
}

impl<T: Evaluator + ?Sized> Evaluator for &T {
    fn evaluate(
        &self,
        pos: &Position,
        own_moves: Bitboard,
        opp_moves: Bitboard,
        captured: Bitboard,
    ) -> Value {
        (**self).evaluate(pos, own_moves, opp_moves, captured)
    }

    fn final_evaluate(&self, pos: &Position) -> Value {
        (**self).final_evaluate(pos)
    }
}

/// マス分類と手数帯ごとの行動力・反転数による評価
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseEvaluator {
    params: EvalParams,
}

impl PhaseEvaluator {
    pub fn new(params: EvalParams) -> Self {
        PhaseEvaluator { params }
    }

    #[inline]
    pub fn params(&self) -> &EvalParams {
        &self.params
    }

    /// デフォルト係数の共有インスタンス
    pub fn shared_default() -> &'static PhaseEvaluator {
        static DEFAULT: OnceLock<PhaseEvaluator> = OnceLock::new();
        DEFAULT.get_or_init(PhaseEvaluator::default)
    }
}

#[inline]
fn count_diff(own: Bitboard, opponent: Bitboard, mask: Bitboard) -> i32 {
    (own & mask).count() as i32 - (opponent & mask).count() as i32
}

impl Evaluator for PhaseEvaluator {
    fn evaluate(
        &self,
        pos: &Position,
        own_moves: Bitboard,
        opp_moves: Bitboard,
        captured: Bitboard,
    ) -> Value {
        let p = &self.params;
        let own = pos.own();
        let opponent = pos.opponent();

        let mut score = count_diff(own, opponent, ADJACENT_CORNER_BB) * p.adjacent_corner_weight;
        score -= count_diff(own, opponent, INTERIOR_BB) * p.interior_weight;
        // 隅は非対称: 自分で取るのは減点、相手に取らせるのは加点
        score -= (own & CORNER_BB).count() as i32 * p.own_corner_penalty;
        score += (opponent & CORNER_BB).count() as i32 * p.opponent_corner_bonus;

        if let Some(phase) = p.phase(pos.round()) {
            let mobility = own_moves.count() as i32 - opp_moves.count() as i32;
            score += mobility * phase.mobility;
            score -= captured.count() as i32 * phase.capture;
        }

        Value::new(score)
    }
}

/// デフォルト係数での静的評価
pub fn evaluate(
    own: Bitboard,
    opponent: Bitboard,
    own_moves: Bitboard,
    opp_moves: Bitboard,
    captured: Bitboard,
) -> Value {
    PhaseEvaluator::shared_default().evaluate(
        &Position::new(own, opponent),
        own_moves,
        opp_moves,
        captured,
    )
}

/// 終局評価（石の少ない方が勝ち）
#[inline]
pub fn final_evaluate(own: Bitboard, opponent: Bitboard) -> Value {
    Value::new((opponent.count() as i32 - own.count() as i32) << FINAL_SCORE_SHIFT)
}
