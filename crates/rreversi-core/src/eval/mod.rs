//! 評価モジュール
//!
//! - `EvalParams`: 評価係数（手数帯ごとの行動力・反転数の重みを含む）
//! - `Evaluator`: 探索から呼ばれる評価関数のトレイト
//! - `PhaseEvaluator`: マス分類・行動力・反転数による手数依存の静的評価
//! - `final_evaluate`: 終局時の石差評価

mod evaluate;
mod params;

pub use evaluate::{evaluate, final_evaluate, Evaluator, PhaseEvaluator, FINAL_SCORE_SHIFT};
pub use params::{EvalParams, EvalParamsError, PhaseWeights};
