//! # rreversi-core
//!
//! 8×8 Reversed Reversi（石の少ない方が勝ち）のビットボードエンジン。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, Move, Value）
//! - `bitboard`: 64bit盤面表現、方向シフトマスク、マス分類マスク
//! - `movegen`: 合法手生成と着手（反転マスク計算）
//! - `position`: 手番側から見た局面と盤面配列/テキストとの変換
//! - `eval`: 手数依存の静的評価と終局評価
//! - `search`: Alpha-Beta付きNegamax探索と指し手選択
//!
//! 盤面は常に「手番側 (`own`)」と「相手側 (`opponent`)」の2枚のビットボードで表し、
//! ビット順は行優先・最上位ビットがマス(0,0)。

// Phase 1: 基本型
pub mod types;

// Phase 2: 盤面表現
pub mod bitboard;
pub mod position;

// Phase 3: 合法手生成
pub mod movegen;

// Phase 4: 評価
pub mod eval;

// Phase 5: 探索
pub mod search;

pub use bitboard::{bit_positions, popcount, Bitboard};
pub use eval::{evaluate, final_evaluate};
pub use movegen::{apply_move, legal_moves};
pub use position::Position;
pub use search::{search, select_move};
pub use types::{Color, Move, Square, Value};
