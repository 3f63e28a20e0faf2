//! 合法手生成モジュール
//!
//! - `legal_moves`: 手番側が石を置けるマスのBitboard
//! - `flips` / `apply_move`: 着手による反転マスクと着手後の盤面
//! - `ordered_moves`: 探索用の手順（隅隣接 → 内側 → 隅）

mod apply;
mod generator;

pub use apply::{apply_move, flips};
pub use generator::{legal_moves, ordered_moves, OrderedMoves, MAX_RAY_EXTENSIONS};
