//! 局面表現モジュール
//!
//! 手番側から見た局面を2枚のBitboardで表現する。
//!
//! - `Position`: 局面本体（`own` = 手番側の石、`opponent` = 相手側の石）
//! - `play` / `pass`: 着手・パス後の局面（手番を入れ替えた視点で返す）
//! - 盤面配列（`[[i8; 8]; 8]`、黒 = -1 / 白 = 1 / 空 = 0）との相互変換
//! - 盤面テキストの解析・出力
//!
//! `own & opponent == 0` を常に保つ。局面は `Copy` な値であり、
//! 着手は新しい局面を返すだけで元の局面を変更しない。

mod array;
mod error;
mod pos;
mod text;

pub use array::BoardArray;
pub use error::PositionError;
pub use pos::{Outcome, Position};
pub use text::{format_board, parse_board};
