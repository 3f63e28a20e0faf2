//! 基本型モジュール
//!
//! エンジン全体で使用する基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Square ← Move
//!
//! Color, Value は独立
//! ```

mod color;
mod moves;
mod square;
mod value;

pub use color::Color;
pub use moves::Move;
pub use square::Square;
pub use value::Value;
