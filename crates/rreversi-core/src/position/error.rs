//! 局面関連のエラー型

use crate::types::Square;

/// 局面の構築・解析・着手で発生するエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// 同じマスに両者の石がある
    #[error("stones overlap at {0}")]
    Overlap(Square),

    /// 盤面配列に不正な値がある
    #[error("invalid marker {marker} at ({row}, {col})")]
    InvalidMarker { row: usize, col: usize, marker: i8 },

    /// 盤面テキストの行数が8でない
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    /// 盤面テキストの列数が8でない
    #[error("row {row}: expected 8 cells, found {found}")]
    ColumnCount { row: usize, found: usize },

    /// 盤面テキストに解釈できないトークンがある
    #[error("invalid token {token:?} at ({row}, {col})")]
    InvalidToken { row: usize, col: usize, token: String },

    /// 合法手でないマスへの着手
    #[error("illegal move: {0}")]
    IllegalMove(Square),

    /// 合法手があるのにパスした
    #[error("pass is not allowed while a legal move exists")]
    IllegalPass,
}
