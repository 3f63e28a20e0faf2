//! 盤面配列との相互変換
//!
//! 呼び出し側が持つ 8×8 の盤面配列（黒 = -1 / 白 = 1 / 空 = 0）を
//! 手番側視点の2枚のBitboardに詰め直す。ビット順は行優先で、
//! 返された指し手の (row, col) への変換にも同じ順序を使う。

use crate::bitboard::Bitboard;
use crate::types::{Color, Square};

use super::{Position, PositionError};

/// 8×8 の盤面配列
pub type BoardArray = [[i8; 8]; 8];

impl Position {
    /// 盤面配列と手番から局面を生成
    pub fn from_array(board: &BoardArray, side: Color) -> Result<Position, PositionError> {
        let mut own = Bitboard::EMPTY;
        let mut opponent = Bitboard::EMPTY;

        for (row, cells) in board.iter().enumerate() {
            for (col, &marker) in cells.iter().enumerate() {
                let sq = Square::new(row as u8, col as u8);
                match Color::from_marker(marker) {
                    Some(color) if color == side => own.set(sq),
                    Some(_) => opponent.set(sq),
                    None if marker == Color::EMPTY_MARKER => {}
                    None => return Err(PositionError::InvalidMarker { row, col, marker }),
                }
            }
        }

        Ok(Position::new(own, opponent))
    }

    /// 手番 `side` として盤面配列に戻す
    pub fn to_array(&self, side: Color) -> BoardArray {
        let mut board = [[Color::EMPTY_MARKER; 8]; 8];
        for sq in self.own().iter() {
            board[sq.row() as usize][sq.col() as usize] = side.marker();
        }
        for sq in self.opponent().iter() {
            board[sq.row() as usize][sq.col() as usize] = side.opponent().marker();
        }
        board
    }
}
