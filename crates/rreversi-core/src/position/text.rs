//! 盤面テキストの解析・出力
//!
//! 1行1段で8行。各行は空白区切りの8トークン、または空白なしの8文字。
//!
//! | 値 | トークン |
//! |----|----------|
//! | 黒 | `-1`, `X`, `B` |
//! | 白 | `1`, `O`, `W` |
//! | 空 | `0`, `.`, `-` |
//!
//! 空行と `#` で始まる行は無視する。

use crate::types::Color;

use super::{BoardArray, PositionError};

fn parse_token(token: &str) -> Option<i8> {
    match token {
        "-1" | "X" | "x" | "B" | "b" => Some(Color::Black.marker()),
        "1" | "O" | "o" | "W" | "w" => Some(Color::White.marker()),
        "0" | "." | "-" => Some(Color::EMPTY_MARKER),
        _ => None,
    }
}

/// 盤面テキストを盤面配列に変換
pub fn parse_board(text: &str) -> Result<BoardArray, PositionError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    if rows.len() != 8 {
        return Err(PositionError::RowCount(rows.len()));
    }

    let mut board = [[Color::EMPTY_MARKER; 8]; 8];
    for (row, line) in rows.iter().enumerate() {
        let tokens: Vec<String> = if line.contains(char::is_whitespace) {
            line.split_whitespace().map(str::to_owned).collect()
        } else {
            line.chars().map(String::from).collect()
        };
        if tokens.len() != 8 {
            return Err(PositionError::ColumnCount {
                row,
                found: tokens.len(),
            });
        }
        for (col, token) in tokens.into_iter().enumerate() {
            board[row][col] = match parse_token(&token) {
                Some(marker) => marker,
                None => return Err(PositionError::InvalidToken { row, col, token }),
            };
        }
    }

    Ok(board)
}

/// 盤面配列をテキストに変換（黒 `X`、白 `O`、空 `.`）
pub fn format_board(board: &BoardArray) -> String {
    let mut out = String::with_capacity(8 * 16);
    for cells in board {
        let line: Vec<&str> = cells
            .iter()
            .map(|&marker| match Color::from_marker(marker) {
                Some(Color::Black) => "X",
                Some(Color::White) => "O",
                None => ".",
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
