//! 手番（Color）

/// 手番（黒/白）
///
/// 黒が先手。盤面配列では黒 = `-1`、白 = `1`、空 = `0` で表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// 盤面配列上の空マス
    pub const EMPTY_MARKER: i8 = 0;

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// 盤面配列上の石の値
    #[inline]
    pub const fn marker(self) -> i8 {
        match self {
            Color::Black => -1,
            Color::White => 1,
        }
    }

    /// 盤面配列上の値から生成（空マス・不正値はNone）
    #[inline]
    pub const fn from_marker(marker: i8) -> Option<Color> {
        match marker {
            -1 => Some(Color::Black),
            1 => Some(Color::White),
            _ => None,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}
