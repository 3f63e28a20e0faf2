//! 指し手（Move）

use super::Square;

/// 指し手
///
/// 合法手が存在しない場合のみ `Pass` となる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// 指定マスに石を置く
    Place(Square),
    /// パス
    Pass,
}

impl Move {
    /// パスを表す (row, col)（盤外座標）
    pub const PASS_ROW_COL: (i32, i32) = (-1, -1);

    /// パスかどうか
    #[inline]
    pub const fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }

    /// 置くマス（パスならNone）
    #[inline]
    pub const fn square(self) -> Option<Square> {
        match self {
            Move::Place(sq) => Some(sq),
            Move::Pass => None,
        }
    }

    /// (row, col) に変換（パスは `PASS_ROW_COL`）
    #[inline]
    pub const fn to_row_col(self) -> (i32, i32) {
        match self {
            Move::Place(sq) => (sq.row() as i32, sq.col() as i32),
            Move::Pass => Self::PASS_ROW_COL,
        }
    }

    /// (row, col) から生成（`PASS_ROW_COL` はパス、それ以外の盤外はNone）
    pub fn from_row_col(row: i32, col: i32) -> Option<Move> {
        if (row, col) == Self::PASS_ROW_COL {
            return Some(Move::Pass);
        }
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Square::from_row_col(row, col).map(Move::Place)
    }
}

impl From<Square> for Move {
    #[inline]
    fn from(sq: Square) -> Move {
        Move::Place(sq)
    }
}

impl From<Option<Square>> for Move {
    #[inline]
    fn from(sq: Option<Square>) -> Move {
        sq.map_or(Move::Pass, Move::Place)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(sq) => write!(f, "{sq}"),
            Move::Pass => write!(f, "pass"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_row_col() {
        let mv = Move::Place(Square::new(2, 3));
        assert_eq!(mv.to_row_col(), (2, 3));
        assert_eq!(Move::Pass.to_row_col(), (-1, -1));
    }

    #[test]
    fn test_move_from_row_col() {
        assert_eq!(Move::from_row_col(-1, -1), Some(Move::Pass));
        assert_eq!(Move::from_row_col(7, 7), Some(Move::Place(Square::SQ_77)));
        assert_eq!(Move::from_row_col(8, 0), None);
        assert_eq!(Move::from_row_col(-1, 0), None);
    }

    #[test]
    fn test_move_from_option() {
        assert_eq!(Move::from(None), Move::Pass);
        assert_eq!(Move::from(Some(Square::SQ_00)), Move::Place(Square::SQ_00));
        assert!(Move::Pass.is_pass());
        assert_eq!(Move::Pass.square(), None);
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Place(Square::new(2, 3)).to_string(), "d3");
        assert_eq!(Move::Pass.to_string(), "pass");
    }
}
