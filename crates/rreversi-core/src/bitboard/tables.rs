//! 方向シフトとマス分類マスク

use super::Bitboard;

/// 4隅
pub const CORNER_BB: Bitboard = Bitboard::new(0x8100_0000_0000_0081);

/// 隅に縦横で隣接するマス（各隅2マス、計8マス）
pub const ADJACENT_CORNER_BB: Bitboard = Bitboard::new(0x4281_0000_0000_8142);

/// 隅・隅隣接以外の全マス
pub const INTERIOR_BB: Bitboard =
    Bitboard::new(!(CORNER_BB.bits() | ADJACENT_CORNER_BB.bits()));

/// 全マス
pub const ALL_BB: Bitboard = Bitboard::ALL;

/// 盤上の8方向
///
/// 上位ビット側へのシフト（`<<`）は行または列の番号が小さくなる方向。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    UpLeft = 4,
    DownRight = 5,
    UpRight = 6,
    DownLeft = 7,
}

impl Direction {
    /// 方向の数
    pub const NUM: usize = 8;

    /// 全方向
    pub const ALL: [Direction; Direction::NUM] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::UpRight,
        Direction::DownLeft,
    ];

    /// シフト幅
    #[inline]
    pub const fn step(self) -> u32 {
        match self {
            Direction::Up | Direction::Down => 8,
            Direction::Left | Direction::Right => 1,
            Direction::UpLeft | Direction::DownRight => 9,
            Direction::UpRight | Direction::DownLeft => 7,
        }
    }

    /// 上位ビット側（`<<`）へのシフトか
    #[inline]
    pub const fn is_left_shift(self) -> bool {
        matches!(
            self,
            Direction::Up | Direction::Left | Direction::UpLeft | Direction::UpRight
        )
    }

    /// シフト後に適用する盤端マスク
    ///
    /// 行をまたいで反対側の列に回り込んだビットを落とす。
    #[inline]
    pub const fn mask(self) -> Bitboard {
        Bitboard::new(match self {
            Direction::Up | Direction::Down => 0xffff_ffff_ffff_ffff,
            Direction::Left => 0xfefe_fefe_fefe_fefe,
            Direction::Right => 0x7f7f_7f7f_7f7f_7f7f,
            Direction::UpLeft => 0xfefe_fefe_fefe_fe00,
            Direction::DownRight => 0x007f_7f7f_7f7f_7f7f,
            Direction::UpRight => 0x7f7f_7f7f_7f7f_7f00,
            Direction::DownLeft => 0x00fe_fefe_fefe_fefe,
        })
    }

    /// (行, 列) の変化量
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    /// 逆方向
    #[inline]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::DownRight => Direction::UpLeft,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
        }
    }

    /// 1マス分シフトし、盤端マスクを適用する
    #[inline]
    pub const fn shift(self, bb: Bitboard) -> Bitboard {
        let shifted = if self.is_left_shift() {
            bb.bits() << self.step()
        } else {
            bb.bits() >> self.step()
        };
        Bitboard::new(shifted & self.mask().bits())
    }
}
