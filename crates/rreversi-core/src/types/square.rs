//! 升目（Square）

/// 升目（0-63）
///
/// 配置: 行優先
/// (0,0)=0, (0,1)=1, ..., (0,7)=7, (1,0)=8, ..., (7,7)=63
///
/// Bitboard上では最上位ビットが (0,0) に対応する（`bit_index` 参照）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 64;
    /// 一辺のマス数
    pub const SIDE: u8 = 8;

    /// (0,0)
    pub const SQ_00: Square = Square(0);
    /// (7,7)
    pub const SQ_77: Square = Square(63);

    /// 行・列から生成
    ///
    /// row, col は 0..8 でなければならない
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < Self::SIDE && col < Self::SIDE);
        Square(row * Self::SIDE + col)
    }

    /// 行・列から生成（範囲チェックあり）
    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Square> {
        if row < Self::SIDE && col < Self::SIDE {
            Some(Square(row * Self::SIDE + col))
        } else {
            None
        }
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if n < Self::NUM as u8 {
            Some(Square(n))
        } else {
            None
        }
    }

    /// u8から生成（範囲チェックなし）
    ///
    /// # Safety
    /// n < 64 でなければならない
    #[inline]
    pub const unsafe fn from_u8_unchecked(n: u8) -> Square {
        debug_assert!(n < 64);
        Square(n)
    }

    /// 行
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::SIDE
    }

    /// 列
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::SIDE
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Bitboard上のビット位置（最上位ビット = (0,0)）
    #[inline]
    pub const fn bit_index(self) -> u32 {
        63 - self.0 as u32
    }

    /// 全升目を昇順で返す
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }

    /// 座標表記（"d3"等: 列 a-h、行 1-8）に変換
    pub fn to_coord(self) -> String {
        let col = (b'a' + self.col()) as char;
        let row = (b'1' + self.row()) as char;
        format!("{col}{row}")
    }

    /// 座標表記からSquareに変換
    pub fn from_coord(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].to_ascii_lowercase().checked_sub(b'a')?;
        let row = bytes[1].checked_sub(b'1')?;
        Square::from_row_col(row, col)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_coord())
    }
}
