//! ビットボードモジュール
//!
//! 64マスの盤面を64bitで表現し、ビット演算による合法手生成・反転計算の土台を提供する。
//!
//! - `Bitboard`: 64bit盤面表現（行優先、最上位ビット = (0,0)）
//! - `BitboardIter`: 立っているビットのマスを昇順に列挙する遅延イテレータ
//! - `Direction`: 8方向のシフトと盤端の回り込み除去マスク
//! - マス分類マスク（`CORNER_BB`, `ADJACENT_CORNER_BB`, `INTERIOR_BB`）

mod core;
mod tables;

pub use self::core::Bitboard;
pub use self::core::BitboardIter;
pub use tables::*;

/// 立っているビット数（popcount）
#[inline]
pub const fn popcount(bb: u64) -> u32 {
    bb.count_ones()
}

/// 立っているビットのマスを昇順に列挙する
///
/// 呼び出すたびに新しいイテレータを返す。
#[inline]
pub const fn bit_positions(bb: u64) -> BitboardIter {
    Bitboard::new(bb).iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_popcount() {
        assert_eq!(popcount(0), 0);
        assert_eq!(popcount(u64::MAX), 64);
        assert_eq!(popcount(0x8100_0000_0000_0081), 4);
    }

    #[test]
    fn test_bit_positions_restartable() {
        let bb = 0x8000_0000_0000_0001u64;
        let first: Vec<Square> = bit_positions(bb).collect();
        let second: Vec<Square> = bit_positions(bb).collect();
        assert_eq!(first, vec![Square::SQ_00, Square::SQ_77]);
        assert_eq!(first, second);
        assert_eq!(bit_positions(0).next(), None);
    }
}
