//! 着手（反転マスク計算）

use crate::bitboard::{Bitboard, Direction};
use crate::types::Square;

use super::generator::{legal_moves, opponent_ray};

/// `sq` に置いたときに反転する相手石
///
/// 各方向のレイのうち、先端の次のマスに自石があって閉じているものだけを合算する。
/// 盤端や空マスで途切れたレイは含めない。
#[inline]
pub fn flips(own: Bitboard, opponent: Bitboard, sq: Square) -> Bitboard {
    let placed = Bitboard::from_square(sq);
    let mut captured = Bitboard::EMPTY;

    for dir in Direction::ALL {
        let ray = opponent_ray(placed, opponent, dir);
        if (dir.shift(ray) & own).is_not_empty() {
            captured |= ray;
        }
    }

    captured
}

/// `sq` に着手した後の (`own`, `opponent`, 反転マスク) を返す
///
/// 手番は入れ替えない。入力は値渡しで変更されない。
///
/// 前提条件: `sq` は `legal_moves(own, opponent)` に含まれること
/// （呼び出し側の責任。debugビルドでのみ検査する）。
#[inline]
pub fn apply_move(
    own: Bitboard,
    opponent: Bitboard,
    sq: Square,
) -> (Bitboard, Bitboard, Bitboard) {
    debug_assert!(
        legal_moves(own, opponent).contains(sq),
        "apply_move: {sq} is not a legal move"
    );

    let captured = flips(own, opponent, sq);
    let new_own = own ^ Bitboard::from_square(sq) ^ captured;
    let new_opponent = opponent ^ captured;

    debug_assert!((new_own & new_opponent).is_empty());
    (new_own, new_opponent, captured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn bb(squares: &[(u8, u8)]) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for &(row, col) in squares {
            bb.set(Square::new(row, col));
        }
        bb
    }

    #[test]
    fn test_apply_move_startpos_flips_one() {
        let pos = Position::startpos();
        for sq in legal_moves(pos.own(), pos.opponent()) {
            let (own, opponent, captured) = apply_move(pos.own(), pos.opponent(), sq);
            assert_eq!(captured.count(), 1, "{sq}");
            assert_eq!(own.count(), 4);
            assert_eq!(opponent.count(), 1);
            assert!(own.contains(sq));
        }
    }

    #[test]
    fn test_apply_move_multiple_directions() {
        // (2,2) に置くと右方向と下方向の両方を挟む
        let own = bb(&[(2, 5), (5, 2)]);
        let opponent = bb(&[(2, 3), (2, 4), (3, 2), (4, 2)]);
        let (new_own, new_opponent, captured) = apply_move(own, opponent, Square::new(2, 2));
        assert_eq!(captured, opponent);
        assert!(new_opponent.is_empty());
        assert_eq!(new_own, own | opponent | bb(&[(2, 2)]));
    }

    #[test]
    fn test_flips_ignores_open_rays() {
        // 右方向は自石で閉じている、下方向は空マスで途切れている
        let own = bb(&[(2, 4)]);
        let opponent = bb(&[(2, 3), (3, 2), (4, 2)]);
        let captured = flips(own, opponent, Square::new(2, 2));
        assert_eq!(captured, bb(&[(2, 3)]));
    }

    #[test]
    fn test_flips_ignores_ray_to_edge() {
        // 盤端まで続く相手石は反転しない
        let own = bb(&[(0, 4)]);
        let opponent = bb(&[(0, 3), (0, 1), (0, 0)]);
        let captured = flips(own, opponent, Square::new(0, 2));
        assert_eq!(captured, bb(&[(0, 3)]));
    }

    #[test]
    fn test_apply_move_conserves_stones() {
        let pos = Position::startpos();
        let sq = Square::new(2, 3);
        let (own, opponent, _) = apply_move(pos.own(), pos.opponent(), sq);
        assert_eq!(
            own.count() + opponent.count(),
            pos.own().count() + pos.opponent().count() + 1
        );
        // 入力は変更されない
        assert_eq!(pos, Position::startpos());
    }
}
