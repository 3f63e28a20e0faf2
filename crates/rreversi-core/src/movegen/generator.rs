//! 合法手生成（方向ごとのレイ伸長）

use std::iter::Chain;

use crate::bitboard::{
    Bitboard, BitboardIter, Direction, ADJACENT_CORNER_BB, CORNER_BB, INTERIOR_BB,
};

/// 最初の1歩の後にレイを伸ばす回数
///
/// 1列8マスのうち両端（着手マスと挟む側の石）を除いた最大6個の相手石を辿るため、
/// 初回を含めて6回の伸長で足りる。
pub const MAX_RAY_EXTENSIONS: usize = 5;

/// 手番側 `own` が石を置けるマスを返す
///
/// 各方向について、`own` に隣接して連続する `opponent` の石を辿り、
/// その先が空マスならそこが合法手となる。合法手がなければ空のBitboard。
#[inline]
pub fn legal_moves(own: Bitboard, opponent: Bitboard) -> Bitboard {
    let empty = !(own | opponent);
    let mut moves = Bitboard::EMPTY;

    for dir in Direction::ALL {
        let ray = opponent_ray(own, opponent, dir);
        moves |= dir.shift(ray) & empty;
    }

    moves
}

/// `from` から `dir` 方向に連続する相手石を辿ったレイ
///
/// 盤端マスクは `Direction::shift` 内で毎回適用される。
#[inline]
pub(super) fn opponent_ray(from: Bitboard, opponent: Bitboard, dir: Direction) -> Bitboard {
    let mut ray = dir.shift(from) & opponent;
    for _ in 0..MAX_RAY_EXTENSIONS {
        ray |= dir.shift(ray) & opponent;
    }
    ray
}

/// 探索順に並べた指し手イテレータ
pub type OrderedMoves = Chain<Chain<BitboardIter, BitboardIter>, BitboardIter>;

/// 合法手を探索順（隅隣接 → 内側 → 隅、各グループ内はインデックス昇順）に列挙する
///
/// 順序は探索ノード数にのみ影響し、Alpha-Betaの返す評価値には影響しない。
#[inline]
pub fn ordered_moves(moves: Bitboard) -> OrderedMoves {
    (moves & ADJACENT_CORNER_BB)
        .iter()
        .chain((moves & INTERIOR_BB).iter())
        .chain((moves & CORNER_BB).iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Square;

    fn bb(squares: &[(u8, u8)]) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for &(row, col) in squares {
            bb.set(Square::new(row, col));
        }
        bb
    }

    #[test]
    fn test_legal_moves_startpos() {
        let pos = Position::startpos();
        let moves = legal_moves(pos.own(), pos.opponent());
        assert_eq!(moves, bb(&[(2, 3), (3, 2), (4, 5), (5, 4)]));
    }

    #[test]
    fn test_legal_moves_empty_board() {
        assert!(legal_moves(Bitboard::EMPTY, Bitboard::EMPTY).is_empty());
    }

    #[test]
    fn test_legal_moves_ray_ends_at_edge() {
        // 相手石が盤端まで続いていれば置く場所がない
        let own = bb(&[(0, 0)]);
        let opponent = bb(&[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7)]);
        assert!(legal_moves(own, opponent).is_empty());
    }

    #[test]
    fn test_legal_moves_long_ray() {
        // (0,0) 自石、(0,1)-(0,6) 相手石 → (0,7) が合法
        let own = bb(&[(0, 0)]);
        let opponent = bb(&[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6)]);
        assert_eq!(legal_moves(own, opponent), bb(&[(0, 7)]));
    }

    #[test]
    fn test_legal_moves_no_wraparound() {
        // 行末の相手石の「次」は次の行の先頭ではない
        let own = bb(&[(0, 6)]);
        let opponent = bb(&[(0, 7)]);
        assert!(legal_moves(own, opponent).is_empty());

        let own = bb(&[(1, 1)]);
        let opponent = bb(&[(1, 0)]);
        assert!(legal_moves(own, opponent).is_empty());
    }

    #[test]
    fn test_legal_moves_diagonal() {
        let own = bb(&[(7, 0)]);
        let opponent = bb(&[(6, 1), (5, 2)]);
        assert_eq!(legal_moves(own, opponent), bb(&[(4, 3)]));
    }

    #[test]
    fn test_ordered_moves_priority() {
        let moves = bb(&[(0, 0), (0, 1), (3, 3), (7, 7), (6, 7), (2, 2)]);
        let order: Vec<Square> = ordered_moves(moves).collect();
        assert_eq!(
            order,
            vec![
                Square::new(0, 1),
                Square::new(6, 7),
                Square::new(2, 2),
                Square::new(3, 3),
                Square::new(0, 0),
                Square::new(7, 7),
            ]
        );
    }
}
