//! 局面本体（Position）

use crate::bitboard::Bitboard;
use crate::movegen::{apply_move, legal_moves};
use crate::types::{Move, Square};

use super::PositionError;

/// 終局時の勝敗（手番側視点）
///
/// 石の数が少ない方が勝ち。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    OwnWins,
    OpponentWins,
    Draw,
}

/// 局面（手番側視点）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    own: Bitboard,
    opponent: Bitboard,
}

impl Position {
    /// 初期配置の空きマス数を除いた総手数
    pub const MAX_ROUNDS: i32 = 60;

    /// 2枚のBitboardから生成
    ///
    /// `own & opponent` は空でなければならない（debugビルドでのみ検査）。
    #[inline]
    pub fn new(own: Bitboard, opponent: Bitboard) -> Position {
        debug_assert!((own & opponent).is_empty(), "Position::new: stones overlap");
        Position { own, opponent }
    }

    /// 2枚のBitboardから生成（重なりを検査）
    pub fn try_new(own: Bitboard, opponent: Bitboard) -> Result<Position, PositionError> {
        match (own & opponent).first() {
            Some(sq) => Err(PositionError::Overlap(sq)),
            None => Ok(Position { own, opponent }),
        }
    }

    /// 初期局面（黒番視点）
    ///
    /// (3,3)=白, (3,4)=黒, (4,3)=黒, (4,4)=白
    pub fn startpos() -> Position {
        let mut black = Bitboard::EMPTY;
        black.set(Square::new(3, 4));
        black.set(Square::new(4, 3));
        let mut white = Bitboard::EMPTY;
        white.set(Square::new(3, 3));
        white.set(Square::new(4, 4));
        Position::new(black, white)
    }

    /// 手番側の石
    #[inline]
    pub const fn own(&self) -> Bitboard {
        self.own
    }

    /// 相手側の石
    #[inline]
    pub const fn opponent(&self) -> Bitboard {
        self.opponent
    }

    /// 空きマス
    #[inline]
    pub fn empty(&self) -> Bitboard {
        !(self.own | self.opponent)
    }

    /// 空きマス数
    #[inline]
    pub fn empty_count(&self) -> u32 {
        self.empty().count()
    }

    /// 手数（初期配置の4石を除いて何手目か: `60 - 空きマス数`）
    #[inline]
    pub fn round(&self) -> i32 {
        Self::MAX_ROUNDS - self.empty_count() as i32
    }

    /// (手番側の石数, 相手側の石数)
    #[inline]
    pub fn stone_counts(&self) -> (u32, u32) {
        (self.own.count(), self.opponent.count())
    }

    /// 手番側の合法手
    #[inline]
    pub fn legal_moves(&self) -> Bitboard {
        legal_moves(self.own, self.opponent)
    }

    /// 相手側の合法手（相手が手番だった場合）
    #[inline]
    pub fn opponent_moves(&self) -> Bitboard {
        legal_moves(self.opponent, self.own)
    }

    /// 両者とも合法手がない（終局）
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty() && self.opponent_moves().is_empty()
    }

    /// 手番を入れ替えた局面
    #[inline]
    pub const fn swapped(&self) -> Position {
        Position {
            own: self.opponent,
            opponent: self.own,
        }
    }

    /// `sq` に着手し、次の手番側視点の局面と反転マスクを返す
    ///
    /// 前提条件: `sq` は合法手であること（debugビルドでのみ検査）。
    #[inline]
    pub fn play(&self, sq: Square) -> (Position, Bitboard) {
        let (own, opponent, captured) = apply_move(self.own, self.opponent, sq);
        (
            Position {
                own: opponent,
                opponent: own,
            },
            captured,
        )
    }

    /// パスした後の局面（石は変化しない）
    #[inline]
    pub const fn pass(&self) -> Position {
        self.swapped()
    }

    /// 合法性を検査してから着手する
    ///
    /// 合法手があるときのパス、合法手でないマスへの着手はエラー。
    pub fn try_play(&self, mv: Move) -> Result<(Position, Bitboard), PositionError> {
        let moves = self.legal_moves();
        match mv {
            Move::Place(sq) if moves.contains(sq) => Ok(self.play(sq)),
            Move::Place(sq) => Err(PositionError::IllegalMove(sq)),
            Move::Pass if moves.is_empty() => Ok((self.pass(), Bitboard::EMPTY)),
            Move::Pass => Err(PositionError::IllegalPass),
        }
    }

    /// 終局していれば勝敗を返す
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_terminal() {
            return None;
        }
        let (own, opponent) = self.stone_counts();
        Some(match own.cmp(&opponent) {
            std::cmp::Ordering::Less => Outcome::OwnWins,
            std::cmp::Ordering::Greater => Outcome::OpponentWins,
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}
