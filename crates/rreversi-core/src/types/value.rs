//! 評価値（Value）
//!
//! 手番側から見た評価値。正なら手番側有利。
//! 終局スコアは石差を `<< 20` したもので、どの静的評価値よりも絶対値が大きい。

/// 評価値
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 引き分け
    pub const DRAW: Value = Value(0);
    /// 無限大（探索窓の初期値）
    pub const INFINITE: Value = Value(0x7fff_ffff);

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::ops::Add for Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: Value) -> Value {
        Value(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Value {
    type Output = Value;

    #[inline]
    fn sub(self, rhs: Value) -> Value {
        Value(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Value {
    #[inline]
    fn add_assign(&mut self, rhs: Value) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Value {
    #[inline]
    fn sub_assign(&mut self, rhs: Value) {
        self.0 -= rhs.0;
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_neg_infinite() {
        // 窓を反転してもオーバーフローしない
        assert_eq!(-Value::INFINITE, Value::new(-0x7fff_ffff));
        assert_eq!(-(-Value::INFINITE), Value::INFINITE);
    }

    #[test]
    fn test_value_arith() {
        let mut v = Value::new(10) + Value::new(5) - Value::new(3);
        assert_eq!(v.raw(), 12);
        v += Value::new(8);
        v -= Value::new(20);
        assert_eq!(v, Value::ZERO);
        assert!(Value::new(-1) < Value::DRAW);
    }
}
