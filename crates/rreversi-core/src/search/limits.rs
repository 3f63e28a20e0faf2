//! 探索パラメータ

use serde::{Deserialize, Serialize};

/// 探索の深さ設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// ヒューリスティック探索の深さ（0は1として扱う）
    pub depth: u32,
    /// 空きマスがこの数以下なら終局まで完全に読む
    pub exact_threshold: u32,
}

impl SearchLimits {
    /// 空きマス数 `empty_count` の局面で使う (深さ, 完全読みか)
    #[inline]
    pub fn depth_for(&self, empty_count: u32) -> (u32, bool) {
        if empty_count <= self.exact_threshold {
            (empty_count, true)
        } else {
            (self.depth.max(1), false)
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            depth: 5,
            exact_threshold: 10,
        }
    }
}
